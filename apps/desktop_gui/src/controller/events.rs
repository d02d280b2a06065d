//! Events flowing into the UI thread from the image worker and the notifier.

use resvg::{tiny_skia, usvg};
use shared::{domain::MenuItemId, error::Notice};

pub enum UiEvent {
    Info(String),
    Notice(Notice),
    CardImageLoaded {
        item_id: MenuItemId,
        url: String,
        image: DecodedImage,
    },
    CardImageFailed {
        item_id: MenuItemId,
        url: String,
        reason: String,
    },
}

/// RGBA pixels ready to upload as a texture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: usize,
    pub height: usize,
    pub rgba: Vec<u8>,
}

const MAX_CARD_WIDTH: u32 = 800;
const MAX_CARD_HEIGHT: u32 = 600;

/// Turns downloaded bytes into card pixels. Raster formats go through `image`,
/// SVG (what placehold.co serves without a format suffix) through `resvg`.
pub struct CardImageDecoder {
    svg_options: usvg::Options<'static>,
}

impl CardImageDecoder {
    pub fn with_system_fonts() -> Self {
        let mut svg_options = usvg::Options::default();
        svg_options.fontdb_mut().load_system_fonts();
        Self { svg_options }
    }

    /// Shapes without text still render; text nodes are skipped.
    pub fn without_fonts() -> Self {
        Self {
            svg_options: usvg::Options::default(),
        }
    }

    pub fn decode(&self, bytes: &[u8], content_type: Option<&str>) -> Result<DecodedImage, String> {
        if is_svg(bytes, content_type) {
            rasterize_svg(bytes, &self.svg_options)
        } else {
            decode_raster(bytes)
        }
    }
}

fn is_svg(bytes: &[u8], content_type: Option<&str>) -> bool {
    if content_type.is_some_and(|ct| ct.trim().to_ascii_lowercase().starts_with("image/svg")) {
        return true;
    }
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    let head = &bytes[start..];
    head.starts_with(b"<svg") || head.starts_with(b"<?xml")
}

fn decode_raster(bytes: &[u8]) -> Result<DecodedImage, String> {
    let dynamic = image::load_from_memory(bytes).map_err(|err| err.to_string())?;
    let resized = dynamic.thumbnail(MAX_CARD_WIDTH, MAX_CARD_HEIGHT).to_rgba8();
    let width = resized.width() as usize;
    let height = resized.height() as usize;
    Ok(DecodedImage {
        width,
        height,
        rgba: resized.into_raw(),
    })
}

fn rasterize_svg(bytes: &[u8], options: &usvg::Options<'static>) -> Result<DecodedImage, String> {
    let tree = usvg::Tree::from_data(bytes, options).map_err(|err| err.to_string())?;
    let size = tree.size();
    let scale = (MAX_CARD_WIDTH as f32 / size.width())
        .min(MAX_CARD_HEIGHT as f32 / size.height())
        .min(1.0);
    let width = (size.width() * scale).ceil() as u32;
    let height = (size.height() * scale).ceil() as u32;
    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| format!("svg has unusable size {width}x{height}"))?;
    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    // tiny-skia stores premultiplied alpha; egui uploads unmultiplied RGBA.
    let rgba = pixmap
        .pixels()
        .iter()
        .flat_map(|pixel| {
            let color = pixel.demultiply();
            [color.red(), color.green(), color.blue(), color.alpha()]
        })
        .collect();
    Ok(DecodedImage {
        width: width as usize,
        height: height as usize,
        rgba,
    })
}
