//! Commands queued from the UI to the image worker.

use shared::domain::MenuItemId;

pub enum BackendCommand {
    FetchImage { item_id: MenuItemId, url: String },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::FetchImage { .. } => "fetch_image",
        }
    }
}
