//! Per-card image source with a single fallback substitution.

use shared::view::ImageSource;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSlot {
    source: ImageSource,
    substituted: bool,
}

impl ImageSlot {
    pub fn new(source: ImageSource) -> Self {
        Self {
            source,
            substituted: false,
        }
    }

    pub fn source(&self) -> &ImageSource {
        &self.source
    }

    pub fn current_url(&self) -> &str {
        if self.substituted {
            &self.source.fallback
        } else {
            &self.source.primary
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.substituted
    }

    /// Records a load failure of the current URL.
    ///
    /// Returns the fallback URL the first time only; afterwards the slot stays on the
    /// fallback and `None` is returned, so a broken fallback is never retried.
    pub fn on_load_failed(&mut self) -> Option<&str> {
        if self.substituted {
            return None;
        }
        self.substituted = true;
        Some(&self.source.fallback)
    }
}
