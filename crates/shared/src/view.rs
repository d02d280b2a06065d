//! Renderer-agnostic view descriptors and the action hooks they carry.

use serde::{Deserialize, Serialize};

use crate::domain::{MenuItemId, PageId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum UiAction {
    Navigate { page: PageId },
    SetPartySize { raw: String },
    SetPreferredTime { raw: String },
    SubmitBooking,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    PartySize,
    PreferredTime,
}

impl FormField {
    pub fn element_id(self) -> &'static str {
        match self {
            Self::PartySize => "numPeople",
            Self::PreferredTime => "bookingTime",
        }
    }

    /// Action fired when the bound input changes to `raw`.
    pub fn on_change(self, raw: impl Into<String>) -> UiAction {
        let raw = raw.into();
        match self {
            Self::PartySize => UiAction::SetPartySize { raw },
            Self::PreferredTime => UiAction::SetPreferredTime { raw },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    Number { min: u64 },
    Time,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputView {
    pub field: FormField,
    pub label: String,
    pub kind: InputKind,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonView {
    pub label: String,
    pub on_click: UiAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSource {
    pub primary: String,
    pub fallback: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuCard {
    pub item_id: MenuItemId,
    pub name: String,
    pub description: String,
    pub image: ImageSource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItemView {
    pub label: String,
    pub page: PageId,
    pub active: bool,
    pub on_click: UiAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavBar {
    pub brand: String,
    pub items: Vec<NavItemView>,
}

impl NavBar {
    pub fn active_item(&self) -> Option<&NavItemView> {
        self.items.iter().find(|item| item.active)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum PageContent {
    MenuGallery {
        title: String,
        cards: Vec<MenuCard>,
    },
    BookingForm {
        title: String,
        party_size: InputView,
        preferred_time: InputView,
        submit: ButtonView,
    },
    Contact {
        title: String,
        body: String,
    },
    NotFound {
        title: String,
        body: String,
    },
}

impl PageContent {
    pub fn title(&self) -> &str {
        match self {
            Self::MenuGallery { title, .. }
            | Self::BookingForm { title, .. }
            | Self::Contact { title, .. }
            | Self::NotFound { title, .. } => title,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewDescriptor {
    pub page: PageId,
    pub nav: NavBar,
    pub content: PageContent,
}
