use std::{convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(MenuItemId);

/// Page selection. Any id outside the known set is kept verbatim as `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum PageId {
    #[default]
    Home,
    BookTable,
    Contact,
    Unknown(String),
}

impl PageId {
    pub const HOME_ID: &'static str = "home";
    pub const BOOK_TABLE_ID: &'static str = "book-table";
    pub const CONTACT_ID: &'static str = "contact";

    pub fn from_id(raw: &str) -> Self {
        match raw {
            Self::HOME_ID => Self::Home,
            Self::BOOK_TABLE_ID => Self::BookTable,
            Self::CONTACT_ID => Self::Contact,
            other => Self::Unknown(other.to_string()),
        }
    }

    pub fn as_id(&self) -> &str {
        match self {
            Self::Home => Self::HOME_ID,
            Self::BookTable => Self::BOOK_TABLE_ID,
            Self::Contact => Self::CONTACT_ID,
            Self::Unknown(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl FromStr for PageId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_id(s))
    }
}

impl From<&str> for PageId {
    fn from(value: &str) -> Self {
        Self::from_id(value)
    }
}

impl From<String> for PageId {
    fn from(value: String) -> Self {
        match value.as_str() {
            Self::HOME_ID => Self::Home,
            Self::BOOK_TABLE_ID => Self::BookTable,
            Self::CONTACT_ID => Self::Contact,
            _ => Self::Unknown(value),
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_id())
    }
}

// Serialized as the bare wire id so descriptors read like the site's routes.
impl Serialize for PageId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_id())
    }
}

impl<'de> Deserialize<'de> for PageId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from(raw))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub description: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    pub label: String,
    pub page: PageId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingForm {
    pub party_size: u64,
    pub preferred_time: String,
}

impl BookingForm {
    pub const MIN_PARTY_SIZE: u64 = 1;

    pub fn is_submittable(&self) -> bool {
        self.party_size > 0 && !self.preferred_time.is_empty()
    }
}

impl Default for BookingForm {
    fn default() -> Self {
        Self {
            party_size: Self::MIN_PARTY_SIZE,
            preferred_time: String::new(),
        }
    }
}
