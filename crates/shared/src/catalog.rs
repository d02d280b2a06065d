//! Static reference data shown by the site. Never mutated at runtime.

use crate::domain::{MenuItem, MenuItemId, NavEntry, PageId};

pub const BRAND_NAME: &str = "TheLittleLemon Restaurant";
pub const FOOTER_TEXT: &str = "\u{a9} 2025 TheLittleLemon Restaurant. All rights reserved.";
pub const IMAGE_FALLBACK_URL: &str = "https://placehold.co/400x300/CCCCCC/666666?text=Image+Error";

pub const MENU_TITLE: &str = "Our Delicious Menu";
pub const BOOKING_TITLE: &str = "Book Your Table";
pub const PARTY_SIZE_LABEL: &str = "Number of People:";
pub const PREFERRED_TIME_LABEL: &str = "Preferred Time:";
pub const SUBMIT_LABEL: &str = "Book Now";
pub const CONTACT_TITLE: &str = "Contact Us";
pub const CONTACT_BODY: &str =
    "Have questions? Feel free to reach out to us! You can email us at info@example.com.";
pub const NOT_FOUND_TITLE: &str = "Page Not Found";
pub const NOT_FOUND_BODY: &str = "The requested page does not exist.";

pub fn menu_items() -> Vec<MenuItem> {
    vec![
        MenuItem {
            id: MenuItemId(1),
            name: "Spicy Chicken Noodles".to_string(),
            description: "A fiery blend of tender chicken, fresh vegetables, and savory noodles with a spicy kick.".to_string(),
            image_url: "https://placehold.co/400x300/F0F0F0/333333?text=Chicken+Noodles".to_string(),
        },
        MenuItem {
            id: MenuItemId(2),
            name: "Vegetarian Delight Pizza".to_string(),
            description: "Hand-tossed crust topped with fresh bell peppers, onions, mushrooms, and mozzarella cheese.".to_string(),
            image_url: "https://placehold.co/400x300/E0E0E0/555555?text=Veggie+Pizza".to_string(),
        },
        MenuItem {
            id: MenuItemId(3),
            name: "Classic Beef Burger".to_string(),
            description: "Juicy beef patty with lettuce, tomato, pickles, and our special sauce on a toasted bun. Served with fries.".to_string(),
            image_url: "https://placehold.co/400x300/D0D0D0/777777?text=Beef+Burger".to_string(),
        },
    ]
}

pub fn nav_entries() -> Vec<NavEntry> {
    vec![
        NavEntry {
            label: "Home".to_string(),
            page: PageId::Home,
        },
        NavEntry {
            label: "Book a Table".to_string(),
            page: PageId::BookTable,
        },
        NavEntry {
            label: "Contact".to_string(),
            page: PageId::Contact,
        },
    ]
}

/// Everything the renderer reads besides controller state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub menu: Vec<MenuItem>,
    pub nav: Vec<NavEntry>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            menu: menu_items(),
            nav: nav_entries(),
        }
    }
}
