//! Drawer menu.

use serde::Serialize;

use super::Route;

/// An entry in the drawer menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DrawerItem {
    pub id: &'static str,
    pub label: &'static str,
    /// Route name, for entries that navigate somewhere.
    pub screen: Option<&'static str>,
}

#[rustfmt::skip]
const ITEMS: &[DrawerItem] = &[
    DrawerItem { id: "1", label: "Her name", screen: None },
    DrawerItem { id: "2", label: "Home", screen: Some("Home") },
    DrawerItem { id: "3", label: "Cart", screen: Some("Cart") },
    DrawerItem { id: "4", label: "Store", screen: None },
    DrawerItem { id: "5", label: "Blog", screen: None },
    DrawerItem { id: "6", label: "Location", screen: None },
    DrawerItem { id: "7", label: "Jewellery", screen: None },
    DrawerItem { id: "8", label: "Electronics", screen: None },
];

/// The side menu.
#[derive(Debug, Clone, Copy, Default)]
pub struct Drawer;

impl Drawer {
    /// Menu entries in display order.
    #[must_use]
    pub const fn items(&self) -> &'static [DrawerItem] {
        ITEMS
    }

    /// Route for the entry with `id`; `None` for unknown ids and for entries
    /// that do not navigate.
    #[must_use]
    pub fn select(&self, id: &str) -> Option<Route> {
        ITEMS
            .iter()
            .find(|item| item.id == id)
            .and_then(|item| item.screen)
            .and_then(Route::from_name)
    }
}
