//! Object system
//!
//! Items that lie in rooms or travel in the player's inventory, and the
//! catalog of item ids a dungeon definition is allowed to place.

mod catalog;
mod item;

pub use catalog::ItemCatalog;
pub use item::{Item, ItemId, ItemType};
