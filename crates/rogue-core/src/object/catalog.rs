//! Known item ids

use hashbrown::HashSet;

use super::ItemId;

/// The set of item ids a dungeon definition declares.
///
/// Item records whose id is not in the catalog are discarded at load time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemCatalog {
    known: HashSet<ItemId>,
}

impl ItemCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: ItemId) -> bool {
        self.known.insert(id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.known.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.known.len()
    }

    pub fn is_empty(&self) -> bool {
        self.known.is_empty()
    }
}

impl FromIterator<ItemId> for ItemCatalog {
    fn from_iter<I: IntoIterator<Item = ItemId>>(iter: I) -> Self {
        Self {
            known: iter.into_iter().collect(),
        }
    }
}
