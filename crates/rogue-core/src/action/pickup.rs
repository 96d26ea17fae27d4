//! Item pickup and the inventory listing

use crate::dungeon::{Position, Room};
use crate::player::Player;

/// Reply to an inventory query with nothing carried
pub const EMPTY_INVENTORY_MSG: &str = "You do not have anything in your inventory";

/// Move the item at `pos` from the room into the player's inventory.
///
/// Returns the item's name, or `None` if the tile holds no item.
pub fn pick_up_at(room: &mut Room, player: &mut Player, pos: Position) -> Option<String> {
    let item = room.take_item_at(pos)?;
    let name = item.name.clone();
    player.pick_up(item);
    Some(name)
}

/// Comma separated item names in pickup order
pub fn inventory_listing(player: &Player) -> String {
    if player.inventory().is_empty() {
        EMPTY_INVENTORY_MSG.to_string()
    } else {
        player.inventory_names().join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::{Item, ItemCatalog};

    #[test]
    fn test_pickup_moves_item() {
        let mut room = Room::new(1, 5, 5).unwrap();
        let catalog: ItemCatalog = [7].into_iter().collect();
        room.add_item(Item::new(7, "Elven Mail", "armour", Position::new(2, 1)), &catalog, None)
            .unwrap();
        let mut player = Player::new("Tester", 1, 0, Position::new(1, 1));

        assert_eq!(pick_up_at(&mut room, &mut player, Position::new(3, 3)), None);
        assert_eq!(
            pick_up_at(&mut room, &mut player, Position::new(2, 1)).as_deref(),
            Some("Elven Mail")
        );
        assert!(room.items().is_empty());
        assert_eq!(player.inventory().len(), 1);
    }

    #[test]
    fn test_listing() {
        let mut player = Player::new("Tester", 1, 0, Position::new(1, 1));
        assert_eq!(inventory_listing(&player), EMPTY_INVENTORY_MSG);
        player.pick_up(Item::new(1, "Gold", "gold", Position::new(1, 2)));
        assert_eq!(inventory_listing(&player), "Gold");
        player.pick_up(Item::new(2, "Bread", "food", Position::new(1, 3)));
        assert_eq!(inventory_listing(&player), "Gold, Bread");
    }
}
