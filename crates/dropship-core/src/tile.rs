//! Ground-layer tile tags.

/// Contents of one ground-layer cell.
///
/// At most one object occupies a cell. Discriminants follow the state
/// encoding of the training stack, where `0` denotes absence.
///
/// Skyscrapers and stations are placed at reset and never move or vanish.
/// Packets and dropzones are consumed by pickup and delivery and respawned
/// onto empty cells by the engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Tile {
    /// Nothing on the ground.
    #[default]
    Empty = 0,
    /// Static obstacle; flying into it crashes the drone.
    Skyscraper = 2,
    /// Charging station; a drone on it regains battery.
    Station = 3,
    /// Delivery target; consumed when a carrying drone lands on it.
    Dropzone = 4,
    /// Deliverable package; consumed when a free drone picks it up.
    Packet = 5,
}

impl Tile {
    /// Whether this cell holds no object.
    pub fn is_empty(self) -> bool {
        self == Tile::Empty
    }

    /// Whether this tile is permanent for the episode.
    pub fn is_static(self) -> bool {
        matches!(self, Tile::Skyscraper | Tile::Station)
    }

    /// Whether this tile can be consumed and respawned.
    pub fn is_consumable(self) -> bool {
        matches!(self, Tile::Dropzone | Tile::Packet)
    }

    /// The state-encoding value of this tile.
    pub fn code(self) -> u8 {
        self as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_follow_state_encoding() {
        assert_eq!(Tile::Empty.code(), 0);
        assert_eq!(Tile::Skyscraper.code(), 2);
        assert_eq!(Tile::Station.code(), 3);
        assert_eq!(Tile::Dropzone.code(), 4);
        assert_eq!(Tile::Packet.code(), 5);
    }

    #[test]
    fn static_and_consumable_partition_the_objects() {
        for tile in [Tile::Skyscraper, Tile::Station, Tile::Dropzone, Tile::Packet] {
            assert_ne!(tile.is_static(), tile.is_consumable());
        }
        assert!(!Tile::Empty.is_static());
        assert!(!Tile::Empty.is_consumable());
    }
}
