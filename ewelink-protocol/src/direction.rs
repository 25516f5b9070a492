//! Directional commands sent by the controller

/// Direction commanded by a controller packet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Direction {
    /// No button held
    #[default]
    Stop = 0,
    Left = 1,
    Right = 2,
    Up = 3,
    Down = 4,
}

impl Direction {
    /// All directions in wire-code order
    pub const ALL: [Direction; 5] = [
        Direction::Stop,
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Parse a direction from its wire code
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Direction::Stop),
            1 => Some(Direction::Left),
            2 => Some(Direction::Right),
            3 => Some(Direction::Up),
            4 => Some(Direction::Down),
            _ => None,
        }
    }

    /// Wire code of this direction
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl From<Direction> for u8 {
    fn from(direction: Direction) -> Self {
        direction.code()
    }
}
