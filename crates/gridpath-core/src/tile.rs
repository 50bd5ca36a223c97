//! The [`Tile`] type: the closed alphabet of grid cell values.

use std::fmt;

/// A single grid cell value.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    /// Open ground, `' '`.
    #[default]
    Free,
    /// Impassable cell, `'x'`.
    Obstacle,
    /// Search origin, `'A'`.
    Start,
    /// Search target, `'B'`.
    End,
    /// Reached by the search but not on the shortest path, `'o'`.
    Explored,
    /// On the shortest path, `'.'`.
    Path,
}

impl Tile {
    /// Every tile, in declaration order.
    pub const ALL: [Tile; 6] = [
        Tile::Free,
        Tile::Obstacle,
        Tile::Start,
        Tile::End,
        Tile::Explored,
        Tile::Path,
    ];

    /// The character used for this tile in the text format.
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Tile::Free => ' ',
            Tile::Obstacle => 'x',
            Tile::Start => 'A',
            Tile::End => 'B',
            Tile::Explored => 'o',
            Tile::Path => '.',
        }
    }

    /// Parse a text-format character. Returns `None` outside the alphabet.
    #[inline]
    pub const fn from_char(ch: char) -> Option<Tile> {
        match ch {
            ' ' => Some(Tile::Free),
            'x' => Some(Tile::Obstacle),
            'A' => Some(Tile::Start),
            'B' => Some(Tile::End),
            'o' => Some(Tile::Explored),
            '.' => Some(Tile::Path),
            _ => None,
        }
    }

    /// Whether a search may step onto this tile: free ground or the target.
    ///
    /// The start marker is never entered; it only seeds the search.
    #[inline]
    pub const fn is_enterable(self) -> bool {
        matches!(self, Tile::Free | Tile::End)
    }
}

impl TryFrom<char> for Tile {
    type Error = char;

    fn try_from(ch: char) -> Result<Self, char> {
        Tile::from_char(ch).ok_or(ch)
    }
}

impl From<Tile> for char {
    fn from(t: Tile) -> Self {
        t.to_char()
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
