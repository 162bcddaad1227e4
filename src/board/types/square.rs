//! 0x88 square type and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the chess board, as a 0x88 index.
///
/// The low 3 bits hold the file (0 = a), bits 4-6 hold the rank
/// (0 = rank 1). Indices with `index & 0x88 != 0` are off the board,
/// which lets ray walks validate a step with a single bitwise test.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

/// Off-board mask for the 0x88 addressing scheme.
pub(crate) const OFF_BOARD: u8 = 0x88;

impl Square {
    /// Number of addressable slots in the 0x88 scheme.
    pub(crate) const COUNT: usize = 128;

    /// Create a square from rank and file, both 0-7.
    #[must_use]
    pub const fn new(rank: u8, file: u8) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Square((rank << 4) | file))
        } else {
            None
        }
    }

    /// Create a square from a raw 0x88 index, rejecting off-board values.
    #[must_use]
    pub const fn from_raw(raw: u8) -> Option<Self> {
        if raw & OFF_BOARD == 0 {
            Some(Square(raw))
        } else {
            None
        }
    }

    /// Get the rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.0 >> 4
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> u8 {
        self.0 & 0x7
    }

    /// Get the raw 0x88 index (0-119, always on-board)
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }

    /// Step by a signed 0x88 ray delta, returning `None` off the board.
    ///
    /// Deltas of one king-step magnitude (±1, ±15, ±16, ±17) and knight
    /// jumps (±14, ±18, ±31, ±33) are all correctly rejected by the
    /// single off-board test.
    #[inline]
    #[must_use]
    pub fn offset(self, delta: i16) -> Option<Square> {
        let next = i16::from(self.0) + delta;
        if next & i16::from(OFF_BOARD) == 0 && (0..128).contains(&next) {
            Some(Square(next as u8))
        } else {
            None
        }
    }

    /// Iterate all 64 on-board squares, a1 first, h8 last.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..8).flat_map(|rank| (0u8..8).map(move |file| Square((rank << 4) | file)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.file() + b'a') as char, self.rank() + 1)
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}

impl TryFrom<(u8, u8)> for Square {
    type Error = SquareError;

    fn try_from((rank, file): (u8, u8)) -> Result<Self, Self::Error> {
        if rank >= 8 {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        if file >= 8 {
            return Err(SquareError::FileOutOfBounds { file });
        }
        Ok(Square((rank << 4) | file))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(file_ch), Some(rank_ch), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            });
        };

        let file = match file_ch {
            'a'..='h' => file_ch as u8 - b'a',
            _ => {
                return Err(SquareError::InvalidNotation {
                    notation: s.to_string(),
                })
            }
        };

        let rank = match rank_ch {
            '1'..='8' => rank_ch as u8 - b'1',
            _ => {
                return Err(SquareError::InvalidNotation {
                    notation: s.to_string(),
                })
            }
        };

        Ok(Square((rank << 4) | file))
    }
}
