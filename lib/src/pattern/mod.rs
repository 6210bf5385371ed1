//! Seed patterns.
//!
//! Every pattern is an 8×8 bitmap. A pattern is written into the grid
//! in one of four [`Orientation`]s, at an origin chosen by a [`Placement`].

use crate::grid::{Grid, ALIVE, DEAD};
use educe::Educe;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

mod orientation;

pub use orientation::Orientation;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Width and height of every pattern.
pub const PATTERN_SIZE: usize = 8;

/// A named 8×8 bitmap.
///
/// Each row is a bitmask; the most significant bit is column `0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pattern {
    /// The name used in seed requests.
    pub name: &'static str,

    /// The rows of the bitmap, from top to bottom.
    pub rows: [u8; PATTERN_SIZE],
}

impl Pattern {
    /// The state of the pixel at `(row, col)` of the bitmap.
    #[inline]
    pub fn pixel(&self, row: usize, col: usize) -> u8 {
        if self.rows[row] & (0x80 >> col) != 0 {
            ALIVE
        } else {
            DEAD
        }
    }

    /// Number of living pixels.
    pub fn population(&self) -> usize {
        self.rows.iter().map(|row| row.count_ones() as usize).sum()
    }

    /// Writes the bitmap, turned by `orientation`, into the grid with its
    /// top left corner at `(origin_row, origin_col)`.
    ///
    /// Dead pixels are written too, so the footprint replaces whatever was
    /// there. Pixels falling outside the grid are dropped.
    pub fn apply(
        &self,
        grid: &mut Grid,
        orientation: Orientation,
        origin_row: usize,
        origin_col: usize,
    ) {
        for row in 0..PATTERN_SIZE {
            let target_row = origin_row + row;
            if target_row >= grid.rows() {
                break;
            }
            for col in 0..PATTERN_SIZE {
                let target_col = origin_col + col;
                if target_col >= grid.columns() {
                    break;
                }
                let (source_row, source_col) = orientation.source(row, col);
                grid.set(target_row, target_col, self.pixel(source_row, source_col));
            }
        }
    }
}

impl Display for Pattern {
    /// Displays the bitmap in [Plaintext](https://conwaylife.com/wiki/Plaintext)
    /// style, `.` for dead and `O` for living pixels.
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        for row in 0..PATTERN_SIZE {
            for col in 0..PATTERN_SIZE {
                f.write_str(if self.pixel(row, col) == ALIVE { "O" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// All stored patterns.
pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "frogger",
        rows: [
            0b0000_1110,
            0b0010_0001,
            0b0010_0001,
            0b0010_0001,
            0b0000_0000,
            0b0000_1110,
            0b0000_0000,
            0b0000_0000,
        ],
    },
    Pattern {
        name: "clapper",
        rows: [
            0b0000_0000,
            0b0000_0000,
            0b0001_0000,
            0b0001_1000,
            0b0001_1000,
            0b0000_1000,
            0b0000_0000,
            0b0000_0000,
        ],
    },
    Pattern {
        name: "blinkers",
        rows: [
            0b0000_0000,
            0b1110_0111,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
            0b0100_0010,
            0b0100_0010,
            0b0100_0010,
        ],
    },
    Pattern {
        name: "nova",
        rows: [
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
            0b0000_1000,
            0b0001_1100,
            0b0011_0110,
            0b0000_0000,
            0b0000_0000,
        ],
    },
    Pattern {
        name: "bullseye",
        rows: [
            0b0000_0000,
            0b1110_0000,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
            0b0000_0110,
            0b0000_0101,
            0b0000_0100,
        ],
    },
    Pattern {
        name: "glider",
        rows: [
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
            0b0110_0000,
            0b1010_0000,
            0b0010_0000,
        ],
    },
    Pattern {
        name: "void",
        rows: [0; PATTERN_SIZE],
    },
    // Placeholder kept for old configurations.
    Pattern {
        name: "untitled",
        rows: [0; PATTERN_SIZE],
    },
];

/// The names `carousel` chooses from.
pub const CAROUSEL: [&str; 7] = [
    "random", "frogger", "clapper", "nova", "blinkers", "bullseye", "glider",
];

/// Finds a stored pattern by name.
pub fn lookup(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|pattern| pattern.name == name)
}

/// Where patterns are placed in the grid.
#[derive(Clone, Copy, Debug, Educe, PartialEq, Eq, Hash)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Placement {
    /// At the first interior row and column.
    Origin,

    /// In the middle of the grid.
    ///
    /// Same as [`Origin`](Placement::Origin) on an 8×8 grid.
    #[educe(Default)]
    Centered,
}

impl Placement {
    /// The top left corner `(row, col)` of a pattern placed in `grid`.
    pub fn origin(self, grid: &Grid) -> (usize, usize) {
        match self {
            Placement::Origin => (0, 0),
            Placement::Centered => (
                grid.rows().saturating_sub(PATTERN_SIZE) / 2,
                grid.columns().saturating_sub(PATTERN_SIZE) / 2,
            ),
        }
    }
}

impl FromStr for Placement {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "origin" | "o" => Ok(Placement::Origin),
            "centered" | "center" | "c" => Ok(Placement::Centered),
            _ => Err(String::from("invalid Placement")),
        }
    }
}

impl Display for Placement {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        let s = match self {
            Placement::Origin => "origin",
            Placement::Centered => "centered",
        };
        write!(f, "{}", s)?;
        Ok(())
    }
}

/// One entry of a seed request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SeedRequest {
    /// Every interior cell is set by a coin flip.
    Random,

    /// One entry of [`CAROUSEL`], chosen uniformly at random.
    Carousel,

    /// A stored pattern, in a random orientation.
    Pattern(&'static Pattern),

    /// A name that matches nothing. Seeding skips it.
    Unknown(String),
}

impl From<&str> for SeedRequest {
    fn from(name: &str) -> Self {
        match name {
            "random" => SeedRequest::Random,
            "carousel" => SeedRequest::Carousel,
            _ => lookup(name).map_or_else(
                || SeedRequest::Unknown(name.to_string()),
                SeedRequest::Pattern,
            ),
        }
    }
}

impl Display for SeedRequest {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            SeedRequest::Random => f.write_str("random"),
            SeedRequest::Carousel => f.write_str("carousel"),
            SeedRequest::Pattern(pattern) => f.write_str(pattern.name),
            SeedRequest::Unknown(name) => f.write_str(name),
        }
    }
}
