//! Orientations of a pattern.
//!
//! The four orientations form the subgroup of the dihedral group
//! _D_<sub>8</sub> generated by the two axis-aligned reflections.

use super::PATTERN_SIZE;
use educe::Educe;
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a pattern is turned before it is written into the grid.
///
/// `Id` is the identity.
///
/// `F` means reflections (flips).
/// The symbol after it is the axis of reflection.
///
/// `R180` is the half turn around the center of the pattern.
#[derive(Clone, Copy, Debug, Educe, PartialEq, Eq, Hash)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Orientation {
    /// `Id`.
    ///
    /// Identity.
    #[educe(Default)]
    Id,
    /// `F|`.
    ///
    /// Reflection across the middle column, i.e., a horizontal mirror.
    #[cfg_attr(feature = "serde", serde(rename = "F|"))]
    FlipCol,
    /// `F-`.
    ///
    /// Reflection across the middle row, i.e., a vertical mirror.
    #[cfg_attr(feature = "serde", serde(rename = "F-"))]
    FlipRow,
    /// `R180`.
    ///
    /// 180° rotation.
    #[cfg_attr(feature = "serde", serde(rename = "R180"))]
    Rotate180,
}

impl Orientation {
    /// All orientations, in the order of their indices.
    pub const ALL: [Orientation; 4] = [
        Orientation::Id,
        Orientation::FlipCol,
        Orientation::FlipRow,
        Orientation::Rotate180,
    ];

    /// The index of the orientation, from `0` to `3`.
    pub fn index(self) -> usize {
        match self {
            Orientation::Id => 0,
            Orientation::FlipCol => 1,
            Orientation::FlipRow => 2,
            Orientation::Rotate180 => 3,
        }
    }

    /// The orientation with the given index, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Orientation::ALL.get(index).copied()
    }

    /// The pixel of the source bitmap that is written to `(row, col)`
    /// of the footprint.
    ///
    /// All four orientations are involutions, so this is also where the
    /// source pixel `(row, col)` ends up.
    #[inline]
    pub fn source(self, row: usize, col: usize) -> (usize, usize) {
        let last = PATTERN_SIZE - 1;
        match self {
            Orientation::Id => (row, col),
            Orientation::FlipCol => (row, last - col),
            Orientation::FlipRow => (last - row, col),
            Orientation::Rotate180 => (last - row, last - col),
        }
    }
}

/// Uniformly random orientations.
impl Distribution<Orientation> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
        Orientation::ALL[rng.gen_range(0..Orientation::ALL.len())]
    }
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Id" | "0" => Ok(Orientation::Id),
            "F|" | "1" => Ok(Orientation::FlipCol),
            "F-" | "2" => Ok(Orientation::FlipRow),
            "R180" | "3" => Ok(Orientation::Rotate180),
            _ => Err(String::from("invalid Orientation")),
        }
    }
}

impl Display for Orientation {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        let s = match self {
            Orientation::Id => "Id",
            Orientation::FlipCol => "F|",
            Orientation::FlipRow => "F-",
            Orientation::Rotate180 => "R180",
        };
        write!(f, "{}", s)?;
        Ok(())
    }
}
