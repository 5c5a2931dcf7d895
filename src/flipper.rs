// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Dimensional flipper
//!
//! Maps the width to the original height, and vice versa, as well as
//! every x to y and vice versa.  A horizontal seam through a picture
//! is exactly a vertical seam through its flipped twin, with the same
//! list of indices, so the seam finder and the seam remover only ever
//! have to know about vertical seams.
//!
//! Flipping never mutates anything: it builds a new map.  A flip that
//! is never undone can't leave the carver lying on its side, because
//! the carver only ever keeps the result of a second flip.

use crate::planes::Planes;
use crate::twodmap::TwoDimensionalMap;

/// Which way up a set of planes is, relative to the caller's picture.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Orientation {
    Original,
    Flipped,
}

impl Orientation {
    pub fn turn(self) -> Self {
        if self == Orientation::Original {
            Orientation::Flipped
        } else {
            Orientation::Original
        }
    }
}

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// A new map in which `new[(y, x)] == old[(x, y)]`.
    pub fn flipped(&self) -> Self {
        TwoDimensionalMap::from_fn(self.height, self.width, |x, y| self[(y, x)])
    }
}

impl Planes {
    /// Flip the picture and its energy field together.  Energy is
    /// symmetric under the flip (the horizontal and vertical gradients
    /// just trade places), so the flipped field is still correct for
    /// the flipped picture.
    pub fn flip(&self) -> Planes {
        Planes {
            image: self.image.flipped(),
            energy: self.energy.flipped(),
            orientation: self.orientation.turn(),
        }
    }
}
