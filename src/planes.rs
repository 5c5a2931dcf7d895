// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The picture and its energy field, held together
//!
//! The energy field is a cache of `pixel_energy` over the picture.
//! It is computed once, in full, and afterwards only ever rebuilt
//! alongside the picture by `without_seam`, which is the one place
//! either plane changes.

use crate::energy::{calculate_energy, pixel_energy, Rgb8};
use crate::flipper::Orientation;
use crate::twodmap::TwoDimensionalMap;

#[derive(Debug, Clone)]
pub(crate) struct Planes {
    pub image: TwoDimensionalMap<Rgb8>,
    pub energy: TwoDimensionalMap<f64>,
    pub orientation: Orientation,
}

impl Planes {
    /// Take ownership of a picture and compute its energy field.
    pub fn new(image: TwoDimensionalMap<Rgb8>) -> Self {
        let energy = calculate_energy(&image);
        Planes {
            image,
            energy,
            orientation: Orientation::Original,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width
    }

    pub fn height(&self) -> u32 {
        self.image.height
    }

    // Removing the pixel at column s in row y changes the horizontal
    // neighbors of only the pixels that land at s-1 and s.  Because
    // consecutive seam entries differ by at most one, the pixels whose
    // vertical neighbors shift are also at s-1 or s of their own row.
    // Everything else keeps exactly the neighbors, and so exactly the
    // energy, it had before.

    /// Build the planes one column narrower, with the seam's pixel
    /// removed from every row.  The seam must already be valid.
    pub fn without_seam(&self, seam: &[u32]) -> Planes {
        let image = self.image.without_seam(seam);
        let mut energy = self.energy.without_seam(seam);
        for (y, &cut) in seam.iter().enumerate() {
            let y = y as u32;
            if cut > 0 {
                energy[(cut - 1, y)] = pixel_energy(&image, cut - 1, y);
            }
            if cut < image.width {
                energy[(cut, y)] = pixel_energy(&image, cut, y);
            }
        }
        Planes {
            image,
            energy,
            orientation: self.orientation,
        }
    }
}
