// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seam carving: content-aware image shrinking.
//!
//! A seam is a connected path of pixels, one per row (or one per
//! column), running from one edge of a picture to the other.  Removing
//! the seam whose pixels carry the least visual detail, over and over,
//! shrinks a picture while leaving its interesting parts alone.
//!
//! ```no_run
//! use seamcarver::{SeamCarver, SeamFinder};
//!
//! # fn main() -> Result<(), failure::Error> {
//! let picture = image::open("input.png")?;
//! let mut carver = SeamCarver::new(&picture)?;
//! let seam = carver.find_vertical_seam();
//! carver.remove_vertical_seam(&seam)?;
//! carver.current_image().save("output.png")?;
//! # Ok(())
//! # }
//! ```

mod ternary;

pub mod energy;
pub use energy::{BORDER_ENERGY, Rgb8};

pub mod errors;
pub use errors::{Result, SeamError};

pub mod flipper;
mod pixelpairs;
mod planes;

pub mod seamcarver;
pub use seamcarver::{Carve, SeamCarver};

pub mod seamfinder;
pub use seamfinder::SeamFinder;

pub mod twodmap;
pub use twodmap::TwoDimensionalMap;
