// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors
//!
//! Everything that can go wrong inside the carver is a caller
//! violating a precondition: a bad coordinate, a malformed seam, or
//! asking for more seams than the image has pixels.  None of these are
//! retried.  Every check runs before any state is touched, so an
//! error always leaves the carver exactly as it was.

use failure::Fail;

/// The ways a request to the carver can be invalid.
#[derive(Debug, Fail, Clone, PartialEq, Eq)]
pub enum SeamError {
    /// The source image (or a requested target) has no pixels.
    #[fail(display = "cannot carve an empty {}x{} image", width, height)]
    EmptyImage { width: u32, height: u32 },

    /// A pixel address outside the current image.
    #[fail(
        display = "pixel ({}, {}) is outside the {}x{} image",
        x, y, width, height
    )]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    #[fail(display = "seam has {} entries, expected {}", actual, expected)]
    SeamLength { expected: usize, actual: usize },

    #[fail(
        display = "seam entry {} is {}, which is not in [0, {})",
        index, value, bound
    )]
    SeamOutOfRange { index: usize, value: u32, bound: u32 },

    /// Two consecutive seam entries are more than one pixel apart.
    #[fail(display = "seam jumps from {} to {} at entry {}", from, to, index)]
    SeamDisjoint { index: usize, from: u32, to: u32 },

    /// The dimension being carved is already a single pixel.
    #[fail(display = "cannot remove a seam when the {} is {}", dimension, size)]
    TooSmall { dimension: &'static str, size: u32 },

    #[fail(
        display = "seamcarve cannot upscale {}x{} to {}x{}",
        width, height, new_width, new_height
    )]
    Upscale {
        width: u32,
        height: u32,
        new_width: u32,
        new_height: u32,
    },
}

/// Results from the carver.
pub type Result<T> = std::result::Result<T, SeamError>;
