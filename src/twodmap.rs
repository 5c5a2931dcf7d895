// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A row-major two-dimensional grid
//!
//! The carver keeps three grids of the same shape: the pixels, the
//! energy of each pixel, and the distance/back-pointer table used to
//! find a seam.  They all share this one type so the index math lives
//! in exactly one place.

use itertools::iproduct;
use std::ops::{Index, IndexMut};

/// Defines the basic map: An addressable two-dimensional field
/// containing an object that represents one of several possible
/// objects during processing: a pixel for the image, an f64 for the
/// energy field, or an energy + parent address for the seam digraph.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoDimensionalMap<P: Default + Copy> {
    pub width: u32,
    pub height: u32,
    pub(crate) data: Vec<P>,
}

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// Define a new (abstract) map.  The content type must implement
    /// the Default trait.
    pub fn new(width: u32, height: u32) -> Self {
        TwoDimensionalMap {
            width,
            height,
            data: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Build a map by asking for the value at every address, in
    /// row-major order.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> P,
    {
        TwoDimensionalMap {
            width,
            height,
            data: iproduct!(0..height, 0..width).map(|(y, x)| f(x, y)).collect(),
        }
    }

    /// Wrap an existing row-major buffer.  Returns None if the buffer
    /// is not exactly width * height long.
    pub fn from_vec(width: u32, height: u32, data: Vec<P>) -> Option<Self> {
        if data.len() != width as usize * height as usize {
            return None;
        }
        Some(TwoDimensionalMap {
            width,
            height,
            data,
        })
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.  This
    // particular variant is the same one used in image.rs.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// True if (x, y) addresses a cell of this map.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    /// The row-major contents.
    pub fn as_slice(&self) -> &[P] {
        &self.data
    }

    /// A single row, left to right.
    pub fn row(&self, y: u32) -> &[P] {
        let start = self.get_index(0, y);
        &self.data[start..start + self.width as usize]
    }

    /// Copy every cell except the one named by the seam in each row.
    /// The surviving cells keep their left-to-right order, so the new
    /// map is one narrower.  The seam must already have been checked:
    /// one in-range entry per row.
    pub fn without_seam(&self, seam: &[u32]) -> Self {
        debug_assert_eq!(seam.len(), self.height as usize);
        let mut data = Vec::with_capacity(self.data.len() - self.height as usize);
        for (y, &cut) in seam.iter().enumerate() {
            let row = self.row(y as u32);
            data.extend_from_slice(&row[..cut as usize]);
            data.extend_from_slice(&row[cut as usize + 1..]);
        }
        TwoDimensionalMap {
            width: self.width - 1,
            height: self.height,
            data,
        }
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for TwoDimensionalMap<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.data[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for TwoDimensionalMap<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.data[index]
    }
}

/// One cell of the seam digraph: the cheapest known distance to this
/// cell, and the column in the row above through which it was reached.
#[derive(Default, Debug, Copy, Clone, PartialEq)]
pub(crate) struct EnergyAndBackPointer<P: Default + Copy> {
    pub energy: P,
    pub parent: u32,
}
