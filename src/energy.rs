// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! Given an image, calculate the energy of every pixel and the
//! vertical seam of least total energy.  The energy is the dual
//! gradient: the square root of the squared RGB difference between a
//! pixel's left and right neighbors, plus the same between its upper
//! and lower neighbors.  Pixels on the border have no neighbor on one
//! side and are given a fixed, very high energy instead, so seams
//! stay off the edges of the picture.
//!
//! There is only a vertical seam finder here.  Horizontal seams are
//! found by handing it the flipped energy field; see `flipper`.

use crate::cq;
use crate::pixelpairs::energy_of_pair;
use crate::twodmap::{EnergyAndBackPointer, TwoDimensionalMap};
use image::{GrayImage, Luma};

/// One RGB pixel, as stored by the carver.
pub type Rgb8 = [u8; 3];

/// The energy of every pixel on the edge of the image.  The largest
/// possible interior energy is sqrt(6 * 255²) ≈ 624.6.
pub const BORDER_ENERGY: f64 = 1000.0;

/// The energy of a single pixel.  The address must be inside the map;
/// bounds checking is the caller's job.
pub fn pixel_energy(image: &TwoDimensionalMap<Rgb8>, x: u32, y: u32) -> f64 {
    debug_assert!(image.contains(x, y));
    let (mw, mh) = (image.width - 1, image.height - 1);
    if x == 0 || y == 0 || x >= mw || y >= mh {
        return BORDER_ENERGY;
    }
    let dx = energy_of_pair(&image[(x + 1, y)], &image[(x - 1, y)]);
    let dy = energy_of_pair(&image[(x, y + 1)], &image[(x, y - 1)]);
    ((dx + dy) as f64).sqrt()
}

// Image -> Energy Map

/// Compute the energy of every pixel in an image.
#[cfg(not(feature = "threaded"))]
pub fn calculate_energy(image: &TwoDimensionalMap<Rgb8>) -> TwoDimensionalMap<f64> {
    TwoDimensionalMap::from_fn(image.width, image.height, |x, y| pixel_energy(image, x, y))
}

// Every pixel's energy depends only on the (read-only) image, so the
// field is cut into bands of whole rows, one band per worker, and
// each worker writes straight into its own chunk of the output.

/// Compute the energy of every pixel in an image, spread over every
/// available CPU.
#[cfg(feature = "threaded")]
pub fn calculate_energy(image: &TwoDimensionalMap<Rgb8>) -> TwoDimensionalMap<f64> {
    let (width, height) = image.dimensions();
    let mut emap = TwoDimensionalMap::new(width, height);
    let rows_per_band = ((height as usize) + num_cpus::get() - 1) / num_cpus::get();
    let band_len = rows_per_band.max(1) * width as usize;

    let outcome = crossbeam::scope(|scope| {
        for (band, chunk) in emap.data.chunks_mut(band_len).enumerate() {
            scope.spawn(move |_| {
                let first = band * band_len;
                for (offset, cell) in chunk.iter_mut().enumerate() {
                    let i = first + offset;
                    let (x, y) = ((i % width as usize) as u32, (i / width as usize) as u32);
                    *cell = pixel_energy(image, x, y);
                }
            });
        }
    });
    if let Err(panic) = outcome {
        std::panic::resume_unwind(panic);
    }
    emap
}

/// Given an energy map, return the list of x-coordinates that, when
/// mapped with the range (0..height), give the XY coordinates for each
/// pixel in the seam to be removed.
///
/// The rows of the map are a topological order of the seam digraph,
/// so a single pass from top to bottom, relaxing the (up to) three
/// edges out of every pixel, finds every shortest distance.  Ties go
/// to the leftmost candidate, both when relaxing and when choosing
/// where the seam ends.
pub fn energy_to_seam(energy: &TwoDimensionalMap<f64>) -> Vec<u32> {
    let (width, height) = energy.dimensions();
    let mut target: TwoDimensionalMap<EnergyAndBackPointer<f64>> =
        TwoDimensionalMap::new(width, height);

    // The first row costs nothing to reach; nothing else has been
    // reached yet.
    for y in 1..height {
        for x in 0..width {
            target[(x, y)].energy = f64::INFINITY;
        }
    }

    let maxwidth = width - 1;
    for y in 0..height - 1 {
        for x in 0..width {
            let reach = target[(x, y)].energy + energy[(x, y)];
            for k in cq!(x == 0, 0, x - 1)..=cq!(x == maxwidth, maxwidth, x + 1) {
                if reach < target[(k, y + 1)].energy {
                    target[(k, y + 1)] = EnergyAndBackPointer {
                        energy: reach,
                        parent: x,
                    };
                }
            }
        }
    }

    // Find the x coordinate of the bottommost seam with the least
    // energy.
    let mut seam_col = 0;
    let mut least = f64::INFINITY;
    for x in 0..width {
        if target[(x, height - 1)].energy < least {
            least = target[(x, height - 1)].energy;
            seam_col = x;
        }
    }

    // Working backwards, generate a vec of x coordinates that map to
    // the seam, reverse and return.
    (0..height)
        .rev()
        .fold(Vec::<u32>::with_capacity(height as usize), |mut acc, y| {
            acc.push(seam_col);
            seam_col = target[(seam_col, y)].parent;
            acc
        })
        .into_iter()
        .rev()
        .collect()
}

/// Render an energy field as a greyscale picture, brightest where the
/// energy is highest.
pub fn energy_to_image(energy: &TwoDimensionalMap<f64>) -> GrayImage {
    let factor = energy.as_slice().iter().cloned().fold(0.0, f64::max);
    GrayImage::from_fn(energy.width, energy.height, |x, y| {
        let level = cq!(factor > 0.0, energy[(x, y)] * 255.0 / factor, 0.0);
        Luma([level.round().min(255.0) as u8])
    })
}
