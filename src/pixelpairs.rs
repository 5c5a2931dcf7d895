// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of a pixel pair
//!
//! Given two pixels, the energy between them is the squared distance
//! between the colors that make them up.

use image::Primitive;
use num_traits::NumCast;
use std::iter::zip;

// Takes the channels (R,G,B) from two pixels and maps the difference
// between each channel, squares it, and then sums them all up.  This
// is the rusty expression of:
//
//        |Δ|² = (Δr)²+(Δg)²+(Δb)²
//
// Only using map for the channels, and sum for the final summation.

/// (Pixel, Pixel) -> Energy
#[inline]
pub fn energy_of_pair<S>(p1: &[S], p2: &[S]) -> u64
where
    S: Primitive + 'static,
{
    zip(p1, p2)
        .map(|(c1, c2)| {
            let c1: i64 = NumCast::from(*c1).unwrap_or(0);
            let c2: i64 = NumCast::from(*c2).unwrap_or(0);
            ((c1 - c2) * (c1 - c2)) as u64
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_pixels_have_no_energy() {
        let p = [12u8, 200, 7];
        assert_eq!(energy_of_pair(&p, &p), 0);
    }

    #[test]
    fn sums_squared_channel_differences() {
        // (255-0)² + (203-205)² + (255-51)² = 65025 + 4 + 41616
        let p1 = [255u8, 203, 255];
        let p2 = [0u8, 205, 51];
        assert_eq!(energy_of_pair(&p1, &p2), 106_645);
        assert_eq!(energy_of_pair(&p2, &p1), 106_645);
    }

    #[test]
    fn works_on_any_channel_count() {
        assert_eq!(energy_of_pair(&[9u8], &[1u8]), 64);
        assert_eq!(energy_of_pair(&[1000u16, 0], &[0u16, 0]), 1_000_000);
    }
}
