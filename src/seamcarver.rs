// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarver - The main object
//!
//! A `SeamCarver` owns a private copy of a picture and its energy
//! field.  Seams are found against the energy field and removed from
//! both planes at once; only the handful of energies next to each
//! removed pixel are recomputed.  Horizontal operations are the
//! vertical ones applied to the flipped planes.

use crate::cq;
use crate::energy::{energy_to_image, energy_to_seam};
use crate::errors::{Result, SeamError};
use crate::flipper::Orientation;
use crate::planes::Planes;
use crate::seamfinder::SeamFinder;
use crate::twodmap::TwoDimensionalMap;
use image::{GenericImageView, GrayImage, Pixel, Rgb, RgbImage};
use tracing::{debug, info, trace};

const SEAM_COLOR: Rgb<u8> = Rgb([255, 0, 0]);

// This is silly and basically a reimplementation of `bool` and `not`,
// but it makes it much clearer in the code what I'm doing.  And I
// like that.

/// Which dimension a seam removal shrinks.  Carving the width removes
/// a vertical seam; carving the height removes a horizontal one.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Carve {
    Width,
    Height,
}

impl Carve {
    fn turn(self) -> Self {
        if self == Carve::Width {
            Carve::Height
        } else {
            Carve::Width
        }
    }

    fn dimension(self) -> &'static str {
        if self == Carve::Width {
            "width"
        } else {
            "height"
        }
    }
}

// A seam is a relation between neighboring entries, not just a list
// of in-range numbers, so it has to be checked as a whole.
fn check_seam(seam: &[u32], length: u32, bound: u32) -> Result<()> {
    if seam.len() != length as usize {
        return Err(SeamError::SeamLength {
            expected: length as usize,
            actual: seam.len(),
        });
    }
    if let Some((index, &value)) = seam.iter().enumerate().find(|&(_, &v)| v >= bound) {
        return Err(SeamError::SeamOutOfRange {
            index,
            value,
            bound,
        });
    }
    if let Some((index, pair)) = seam
        .windows(2)
        .enumerate()
        .find(|&(_, pair)| pair[0].max(pair[1]) - pair[0].min(pair[1]) > 1)
    {
        return Err(SeamError::SeamDisjoint {
            index: index + 1,
            from: pair[0],
            to: pair[1],
        });
    }
    Ok(())
}

/// A picture being carved, along with its energy field.
#[derive(Debug, Clone)]
pub struct SeamCarver {
    planes: Planes,
}

impl SeamCarver {
    /// Creates a new SeamCarver from a copy of an image.  Any 8-bit
    /// pixel format is accepted; it is converted to RGB, and any alpha
    /// is discarded.
    pub fn new<I, P>(image: &I) -> Result<Self>
    where
        I: GenericImageView<Pixel = P>,
        P: Pixel<Subpixel = u8> + 'static,
    {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(SeamError::EmptyImage { width, height });
        }
        let pixels = TwoDimensionalMap::from_fn(width, height, |x, y| {
            let Rgb(rgb) = image.get_pixel(x, y).to_rgb();
            rgb
        });
        let planes = Planes::new(pixels);
        debug!(width, height, "computed energy field");
        Ok(SeamCarver { planes })
    }

    pub fn width(&self) -> u32 {
        self.planes.width()
    }

    pub fn height(&self) -> u32 {
        self.planes.height()
    }

    /// The energy of the pixel at column x, row y.
    pub fn energy(&self, x: u32, y: u32) -> Result<f64> {
        if !self.planes.energy.contains(x, y) {
            return Err(SeamError::OutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }
        Ok(self.planes.energy[(x, y)])
    }

    /// A copy of the picture as it stands.  Changing it has no effect
    /// on the carver.
    pub fn current_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width(), self.height(), |x, y| {
            Rgb(self.planes.image[(x, y)])
        })
    }

    /// The current energy field, rendered as a greyscale picture.
    pub fn energy_image(&self) -> GrayImage {
        energy_to_image(&self.planes.energy)
    }

    /// A copy of the picture with a seam painted over it in red.  A
    /// `Carve::Width` seam is vertical, a `Carve::Height` seam
    /// horizontal.
    pub fn seam_image(&self, seam: &[u32], direction: Carve) -> Result<RgbImage> {
        let mut picture = self.current_image();
        match direction {
            Carve::Width => {
                check_seam(seam, self.height(), self.width())?;
                for (y, &x) in seam.iter().enumerate() {
                    picture.put_pixel(x, y as u32, SEAM_COLOR);
                }
            }
            Carve::Height => {
                check_seam(seam, self.width(), self.height())?;
                for (x, &y) in seam.iter().enumerate() {
                    picture.put_pixel(x as u32, y, SEAM_COLOR);
                }
            }
        }
        Ok(picture)
    }

    /// Remove a vertical seam, one column index per row.  On error the
    /// carver is unchanged.
    pub fn remove_vertical_seam(&mut self, seam: &[u32]) -> Result<()> {
        self.check_carvable(Carve::Width)?;
        check_seam(seam, self.height(), self.width())?;
        self.planes = self.planes.without_seam(seam);
        debug!(width = self.width(), height = self.height(), "removed vertical seam");
        trace!(?seam);
        Ok(())
    }

    /// Remove a horizontal seam, one row index per column.  On error
    /// the carver is unchanged.
    pub fn remove_horizontal_seam(&mut self, seam: &[u32]) -> Result<()> {
        self.check_carvable(Carve::Height)?;
        check_seam(seam, self.width(), self.height())?;
        self.planes = self.planes.flip().without_seam(seam).flip();
        debug_assert_eq!(self.planes.orientation, Orientation::Original);
        debug!(width = self.width(), height = self.height(), "removed horizontal seam");
        trace!(?seam);
        Ok(())
    }

    fn check_carvable(&self, direction: Carve) -> Result<()> {
        let size = cq!(direction == Carve::Width, self.width(), self.height());
        if size <= 1 {
            return Err(SeamError::TooSmall {
                dimension: direction.dimension(),
                size,
            });
        }
        Ok(())
    }

    fn carve_once(&mut self, direction: Carve) -> Result<()> {
        if direction == Carve::Height {
            let seam = self.find_horizontal_seam();
            self.remove_horizontal_seam(&seam)
        } else {
            let seam = self.find_vertical_seam();
            self.remove_vertical_seam(&seam)
        }
    }

    /// Given a desired new width and height, repeatedly carve seams out
    /// of the image, alternating between the two dimensions while both
    /// still need to shrink.  Returns a copy of the result; the carver
    /// is left holding it too.
    pub fn carve(&mut self, new_width: u32, new_height: u32) -> Result<RgbImage> {
        let (width, height) = (self.width(), self.height());
        if new_width == 0 || new_height == 0 {
            return Err(SeamError::EmptyImage {
                width: new_width,
                height: new_height,
            });
        }
        if width < new_width || height < new_height {
            return Err(SeamError::Upscale {
                width,
                height,
                new_width,
                new_height,
            });
        }
        info!(width, height, new_width, new_height, "carving");

        let mut direction = Carve::Width;
        while self.width() > new_width && self.height() > new_height {
            self.carve_once(direction)?;
            direction = direction.turn();
        }
        while self.width() > new_width {
            self.carve_once(Carve::Width)?;
        }
        while self.height() > new_height {
            self.carve_once(Carve::Height)?;
        }

        info!(
            seams = (width - new_width) + (height - new_height),
            "carving complete"
        );
        Ok(self.current_image())
    }
}

impl SeamFinder for SeamCarver {
    // The flipped energy field is a scratch copy; the carver's own
    // planes never leave their original orientation.
    fn find_horizontal_seam(&self) -> Vec<u32> {
        energy_to_seam(&self.planes.energy.flipped())
    }

    fn find_vertical_seam(&self) -> Vec<u32> {
        energy_to_seam(&self.planes.energy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::energy::BORDER_ENERGY;

    fn gradient(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x * 37 % 256) as u8, (y * 59 % 256) as u8, ((x + y) * 23 % 256) as u8])
        })
    }

    #[test]
    fn seams_are_checked_for_length() {
        assert_eq!(
            check_seam(&[0, 1], 3, 4),
            Err(SeamError::SeamLength {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn seams_are_checked_for_range() {
        assert_eq!(
            check_seam(&[2, 3, 4], 3, 4),
            Err(SeamError::SeamOutOfRange {
                index: 2,
                value: 4,
                bound: 4
            })
        );
    }

    #[test]
    fn seams_are_checked_for_adjacency() {
        assert_eq!(
            check_seam(&[1, 2, 0], 3, 4),
            Err(SeamError::SeamDisjoint {
                index: 2,
                from: 2,
                to: 0
            })
        );
        assert_eq!(check_seam(&[1, 2, 1, 0], 4, 4), Ok(()));
    }

    #[test]
    fn empty_images_are_refused() {
        let empty = RgbImage::new(0, 3);
        assert_eq!(
            SeamCarver::new(&empty).err(),
            Some(SeamError::EmptyImage {
                width: 0,
                height: 3
            })
        );
    }

    #[test]
    fn a_single_pixel_is_all_border() {
        let carver = SeamCarver::new(&gradient(1, 1)).unwrap();
        assert_eq!(carver.energy(0, 0), Ok(BORDER_ENERGY));
        assert_eq!(carver.find_vertical_seam(), [0]);
        assert_eq!(carver.find_horizontal_seam(), [0]);
    }

    #[test]
    fn check_carvable_names_the_dimension() {
        let mut carver = SeamCarver::new(&gradient(1, 3)).unwrap();
        assert_eq!(
            carver.remove_vertical_seam(&[0, 0, 0]),
            Err(SeamError::TooSmall {
                dimension: "width",
                size: 1
            })
        );
        assert!(carver.remove_horizontal_seam(&[1]).is_ok());
        assert_eq!(carver.height(), 2);
    }

    #[test]
    fn seam_image_paints_the_seam() {
        let carver = SeamCarver::new(&gradient(4, 3)).unwrap();
        let picture = carver.seam_image(&[1, 2, 2], Carve::Width).unwrap();
        assert_eq!(picture.get_pixel(1, 0), &SEAM_COLOR);
        assert_eq!(picture.get_pixel(2, 1), &SEAM_COLOR);
        assert_eq!(picture.get_pixel(2, 2), &SEAM_COLOR);
        assert_eq!(picture.get_pixel(0, 0), gradient(4, 3).get_pixel(0, 0));

        let picture = carver.seam_image(&[0, 1, 2, 2], Carve::Height).unwrap();
        assert_eq!(picture.get_pixel(3, 2), &SEAM_COLOR);
        assert!(carver.seam_image(&[0, 1, 2], Carve::Height).is_err());
    }

    #[test]
    fn carve_refuses_to_upscale() {
        let mut carver = SeamCarver::new(&gradient(4, 3)).unwrap();
        assert!(matches!(
            carver.carve(5, 3),
            Err(SeamError::Upscale { .. })
        ));
        assert!(matches!(
            carver.carve(0, 3),
            Err(SeamError::EmptyImage { .. })
        ));
        assert_eq!((carver.width(), carver.height()), (4, 3));
    }

    #[test]
    fn carve_reaches_the_target() {
        let mut carver = SeamCarver::new(&gradient(9, 7)).unwrap();
        let picture = carver.carve(5, 6).unwrap();
        assert_eq!(picture.dimensions(), (5, 6));
        assert_eq!((carver.width(), carver.height()), (5, 6));
    }
}
