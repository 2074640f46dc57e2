use std::path::Path;

use image::{GrayImage, Luma, Rgb, RgbImage};

use crate::error::Result;
use crate::models::Channel;

/// A width×height grid of RGB triples, indexed by `(i, j)` with `i` the column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    /// Row-major: pixel `(i, j)` lives at `j * width + i`
    pixels: Vec<[u8; 3]>,
}

impl Raster {
    pub(crate) fn from_rows(width: u32, height: u32, rows: Vec<Vec<[u8; 3]>>) -> Self {
        let pixels: Vec<[u8; 3]> = rows.into_iter().flatten().collect();
        debug_assert_eq!(pixels.len(), width as usize * height as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get(&self, i: u32, j: u32) -> Option<[u8; 3]> {
        if i >= self.width || j >= self.height {
            return None;
        }
        self.pixels
            .get(j as usize * self.width as usize + i as usize)
            .copied()
    }

    pub fn pixels(&self) -> &[[u8; 3]] {
        &self.pixels
    }

    pub fn to_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |i, j| {
            Rgb(self.pixels[j as usize * self.width as usize + i as usize])
        })
    }

    /// Grayscale view of a single channel
    pub fn channel_image(&self, channel: Channel) -> GrayImage {
        let index = channel as usize;
        GrayImage::from_fn(self.width, self.height, |i, j| {
            Luma([self.pixels[j as usize * self.width as usize + i as usize][index]])
        })
    }

    /// Save as an image file. The format follows the file extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        self.to_image().save(path.as_ref())?;
        Ok(())
    }
}
