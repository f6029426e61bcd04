//! Typed, zero-copy pixel views over a decoded [`Image`], gated behind the
//! `rgb` feature.

use crate::image::Image;
use rgb::{FromSlice, RGB8, RGBA8};

impl<'a> Image<'a> {
    /// View the decoded region as `RGB8` pixels. `None` unless `stride == 3`.
    pub fn as_rgb8(&self) -> Option<&[RGB8]> {
        if self.stride != 3 {
            return None;
        }
        Some(self.pixels[..self.pixels_size as usize].as_rgb())
    }

    /// View the decoded region as `RGBA8` pixels. `None` unless `stride == 4`.
    pub fn as_rgba8(&self) -> Option<&[RGBA8]> {
        if self.stride != 4 {
            return None;
        }
        Some(self.pixels[..self.pixels_size as usize].as_rgba())
    }

    /// View the decoded region as single-channel gray bytes. `None` unless
    /// `stride == 1`.
    pub fn as_gray8(&self) -> Option<&[u8]> {
        if self.stride != 1 {
            return None;
        }
        Some(&self.pixels[..self.pixels_size as usize])
    }
}
