//! # imagecodec
//!
//! A `#![no_std]`, allocation-free decoder for a handful of raster image
//! formats commonly found as texture or test-fixture payloads: NetPBM
//! (P1–P6), BMP, TGA, PCX, ICO, and DDS. Every decoder reads from a borrowed
//! byte slice and writes into a caller-owned destination buffer — there is
//! no allocator anywhere in this crate, and no reference to either buffer
//! outlives the call.
//!
//! ## Usage
//!
//! ```
//! use imagecodec::{decode, Image};
//!
//! # let ppm = b"P5\n2 1\n255\n\x00\xff";
//! let mut buf = [0u8; 2];
//! let mut image = Image::new(&mut buf);
//! decode(&mut image, ppm)?;
//! assert_eq!(image.width, 2);
//! assert_eq!(image.stride, 1);
//! # Ok::<(), imagecodec::DecodeError>(())
//! ```
//!
//! ## Supported formats
//!
//! - NetPBM P1/P2/P3 (ASCII) and P4/P5/P6 (binary) — always built in. P7
//!   (PAM) is recognized and rejected, not decoded.
//! - BMP (`bmp` feature) — 1/4/8/16/24/32 bpp, `BI_RGB` only.
//! - TGA (`tga` feature) — image types 2 and 3, bpp 8/24/32.
//! - PCX (`pcx` feature) — 1-plane and 3-plane 8-bit, RLE.
//! - ICO (`ico` feature) — first directory entry, delegates to BMP.
//! - DDS (`dds` feature) — uncompressed RGB24/BGRA32/L8.
//!
//! Output is always row-major, top row first, R-first channel order
//! (RGB/RGBA), with `stride` ∈ {1, 3, 4} bytes per pixel.
//!
//! This crate never logs, aborts, or panics on malformed input: every
//! failure path returns a [`DecodeError`] variant.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

mod error;
mod format;
mod image;
mod limits;
mod netpbm;
mod reader;

#[cfg(feature = "bmp")]
mod bmp;
#[cfg(feature = "dds")]
mod dds;
#[cfg(feature = "ico")]
mod ico;
#[cfg(feature = "pcx")]
mod pcx;
#[cfg(feature = "tga")]
mod tga;

#[cfg(feature = "rgb")]
mod pixel_view;

pub use error::DecodeError;
pub use format::{detect_format, ImageFormat};
pub use image::Image;
pub use limits::Limits;

/// Decode `data` into `image`, auto-detecting the format from its leading
/// bytes. Equivalent to `decode_with_limits(image, data, &Limits::default())`.
pub fn decode(image: &mut Image<'_>, data: &[u8]) -> Result<(), DecodeError> {
    decode_with_limits(image, data, &Limits::default())
}

/// Decode `data` into `image`, rejecting declared dimensions that exceed
/// `limits` before any per-pixel work happens.
///
/// Dispatch follows the fixed signature precedence documented on
/// [`detect_format`]: the first matching family is tried, and its result
/// (success or failure) is returned verbatim — this function never falls
/// back to a second decoder on failure.
pub fn decode_with_limits(
    image: &mut Image<'_>,
    data: &[u8],
    limits: &Limits,
) -> Result<(), DecodeError> {
    match format::detect_format(data) {
        Some(ImageFormat::NetPbm) => netpbm::decode(image, data, limits),

        #[cfg(feature = "bmp")]
        Some(ImageFormat::Bmp) => bmp::decode(image, data, limits),

        #[cfg(feature = "tga")]
        Some(ImageFormat::Tga) => tga::decode(image, data, limits),

        #[cfg(feature = "pcx")]
        Some(ImageFormat::Pcx) => pcx::decode(image, data, limits),

        #[cfg(feature = "dds")]
        Some(ImageFormat::Dds) => dds::decode(image, data, limits),

        #[cfg(feature = "ico")]
        Some(ImageFormat::Ico) => ico::decode(image, data, limits),

        #[allow(unreachable_patterns)]
        _ => Err(DecodeError::BadSignature),
    }
}
