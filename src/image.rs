use crate::error::DecodeError;

/// The sole output aggregate every decoder writes into.
///
/// `pixels` is borrowed from the caller for the duration of the call and
/// for subsequent reads — the decoder never allocates and never frees it.
/// On success, bytes `[0, pixels_size)` hold the decoded image: row-major,
/// top row first, channels in R-first order (RGB or RGBA), stride ∈ {1, 3, 4}.
///
/// On failure the descriptor may be partially written (decoders set
/// `width`/`height`/`stride`/`monochrome` before the capacity check so a
/// caller can still report what was declared) and must be treated as
/// indeterminate.
pub struct Image<'a> {
    pub width: u32,
    pub height: u32,
    /// Bytes per pixel in the output: 1 (gray), 3 (RGB), or 4 (RGBA).
    pub stride: u32,
    pub monochrome: bool,
    pub pixels: &'a mut [u8],
    pub pixels_capacity: u32,
    pub pixels_size: u32,
}

impl<'a> Image<'a> {
    /// Wrap a caller-owned destination buffer. `pixels_capacity` is taken
    /// from the buffer's length; all other fields start zeroed and are
    /// overwritten by a successful [`crate::decode`] call.
    pub fn new(pixels: &'a mut [u8]) -> Self {
        let pixels_capacity = pixels.len().min(u32::MAX as usize) as u32;
        Self {
            width: 0,
            height: 0,
            stride: 0,
            monochrome: false,
            pixels,
            pixels_capacity,
            pixels_size: 0,
        }
    }

    /// Record the decoded geometry and check it against `pixels_capacity`.
    ///
    /// `width * height * stride` is widened to 64 bits before the check —
    /// declared dimensions come straight from untrusted input and must
    /// never be allowed to overflow a 32-bit product silently.
    pub(crate) fn set_geometry(
        &mut self,
        width: u32,
        height: u32,
        stride: u32,
    ) -> Result<(), DecodeError> {
        if width == 0 || height == 0 {
            return Err(DecodeError::ZeroDimension);
        }

        let size_u64 = u64::from(width) * u64::from(height) * u64::from(stride);
        let pixels_size = u32::try_from(size_u64).map_err(|_| DecodeError::DimensionsOverflow)?;

        self.width = width;
        self.height = height;
        self.stride = stride;
        self.monochrome = stride == 1;
        self.pixels_size = pixels_size;

        if pixels_size > self.pixels_capacity {
            return Err(DecodeError::InsufficientCapacity {
                needed: pixels_size,
                capacity: self.pixels_capacity,
            });
        }
        Ok(())
    }

    /// The decoded region of `pixels`, valid after [`Self::set_geometry`]
    /// has succeeded.
    pub(crate) fn written_mut(&mut self) -> &mut [u8] {
        &mut self.pixels[..self.pixels_size as usize]
    }
}
