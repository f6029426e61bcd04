use crate::error::DecodeError;

/// Caller-configured bounds on declared image dimensions.
///
/// Every decoder already refuses to write past `Image::pixels_capacity`
/// (see [`crate::DecodeError::InsufficientCapacity`]) — since this crate
/// never allocates, that check alone bounds memory use. `Limits` exists so
/// an embedder can reject an absurd declared width/height *before* any
/// per-pixel parsing happens, independent of how large the destination
/// buffer happens to be.
///
/// All fields default to `None` (no limit).
#[derive(Clone, Copy, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u32>,
    pub max_height: Option<u32>,
    /// Maximum pixel count (`width * height`).
    pub max_pixels: Option<u64>,
}

impl Limits {
    /// Check declared dimensions against these limits.
    pub(crate) fn check(&self, width: u32, height: u32) -> Result<(), DecodeError> {
        if let Some(max_w) = self.max_width {
            if width > max_w {
                return Err(DecodeError::LimitExceeded);
            }
        }
        if let Some(max_h) = self.max_height {
            if height > max_h {
                return Err(DecodeError::LimitExceeded);
            }
        }
        if let Some(max_px) = self.max_pixels {
            let pixels = u64::from(width) * u64::from(height);
            if pixels > max_px {
                return Err(DecodeError::LimitExceeded);
            }
        }
        Ok(())
    }
}
