//! Decode error taxonomy.
//!
//! Every variant is `Copy`: no `String`, no allocation, so `DecodeError`
//! stays usable in the `#![no_std]`, no-alloc setting this crate targets.

/// Why a decode call failed.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// Leading bytes match no supported format signature.
    #[error("input does not match any supported format signature")]
    BadSignature,

    /// A required header field was zero, reserved, or otherwise malformed.
    #[error("malformed header")]
    MalformedHeader,

    /// A valid format family but an unsupported bit depth.
    #[error("unsupported bit depth: {0}")]
    UnsupportedBitDepth(u16),

    /// A valid format family but an unsupported compression/encoding scheme.
    #[error("unsupported compression scheme: {0}")]
    UnsupportedCompression(u32),

    /// A valid format family but an otherwise unsupported variant
    /// (e.g. PAM/P7, a TGA image type other than 2/3).
    #[error("unsupported format variant")]
    UnsupportedVariant,

    /// Declared pixel data extends past the end of the input.
    #[error("pixel data truncated")]
    TruncatedData,

    /// `width * height * stride` exceeds `pixels_capacity`.
    #[error("destination buffer too small: need {needed} bytes, have {capacity}")]
    InsufficientCapacity { needed: u32, capacity: u32 },

    /// A palette or trailer region was missing or too short.
    #[error("invalid palette or trailer")]
    InvalidPalette,

    /// `width * height * stride` does not fit in the arithmetic used to
    /// check it — declared dimensions are untrusted input.
    #[error("image dimensions overflow")]
    DimensionsOverflow,

    /// Width or height was declared as zero.
    #[error("width or height is zero")]
    ZeroDimension,

    /// A declared dimension or pixel count exceeded a caller-configured
    /// [`crate::Limits`].
    #[error("dimensions exceed configured limits")]
    LimitExceeded,
}
