//! DDS decoding: uncompressed, tightly-packed RGB24 / BGRA32 / L8 only.
//! Block-compressed (DXT/BCn) formats are out of scope and rejected via the
//! four-CC check.

use crate::error::DecodeError;
use crate::image::Image;
use crate::limits::Limits;
use crate::reader::read_u32_le;

const HEADER_LEN: usize = 128;

pub(crate) fn decode(image: &mut Image<'_>, data: &[u8], limits: &Limits) -> Result<(), DecodeError> {
    if data.len() < HEADER_LEN || &data[0..3] != b"DDS" {
        return Err(DecodeError::BadSignature);
    }

    let height = read_u32_le(data, 12).ok_or(DecodeError::TruncatedData)?;
    let width = read_u32_le(data, 16).ok_or(DecodeError::TruncatedData)?;
    let pf_size = read_u32_le(data, 76).ok_or(DecodeError::TruncatedData)?;
    let four_cc = read_u32_le(data, 84).ok_or(DecodeError::TruncatedData)?;
    let bpp = read_u32_le(data, 88).ok_or(DecodeError::TruncatedData)?;

    if width == 0 || height == 0 {
        return Err(DecodeError::ZeroDimension);
    }
    if pf_size != 32 {
        return Err(DecodeError::MalformedHeader);
    }
    if four_cc != 0 {
        return Err(DecodeError::UnsupportedCompression(four_cc));
    }
    limits.check(width, height)?;

    let (stride, src_bpp) = match bpp {
        8 => (1u32, 1usize),
        24 => (3, 3),
        32 => (3, 4),
        other => return Err(DecodeError::UnsupportedBitDepth(other as u16)),
    };

    image.set_geometry(width, height, stride)?;

    let pixel_count = width as usize * height as usize;
    let needed = pixel_count.checked_mul(src_bpp).ok_or(DecodeError::DimensionsOverflow)?;
    let src = data
        .get(HEADER_LEN..)
        .and_then(|s| s.get(..needed))
        .ok_or(DecodeError::TruncatedData)?;

    let out = image.written_mut();

    match bpp {
        8 => out.copy_from_slice(src),
        24 => {
            for (o, s) in out.chunks_exact_mut(3).zip(src.chunks_exact(3)) {
                o[0] = s[2];
                o[1] = s[1];
                o[2] = s[0];
            }
        }
        32 => {
            for (o, s) in out.chunks_exact_mut(3).zip(src.chunks_exact(4)) {
                o[0] = s[2];
                o[1] = s[1];
                o[2] = s[0];
            }
        }
        _ => unreachable!("bpp range already checked"),
    }

    Ok(())
}
