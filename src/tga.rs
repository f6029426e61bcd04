//! TGA decoding: uncompressed truecolor (type 2) and grayscale (type 3)
//! only. The origin bit in the image descriptor byte is deliberately never
//! read — this design always consumes and writes pixels in source order.

use crate::error::DecodeError;
use crate::image::Image;
use crate::limits::Limits;
use crate::reader::read_u16_le;

const HEADER_LEN: usize = 18;

pub(crate) fn decode(image: &mut Image<'_>, data: &[u8], limits: &Limits) -> Result<(), DecodeError> {
    if data.len() < HEADER_LEN {
        return Err(DecodeError::TruncatedData);
    }

    let id_len = data[0] as usize;
    let image_type = data[2];
    let width = u32::from(read_u16_le(data, 12).ok_or(DecodeError::TruncatedData)?);
    let height = u32::from(read_u16_le(data, 14).ok_or(DecodeError::TruncatedData)?);
    let bpp = data[16];

    if !matches!(image_type, 2 | 3) {
        return Err(DecodeError::UnsupportedVariant);
    }
    if width == 0 || height == 0 {
        return Err(DecodeError::ZeroDimension);
    }
    limits.check(width, height)?;

    let (stride, src_bpp) = match bpp {
        8 => (1, 1usize),
        24 => (3, 3),
        32 => (3, 4),
        other => return Err(DecodeError::UnsupportedBitDepth(u16::from(other))),
    };

    image.set_geometry(width, height, stride)?;

    let data_offset = HEADER_LEN.checked_add(id_len).ok_or(DecodeError::DimensionsOverflow)?;
    let pixel_count = width as usize * height as usize;
    let needed = pixel_count.checked_mul(src_bpp).ok_or(DecodeError::DimensionsOverflow)?;
    let src = data
        .get(data_offset..)
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
