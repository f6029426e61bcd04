//! PCX decoding: 1-plane 8-bit indexed (reduced to grayscale via the VGA
//! palette trailer) and 3-plane 8-bit RGB, both RLE-packed.

use crate::error::DecodeError;
use crate::image::Image;
use crate::limits::Limits;
use crate::reader::read_u16_le;

const HEADER_LEN: usize = 128;
const TRAILER_LEN: usize = 769;

pub(crate) fn decode(image: &mut Image<'_>, data: &[u8], limits: &Limits) -> Result<(), DecodeError> {
    if data.len() < HEADER_LEN || data[0] != 0x0A {
        return Err(DecodeError::BadSignature);
    }

    let bpp = data[3];
    let xmin = read_u16_le(data, 4).ok_or(DecodeError::TruncatedData)?;
    let ymin = read_u16_le(data, 6).ok_or(DecodeError::TruncatedData)?;
    let xmax = read_u16_le(data, 8).ok_or(DecodeError::TruncatedData)?;
    let ymax = read_u16_le(data, 10).ok_or(DecodeError::TruncatedData)?;
    let planes = data[65];
    let bytes_per_line = u32::from(read_u16_le(data, 66).ok_or(DecodeError::TruncatedData)?) as usize;

    if xmax < xmin || ymax < ymin {
        return Err(DecodeError::MalformedHeader);
    }
    let width = u32::from(xmax - xmin) + 1;
    let height = u32::from(ymax - ymin) + 1;

    let stride = match (planes, bpp) {
        (1, 8) => 1u32,
        (3, 8) => 3,
        _ => return Err(DecodeError::UnsupportedVariant),
    };

    if bytes_per_line < width as usize {
        return Err(DecodeError::MalformedHeader);
    }
    limits.check(width, height)?;

    image.set_geometry(width, height, stride)?;

    let w = width as usize;
    let h = height as usize;
    let planes_n = planes as usize;
    let stride_n = stride as usize;

    let mut cursor = HEADER_LEN;
    for y in 0..h {
        for p in 0..planes_n {
            let mut filled = 0usize;
            while filled < bytes_per_line {
                let byte = *data.get(cursor).ok_or(DecodeError::TruncatedData)?;
                cursor += 1;
                if byte & 0xC0 == 0xC0 {
                    let run = (byte & 0x3F) as usize;
                    let val = *data.get(cursor).ok_or(DecodeError::TruncatedData)?;
                    cursor += 1;
                    for _ in 0..run {
                        if filled < bytes_per_line {
                            if filled < w {
                                image.pixels[(y * w + filled) * stride_n + p] = val;
                            }
                            filled += 1;
                        } else {
                            break;
                        }
                    }
                } else {
                    if filled < w {
                        image.pixels[(y * w + filled) * stride_n + p] = byte;
                    }
                    filled += 1;
                }
            }
        }
    }

    if planes == 1 && bpp == 8 {
        if data.len() < TRAILER_LEN {
            return Err(DecodeError::InvalidPalette);
        }
        let trailer = &data[data.len() - TRAILER_LEN..];
        if trailer[0] != 0x0C {
            return Err(DecodeError::InvalidPalette);
        }

        let mut lut = [0u8; 256];
        for (i, slot) in lut.iter_mut().enumerate() {
            let r = u32::from(trailer[1 + i * 3]);
            let g = u32::from(trailer[1 + i * 3 + 1]);
            let b = u32::from(trailer[1 + i * 3 + 2]);
            *slot = ((r + g + b) / 3) as u8;
        }

        for px in image.pixels[..w * h].iter_mut() {
            *px = lut[*px as usize];
        }
    }

    Ok(())
}
