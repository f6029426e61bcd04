//! BMP decoding: BI_RGB (uncompressed) only, 1/4/8/16/24/32 bits per pixel.
//!
//! Palette and pixel data are addressed by direct offset arithmetic rather
//! than a running cursor — every BMP field lives at a fixed absolute file
//! offset, so there is nothing a cursor would buy beyond what `.get()`
//! already gives us.

use crate::error::DecodeError;
use crate::image::Image;
use crate::limits::Limits;
use crate::reader::{read_i32_le, read_u16_le, read_u32_le};

const FILE_HEADER_LEN: usize = 14;
const PALETTE_OFFSET: usize = 54;

pub(crate) fn decode(image: &mut Image<'_>, data: &[u8], limits: &Limits) -> Result<(), DecodeError> {
    if data.len() < FILE_HEADER_LEN + 4 || &data[0..2] != b"BM" {
        return Err(DecodeError::BadSignature);
    }

    let pixel_data_offset = read_u32_le(data, 10).ok_or(DecodeError::TruncatedData)? as usize;
    let dib_header_size = read_u32_le(data, 14).ok_or(DecodeError::TruncatedData)?;
    if dib_header_size < 40 {
        return Err(DecodeError::MalformedHeader);
    }

    let width = read_u32_le(data, 18).ok_or(DecodeError::TruncatedData)?;
    let height_raw = read_i32_le(data, 22).ok_or(DecodeError::TruncatedData)?;
    let planes = read_u16_le(data, 26).ok_or(DecodeError::TruncatedData)?;
    let bpp = read_u16_le(data, 28).ok_or(DecodeError::TruncatedData)?;
    let compression = read_u32_le(data, 30).ok_or(DecodeError::TruncatedData)?;
    let colors_used = read_u32_le(data, 46).ok_or(DecodeError::TruncatedData)?;

    if planes != 1 {
        return Err(DecodeError::MalformedHeader);
    }
    if compression != 0 {
        return Err(DecodeError::UnsupportedCompression(compression));
    }
    if height_raw == 0 || width == 0 {
        return Err(DecodeError::ZeroDimension);
    }
    limits.check(width, height_raw.unsigned_abs())?;

    let stride = match bpp {
        1 | 4 | 8 | 16 | 24 => 3,
        32 => 4,
        other => return Err(DecodeError::UnsupportedBitDepth(other)),
    };

    let top_down = height_raw < 0;
    let height = height_raw.unsigned_abs();

    image.set_geometry(width, height, stride)?;

    let mut palette = [[0u8; 3]; 256];
    if bpp <= 8 {
        let declared = if colors_used == 0 { 1u32 << bpp } else { colors_used };
        let entries = declared.min(256) as usize;
        let palette_bytes = entries.checked_mul(4).ok_or(DecodeError::DimensionsOverflow)?;
        let raw = data
            .get(PALETTE_OFFSET..)
            .and_then(|s| s.get(..palette_bytes))
            .ok_or(DecodeError::InvalidPalette)?;
        for (i, entry) in raw.chunks_exact(4).enumerate() {
            palette[i] = [entry[2], entry[1], entry[0]];
        }
    }

    let w = width as usize;
    let h = height as usize;
    let row_bits = w
        .checked_mul(bpp as usize)
        .ok_or(DecodeError::DimensionsOverflow)?;
    let row_size = row_bits
        .checked_add(31)
        .ok_or(DecodeError::DimensionsOverflow)?
        / 32
        * 4;

    let out = image.written_mut();

    for y in 0..h {
        let src_row = if top_down { y } else { h - 1 - y };
        let row_offset = pixel_data_offset
            .checked_add(src_row.checked_mul(row_size).ok_or(DecodeError::DimensionsOverflow)?)
            .ok_or(DecodeError::DimensionsOverflow)?;
        let row = data
            .get(row_offset..)
            .and_then(|s| s.get(..row_size))
            .ok_or(DecodeError::TruncatedData)?;

        let out_row_start = y * w * stride as usize;
        match bpp {
            1 => decode_row_1bpp(&mut out[out_row_start..], row, w, &palette),
            4 => decode_row_4bpp(&mut out[out_row_start..], row, w, &palette),
            8 => decode_row_8bpp(&mut out[out_row_start..], row, w, entries_or_full(colors_used, bpp), &palette),
            16 => decode_row_16bpp(&mut out[out_row_start..], row, w),
            24 => decode_row_24bpp(&mut out[out_row_start..], row, w),
            32 => decode_row_32bpp(&mut out[out_row_start..], row, w),
            _ => unreachable!("bpp range already checked"),
        }
    }

    Ok(())
}

fn entries_or_full(colors_used: u32, bpp: u16) -> usize {
    let declared = if colors_used == 0 { 1u32 << bpp } else { colors_used };
    declared.min(256) as usize
}

fn decode_row_1bpp(out: &mut [u8], row: &[u8], w: usize, palette: &[[u8; 3]; 256]) {
    for x in 0..w {
        let byte = row[x >> 3];
        let idx = ((byte >> (7 - (x & 7))) & 1) as usize;
        let rgb = palette[idx];
        out[x * 3..x * 3 + 3].copy_from_slice(&rgb);
    }
}

fn decode_row_4bpp(out: &mut [u8], row: &[u8], w: usize, palette: &[[u8; 3]; 256]) {
    for x in 0..w {
        let byte = row[x >> 1];
        let idx = if x & 1 == 0 { byte >> 4 } else { byte & 0x0F } as usize;
        let rgb = palette[idx];
        out[x * 3..x * 3 + 3].copy_from_slice(&rgb);
    }
}

fn decode_row_8bpp(out: &mut [u8], row: &[u8], w: usize, declared_entries: usize, palette: &[[u8; 3]; 256]) {
    for x in 0..w {
        let mut idx = row[x] as usize;
        if idx >= declared_entries {
            idx = 0;
        }
        let rgb = palette[idx];
        out[x * 3..x * 3 + 3].copy_from_slice(&rgb);
    }
}

fn decode_row_16bpp(out: &mut [u8], row: &[u8], w: usize) {
    for x in 0..w {
        let px = u16::from_le_bytes([row[x * 2], row[x * 2 + 1]]);
        let r5 = (px >> 10) & 0x1F;
        let g5 = (px >> 5) & 0x1F;
        let b5 = px & 0x1F;
        out[x * 3] = (u32::from(r5) * 255 / 31) as u8;
        out[x * 3 + 1] = (u32::from(g5) * 255 / 31) as u8;
        out[x * 3 + 2] = (u32::from(b5) * 255 / 31) as u8;
    }
}

fn decode_row_24bpp(out: &mut [u8], row: &[u8], w: usize) {
    for x in 0..w {
        out[x * 3] = row[x * 3 + 2];
        out[x * 3 + 1] = row[x * 3 + 1];
        out[x * 3 + 2] = row[x * 3];
    }
}

fn decode_row_32bpp(out: &mut [u8], row: &[u8], w: usize) {
    for x in 0..w {
        out[x * 4] = row[x * 4 + 2];
        out[x * 4 + 1] = row[x * 4 + 1];
        out[x * 4 + 2] = row[x * 4];
        out[x * 4 + 3] = row[x * 4 + 3];
    }
}
