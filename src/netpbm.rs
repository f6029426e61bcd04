//! NetPBM (P1–P6) decoding. P7 (PAM) uses an entirely different
//! keyword-based header and is rejected outright rather than misparsed
//! through the P1–P6 grammar below.

use crate::error::DecodeError;
use crate::image::Image;
use crate::limits::Limits;
use crate::reader::{parse_ascii_uint, parse_required_uint};

pub(crate) fn decode(image: &mut Image<'_>, data: &[u8], limits: &Limits) -> Result<(), DecodeError> {
    if data.len() < 2 || data[0] != b'P' {
        return Err(DecodeError::BadSignature);
    }
    let variant = data[1];
    if !(b'1'..=b'7').contains(&variant) {
        return Err(DecodeError::BadSignature);
    }
    if variant == b'7' {
        return Err(DecodeError::UnsupportedVariant);
    }

    let mut pos = 2;
    let (width, p) = parse_ascii_uint(data, pos);
    pos = p;
    let (height, p) = parse_ascii_uint(data, pos);
    pos = p;

    if width == 0 || height == 0 {
        return Err(DecodeError::ZeroDimension);
    }
    limits.check(width, height)?;

    let maxval = if matches!(variant, b'1' | b'4') {
        1u32
    } else {
        let (v, p) = parse_ascii_uint(data, pos);
        pos = p;
        if v == 0 {
            return Err(DecodeError::MalformedHeader);
        }
        v
    };

    if matches!(variant, b'4' | b'5' | b'6') {
        // Exactly one whitespace byte separates the header from binary data.
        match data.get(pos) {
            Some(b' ' | b'\t' | b'\r' | b'\n') => pos += 1,
            _ => return Err(DecodeError::MalformedHeader),
        }
    }

    let stride = if matches!(variant, b'3' | b'6') { 3 } else { 1 };
    image.set_geometry(width, height, stride)?;

    let out = image.written_mut();

    match variant {
        b'1' => decode_p1(out, data, pos, width, height),
        b'4' => decode_p4(out, data, pos, width, height),
        b'2' => decode_p2(out, data, pos, width, height, maxval),
        b'5' => decode_p5(out, data, pos, width, height, maxval),
        b'3' => decode_p3(out, data, pos, width, height, maxval),
        b'6' => decode_p6(out, data, pos, width, height, maxval),
        _ => unreachable!("variant range already checked"),
    }
}

fn decode_p1(out: &mut [u8], data: &[u8], mut pos: usize, width: u32, height: u32) -> Result<(), DecodeError> {
    let n = width as usize * height as usize;
    for slot in out.iter_mut().take(n) {
        let (bit, p) = parse_required_uint(data, pos)?;
        pos = p;
        *slot = if bit != 0 { 0 } else { 255 };
    }
    Ok(())
}

fn decode_p4(out: &mut [u8], data: &[u8], pos: usize, width: u32, height: u32) -> Result<(), DecodeError> {
    let w = width as usize;
    let h = height as usize;
    let row_bytes = (w + 7) / 8;
    let needed = row_bytes.checked_mul(h).ok_or(DecodeError::DimensionsOverflow)?;
    let packed = data
        .get(pos..)
        .and_then(|s| s.get(..needed))
        .ok_or(DecodeError::TruncatedData)?;

    for y in 0..h {
        let row = &packed[y * row_bytes..(y + 1) * row_bytes];
        for x in 0..w {
            let byte = row[x >> 3];
            let bit = (byte >> (7 - (x & 7))) & 1;
            out[y * w + x] = if bit != 0 { 0 } else { 255 };
        }
    }
    Ok(())
}

fn decode_p2(
    out: &mut [u8],
    data: &[u8],
    mut pos: usize,
    width: u32,
    height: u32,
    maxval: u32,
) -> Result<(), DecodeError> {
    let n = width as usize * height as usize;
    for slot in out.iter_mut().take(n) {
        let (v, p) = parse_required_uint(data, pos)?;
        pos = p;
        *slot = ((255u64 * u64::from(v)) / u64::from(maxval)) as u8;
    }
    Ok(())
}

fn decode_p5(
    out: &mut [u8],
    data: &[u8],
    pos: usize,
    width: u32,
    height: u32,
    maxval: u32,
) -> Result<(), DecodeError> {
    let n = width as usize * height as usize;
    let src = data
        .get(pos..)
        .and_then(|s| s.get(..n))
        .ok_or(DecodeError::TruncatedData)?;
    for (slot, &v) in out.iter_mut().zip(src.iter()) {
        *slot = ((255u64 * u64::from(v)) / u64::from(maxval)) as u8;
    }
    Ok(())
}

fn decode_p3(
    out: &mut [u8],
    data: &[u8],
    mut pos: usize,
    width: u32,
    height: u32,
    maxval: u32,
) -> Result<(), DecodeError> {
    let n = width as usize * height as usize;
    for i in 0..n {
        for c in 0..3 {
            let (v, p) = parse_required_uint(data, pos)?;
            pos = p;
            out[i * 3 + c] = ((255u64 * u64::from(v)) / u64::from(maxval)) as u8;
        }
    }
    Ok(())
}

fn decode_p6(
    out: &mut [u8],
    data: &[u8],
    pos: usize,
    width: u32,
    height: u32,
    maxval: u32,
) -> Result<(), DecodeError> {
    let n = width as usize * height as usize;
    let needed = n.checked_mul(3).ok_or(DecodeError::DimensionsOverflow)?;
    let src = data
        .get(pos..)
        .and_then(|s| s.get(..needed))
        .ok_or(DecodeError::TruncatedData)?;
    for (slot, &v) in out.iter_mut().zip(src.iter()) {
        *slot = ((255u64 * u64::from(v)) / u64::from(maxval)) as u8;
    }
    Ok(())
}
