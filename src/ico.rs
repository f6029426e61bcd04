//! ICO decoding: locate the first directory entry and delegate to the BMP
//! decoder on its payload. No sub-image selection, no PNG-payload icons.

use crate::error::DecodeError;
use crate::image::Image;
use crate::limits::Limits;
use crate::reader::read_u32_le;

const MIN_HEADER_LEN: usize = 22;

pub(crate) fn decode(image: &mut Image<'_>, data: &[u8], limits: &Limits) -> Result<(), DecodeError> {
    if data.len() < MIN_HEADER_LEN {
        return Err(DecodeError::TruncatedData);
    }

    let reserved = u16::from_le_bytes([data[0], data[1]]);
    let kind = u16::from_le_bytes([data[2], data[3]]);
    let count = u16::from_le_bytes([data[4], data[5]]);
    if reserved != 0 || kind != 1 || count < 1 {
        return Err(DecodeError::BadSignature);
    }

    let offset = read_u32_le(data, 18).ok_or(DecodeError::TruncatedData)? as usize;
    let payload = data.get(offset..).ok_or(DecodeError::TruncatedData)?;

    if payload.len() >= 2 && payload[0] == 0x89 && payload[1] == b'P' {
        return Err(DecodeError::UnsupportedVariant);
    }

    crate::bmp::decode(image, payload, limits)
}
