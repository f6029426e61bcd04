//! Bounds-checked primitive readers shared by every decoder.
//!
//! Every function here takes an explicit slice and offset and returns
//! `Option`/errors on short input instead of trusting a declared length —
//! there is no analogue of a C `end` sentinel pointer anywhere in this crate.

use crate::error::DecodeError;

pub(crate) fn read_u16_le(data: &[u8], offset: usize) -> Option<u16> {
    let end = offset.checked_add(2)?;
    let b = data.get(offset..end)?;
    Some(u16::from_le_bytes([b[0], b[1]]))
}

pub(crate) fn read_u32_le(data: &[u8], offset: usize) -> Option<u32> {
    let end = offset.checked_add(4)?;
    let b = data.get(offset..end)?;
    Some(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
}

pub(crate) fn read_i32_le(data: &[u8], offset: usize) -> Option<i32> {
    read_u32_le(data, offset).map(|v| v as i32)
}

fn is_ascii_ws(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

/// Advance past runs of whitespace and `#`-to-end-of-line comments.
pub(crate) fn skip_ws_and_comments(data: &[u8], mut pos: usize) -> usize {
    loop {
        match data.get(pos) {
            Some(b'#') => {
                pos += 1;
                while let Some(&b) = data.get(pos) {
                    pos += 1;
                    if b == b'\n' || b == b'\r' {
                        break;
                    }
                }
            }
            Some(&b) if is_ascii_ws(b) => pos += 1,
            _ => break,
        }
    }
    pos
}

/// Parse a run of ASCII digits after skipping leading whitespace/comments.
/// Returns `0` if no digit is present (the caller decides whether that's
/// meaningful); the accumulator saturates rather than wrapping on overflow.
pub(crate) fn parse_ascii_uint(data: &[u8], pos: usize) -> (u32, usize) {
    let mut pos = skip_ws_and_comments(data, pos);
    let mut value: u32 = 0;
    while let Some(&b) = data.get(pos) {
        if b.is_ascii_digit() {
            value = value.saturating_mul(10).saturating_add(u32::from(b - b'0'));
            pos += 1;
        } else {
            break;
        }
    }
    (value, pos)
}

/// Like [`parse_ascii_uint`], but fails with [`DecodeError::TruncatedData`]
/// if input runs out before a value could even be attempted. Used for the
/// bulk ASCII pixel loops (P1/P2/P3), where running off the end mid-stream
/// is corruption rather than a legitimately absent optional field.
pub(crate) fn parse_required_uint(data: &[u8], pos: usize) -> Result<(u32, usize), DecodeError> {
    let skipped = skip_ws_and_comments(data, pos);
    if skipped >= data.len() {
        return Err(DecodeError::TruncatedData);
    }
    Ok(parse_ascii_uint(data, pos))
}
