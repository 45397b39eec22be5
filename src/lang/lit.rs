//! ## Variable-width integer literals
//!
//! Decimal 0 to 9 is stored as its ASCII digit. Everything else is a tag
//! byte `0b0000_1hww` (h set for hexadecimal, ww the payload width less
//! one) followed by a little-endian payload that is sign extended when
//! read back.

use super::Int;

pub const MAX_WIDTH: usize = std::mem::size_of::<Int>();

const TAG: u8 = 0x08;
const TAG_MASK: u8 = 0xf8;
const TAG_HEX: u8 = 0x04;
const TAG_WIDTH: u8 = 0x03;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radix {
    Decimal,
    Hexadecimal,
}

fn is_tag(byte: u8) -> bool {
    byte & TAG_MASK == TAG
}

fn tag_width(byte: u8) -> usize {
    (byte & TAG_WIDTH) as usize + 1
}

fn fits(value: i64, width: usize) -> bool {
    let bits = 8 * width as u32;
    let min = -(1i64 << (bits - 1));
    let max = (1i64 << (bits - 1)) - 1;
    value >= min && value <= max
}

/// Payload bytes needed to hold `value`.
pub fn width(value: Int) -> usize {
    let value = value as i64;
    (1..MAX_WIDTH)
        .find(|w| fits(value, *w))
        .unwrap_or(MAX_WIDTH)
}

/// Writes `value` at `pos` and returns the position after it, or `None`
/// when `buf` is too short.
pub fn encode(buf: &mut [u8], pos: usize, value: Int, radix: Radix) -> Option<usize> {
    if radix == Radix::Decimal && (0..=9).contains(&value) {
        *buf.get_mut(pos)? = b'0' + value as u8;
        return Some(pos + 1);
    }
    let width = width(value);
    let end = pos + 1 + width;
    if end > buf.len() {
        return None;
    }
    let hex = if radix == Radix::Hexadecimal { TAG_HEX } else { 0 };
    buf[pos] = TAG | hex | (width - 1) as u8;
    buf[pos + 1..end].copy_from_slice(&(value as i64).to_le_bytes()[..width]);
    Some(end)
}

/// Reads the literal at `pos`, returning its value and the position after it.
pub fn decode(buf: &[u8], pos: usize) -> Option<(Int, usize)> {
    let byte = *buf.get(pos)?;
    if byte.is_ascii_digit() {
        return Some(((byte - b'0') as Int, pos + 1));
    }
    if !is_tag(byte) {
        return None;
    }
    let width = tag_width(byte);
    let payload = buf.get(pos + 1..pos + 1 + width)?;
    let mut value: i64 = 0;
    for (index, byte) in payload.iter().enumerate() {
        value |= (*byte as i64) << (8 * index);
    }
    let shift = 64 - 8 * width as u32;
    Some((((value << shift) >> shift) as Int, pos + 1 + width))
}

/// Position after the literal at `pos`, without decoding it.
pub fn skip(buf: &[u8], pos: usize) -> Option<usize> {
    let byte = *buf.get(pos)?;
    if byte.is_ascii_digit() {
        return Some(pos + 1);
    }
    if !is_tag(byte) {
        return None;
    }
    let end = pos + 1 + tag_width(byte);
    if end > buf.len() {
        None
    } else {
        Some(end)
    }
}

pub fn radix(buf: &[u8], pos: usize) -> Option<Radix> {
    let byte = *buf.get(pos)?;
    if byte.is_ascii_digit() {
        Some(Radix::Decimal)
    } else if is_tag(byte) {
        if byte & TAG_HEX != 0 {
            Some(Radix::Hexadecimal)
        } else {
            Some(Radix::Decimal)
        }
    } else {
        None
    }
}
