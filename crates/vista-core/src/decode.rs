//! Numeric decoders for raw value bytes.
//!
//! Everything here works on byte spans already read from the host; spans
//! shorter than the requested width are reported as [`InspectError::Decode`]
//! instead of being padded.

use half::f16;

use crate::error::{InspectError, Result};
use crate::value::ByteOrder;

/// Decode an unsigned integer of `width` bytes (1, 2, 4 or 8).
///
/// Only the first `width` bytes of `bytes` are used.
pub fn read_uint(bytes: &[u8], width: usize, order: ByteOrder) -> Result<u64> {
    if !matches!(width, 1 | 2 | 4 | 8) {
        return Err(InspectError::decode(
            format!("{width}-byte integer"),
            "unsupported width",
        ));
    }
    let span = bytes.get(..width).ok_or_else(|| {
        InspectError::decode(
            format!("{width}-byte integer"),
            format!("need {width} bytes, got {}", bytes.len()),
        )
    })?;

    let mut buf = [0u8; 8];
    let value = match order {
        ByteOrder::Little => {
            buf[..width].copy_from_slice(span);
            u64::from_le_bytes(buf)
        }
        ByteOrder::Big => {
            buf[8 - width..].copy_from_slice(span);
            u64::from_be_bytes(buf)
        }
    };
    Ok(value)
}

/// Decode a 16-bit pattern.
pub fn read_u16(bytes: &[u8], order: ByteOrder) -> Result<u16> {
    // A 2-byte read always fits in u16.
    read_uint(bytes, 2, order).map(|v| v as u16)
}

/// Decode a C++ `bool` (any non-zero byte is `true`).
pub fn read_bool(bytes: &[u8]) -> Result<bool> {
    let byte = bytes
        .first()
        .ok_or_else(|| InspectError::decode("bool", "empty byte span"))?;
    Ok(*byte != 0)
}

/// Reinterpret a 16-bit pattern as IEEE-754 binary16 and widen it.
pub fn half_to_f64(bits: u16) -> f64 {
    f16::from_bits(bits).to_f64()
}

/// Format a float the way debuggers print them: integral values keep a
/// trailing `.0`, non-finite values print as `inf`, `-inf` and `nan`.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    format!("{value:?}")
}

/// Extract bit `index` from a packed little-endian bit array: bit
/// `index % 8` of byte `index / 8`.
pub fn bit(bytes: &[u8], index: usize) -> Result<bool> {
    let byte = bytes.get(index / 8).ok_or_else(|| {
        InspectError::decode(
            format!("bit {index}"),
            format!("byte {} out of range ({} bytes)", index / 8, bytes.len()),
        )
    })?;
    Ok((byte >> (index % 8)) & 0x1 == 0x1)
}

/// Number of bytes needed to store `bits` packed bits.
pub fn packed_len(bits: usize) -> usize {
    bits.div_ceil(8)
}

/// Render the first `len` bytes as lowercase hex with no separators.
pub fn hex_digest(bytes: &[u8], len: usize) -> Result<String> {
    let span = bytes.get(..len).ok_or_else(|| {
        InspectError::decode(
            format!("{len}-byte digest"),
            format!("need {len} bytes, got {}", bytes.len()),
        )
    })?;
    Ok(span.iter().map(|b| format!("{b:02x}")).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uint_little_and_big_endian() {
        let bytes = [0x01, 0x02, 0x03, 0x04];
        let read = |width, order| read_uint(&bytes, width, order).unwrap();
        assert_eq!(read(4, ByteOrder::Little), 0x0403_0201);
        assert_eq!(read(4, ByteOrder::Big), 0x0102_0304);
        assert_eq!(read(1, ByteOrder::Big), 0x01);
    }

    #[test]
    fn uint_short_span() {
        let err = read_uint(&[0x01], 2, ByteOrder::Little).unwrap_err();
        assert!(matches!(err, InspectError::Decode { .. }));
    }

    #[test]
    fn uint_unsupported_width() {
        assert!(read_uint(&[0; 8], 3, ByteOrder::Little).is_err());
    }

    #[test]
    fn half_one() {
        assert_eq!(half_to_f64(0x3C00), 1.0);
        let le = read_u16(&[0x00, 0x3C], ByteOrder::Little).unwrap();
        let be = read_u16(&[0x3C, 0x00], ByteOrder::Big).unwrap();
        assert_eq!(le, 0x3C00);
        assert_eq!(be, 0x3C00);
    }

    #[test]
    fn half_special_values() {
        assert_eq!(half_to_f64(0xC000), -2.0);
        assert_eq!(half_to_f64(0x3800), 0.5);
        assert!(half_to_f64(0x7C00).is_infinite());
        assert!(half_to_f64(0x7E00).is_nan());
    }

    #[test]
    fn float_formatting() {
        assert_eq!(format_float(1.0), "1.0");
        assert_eq!(format_float(-2.5), "-2.5");
        assert_eq!(format_float(f64::INFINITY), "inf");
        assert_eq!(format_float(f64::NAN), "nan");
    }

    #[test]
    fn packed_bits() {
        let bytes = [0b0000_0101, 0b0000_0010];
        assert!(bit(&bytes, 0).unwrap());
        assert!(!bit(&bytes, 1).unwrap());
        assert!(bit(&bytes, 2).unwrap());
        assert!(!bit(&bytes, 8).unwrap());
        assert!(bit(&bytes, 9).unwrap());
        assert!(bit(&bytes, 16).is_err());
        assert_eq!(packed_len(10), 2);
        assert_eq!(packed_len(8), 1);
    }

    #[test]
    fn digest_hex() {
        let bytes = [0x01, 0xAB, 0x00, 0xFF, 0x10, 0x20, 0x30, 0x40];
        assert_eq!(hex_digest(&bytes, 8).unwrap(), "01ab00ff10203040");
        assert!(hex_digest(&bytes[..4], 8).is_err());
    }
}
