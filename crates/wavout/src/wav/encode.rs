//! Little-endian field encoding.
//!
//! Header fields are appended to an in-memory buffer; nothing here can fail.

/// Appends a four-character chunk tag such as `b"RIFF"` or `b"fmt "`.
pub fn append_tag(buf: &mut Vec<u8>, tag: &[u8; 4]) {
    buf.extend_from_slice(tag);
}

/// Appends `value` as four little-endian bytes.
pub fn append_u32_le(buf: &mut Vec<u8>, value: u32) {
    buf.extend_from_slice(&value.to_le_bytes());
}

/// Appends `value` as two little-endian bytes.
pub fn append_u16_le(buf: &mut Vec<u8>, value: u16) {
    buf.extend_from_slice(&value.to_le_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_tag_has_no_terminator() {
        let mut buf = Vec::new();
        append_tag(&mut buf, b"fmt ");
        assert_eq!(buf, b"fmt ");
    }

    #[test]
    fn test_append_u32_le_byte_order() {
        let mut buf = Vec::new();
        append_u32_le(&mut buf, 0x1234_5678);
        assert_eq!(buf, [0x78, 0x56, 0x34, 0x12]);
    }

    #[test]
    fn test_append_u16_le_byte_order() {
        let mut buf = vec![0xAA];
        append_u16_le(&mut buf, 0xBEEF);
        assert_eq!(buf, [0xAA, 0xEF, 0xBE]);
    }
}
