//! Group-escaped byte encoding
//!
//! Order-preserving, self-terminating encoding of arbitrary byte strings.
//! Comparing two escaped outputs byte-for-byte gives the same result as
//! comparing the original keys, including the case where one key is a
//! strict prefix of the other.
//!
//! ## Wire Format
//!
//! The input is emitted in 9-byte groups of 8 data bytes plus one marker:
//!
//! ```text
//! ┌───────────────────┬────────┐  ┌───────────────────┬────────┐
//! │   8 data bytes    │  0xFF  │  │ data ┊ zero pad   │ marker │
//! └───────────────────┴────────┘  └───────────────────┴────────┘
//!        full group (more follow)        terminal group
//! ```
//!
//! The terminal marker is `0xFF - pad_count`, so a group carrying n real
//! bytes ends with `0xF7 + n`. A key whose length is an exact multiple of
//! 8 gets an explicit all-padding terminal group (marker `0xF7`); the
//! stream therefore never ends on `0xFF`. Decoding stops at the terminal
//! group, leaving any trailing bytes for the caller.
//!
//! This layout is an on-disk format contract: external tools reading raw
//! engine keys decode the same 9-byte groups and marker values.

use crate::buffer::KeyBuf;
use crate::error::{Result, RowKeyError};

/// Real data bytes per group.
pub const GROUP_SIZE: usize = 8;

/// Bytes per encoded group: data plus marker.
pub const ENCODED_GROUP_SIZE: usize = GROUP_SIZE + 1;

/// Marker for a full group with more groups following.
pub const MARKER: u8 = 0xFF;

/// Fill byte for the unused tail of the terminal group.
pub const PAD: u8 = 0x00;

/// Exact escaped length of a key of `key_len` bytes.
#[inline]
pub fn escaped_len(key_len: usize) -> usize {
    (key_len / GROUP_SIZE + 1) * ENCODED_GROUP_SIZE
}

/// Append the group-escaped form of `key` to `buf`.
///
/// Total: defined for every input, never fails.
pub fn escape_to(buf: &mut KeyBuf, key: &[u8]) {
    buf.reserve(escaped_len(key.len()));

    let mut chunks = key.chunks_exact(GROUP_SIZE);
    for chunk in &mut chunks {
        buf.append(chunk);
        buf.push(MARKER);
    }

    // Terminal group: 0..8 real bytes, zero-padded, marker encodes the
    // pad count. An empty remainder still emits a group so the stream
    // never ends on a full-group marker.
    let tail = chunks.remainder();
    let pad_count = GROUP_SIZE - tail.len();
    buf.append(tail);
    buf.append(&[PAD; GROUP_SIZE][..pad_count]);
    buf.push(MARKER - pad_count as u8);
}

/// Decode one group-escaped key from the front of `data`, appending the
/// recovered bytes to `buf`.
///
/// Returns the number of input bytes consumed. Bytes after the terminal
/// group are not touched; callers treat them as an opaque trailing blob.
pub fn unescape_to(buf: &mut KeyBuf, data: &[u8]) -> Result<usize> {
    let mut offset = 0;
    loop {
        let group = data.get(offset..offset + ENCODED_GROUP_SIZE).ok_or_else(|| {
            RowKeyError::MalformedEncoding(format!(
                "truncated group at offset {}: {} bytes remain, need {}",
                offset,
                data.len() - offset,
                ENCODED_GROUP_SIZE
            ))
        })?;

        let marker = group[GROUP_SIZE];
        if marker == MARKER {
            buf.append(&group[..GROUP_SIZE]);
            offset += ENCODED_GROUP_SIZE;
            continue;
        }

        let pad_count = (MARKER - marker) as usize;
        if pad_count > GROUP_SIZE {
            return Err(RowKeyError::MalformedEncoding(format!(
                "invalid marker byte 0x{:02x} at offset {}",
                marker,
                offset + GROUP_SIZE
            )));
        }

        let real = GROUP_SIZE - pad_count;
        if group[real..GROUP_SIZE].iter().any(|&b| b != PAD) {
            return Err(RowKeyError::MalformedEncoding(format!(
                "non-zero padding in terminal group at offset {}",
                offset
            )));
        }

        buf.append(&group[..real]);
        return Ok(offset + ENCODED_GROUP_SIZE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escape(key: &[u8]) -> Vec<u8> {
        let mut buf = KeyBuf::new();
        escape_to(&mut buf, key);
        buf.into_vec()
    }

    #[test]
    fn short_key_layout() {
        // 3 real bytes, 5 pads, marker 0xFF - 5 = 0xFA
        assert_eq!(
            escape(&[1, 2, 3]),
            vec![1, 2, 3, 0, 0, 0, 0, 0, 0xFA]
        );
    }

    #[test]
    fn exact_multiple_gets_all_pad_group() {
        let encoded = escape(&[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(
            encoded,
            vec![1, 2, 3, 4, 5, 6, 7, 8, 0xFF, 0, 0, 0, 0, 0, 0, 0, 0, 0xF7]
        );
    }

    #[test]
    fn empty_key_is_single_pad_group() {
        assert_eq!(escape(&[]), vec![0, 0, 0, 0, 0, 0, 0, 0, 0xF7]);
    }

    #[test]
    fn escaped_len_matches_output() {
        for len in 0..=40 {
            let key: Vec<u8> = (0..len as u8).collect();
            assert_eq!(escape(&key).len(), escaped_len(len), "key length {}", len);
        }
    }

    #[test]
    fn prefix_sorts_before_extension() {
        // The shorter key's terminal group has more padding and a lower
        // marker, so a strict prefix compares lower.
        let a = escape(&[0, 1, 3, 4]);
        let b = escape(&[0, 1, 3, 4, 0]);
        assert!(a < b);
    }

    #[test]
    fn roundtrip_with_consumed_offset() {
        let key = b"0123456789abcdef_tail";
        let mut encoded = escape(key);
        encoded.extend_from_slice(b"rowid");

        let mut buf = KeyBuf::new();
        let consumed = unescape_to(&mut buf, &encoded).unwrap();
        assert_eq!(buf.as_slice(), key);
        assert_eq!(consumed, escaped_len(key.len()));
        assert_eq!(&encoded[consumed..], b"rowid");
    }
}
