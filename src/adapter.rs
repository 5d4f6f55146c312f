//! Key adapter strategies
//!
//! Maps a user key plus a per-row identifier to the literal engine key
//! written to the ordered store.
//!
//! ## Engine Key Layout (DupDetect)
//!
//! ```text
//! ┌─────────────────────────────┬──────────────────────┐
//! │     escaped user key        │   row ID (opaque)    │
//! │  self-terminating groups    │  appended verbatim   │
//! └─────────────────────────────┴──────────────────────┘
//! ```
//!
//! Because the escaped segment is self-terminating, the row ID needs no
//! length prefix, and decoding recovers the user key while discarding the
//! row-ID tail.

use crate::buffer::KeyBuf;
use crate::error::Result;
use crate::escape::{escape_to, escaped_len, unescape_to};

/// Strategy for producing engine keys, chosen once per ingestion run.
///
/// A closed set: no further variant is anticipated, so this is an enum
/// rather than an open trait. Both variants are total, pure, stateless
/// transforms, safe to call from any number of threads as long as each
/// call owns its destination buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAdapter {
    /// Pass user keys through untouched. For target keyspaces that
    /// already guarantee uniqueness; the row ID is ignored.
    Noop,

    /// Escape the user key and append the row ID, so duplicate user keys
    /// become distinct engine keys that can later be re-grouped by their
    /// decoded original key.
    DupDetect,
}

impl KeyAdapter {
    /// Exact number of bytes [`encode`](Self::encode) will append for
    /// this key and row ID.
    #[inline]
    pub fn encoded_len(&self, key: &[u8], row_id: &[u8]) -> usize {
        match self {
            KeyAdapter::Noop => key.len(),
            KeyAdapter::DupDetect => escaped_len(key.len()) + row_id.len(),
        }
    }

    /// Append the engine-key encoding of `key` to `buf`.
    ///
    /// Total: defined for every input, never fails. For two keys k1 ≠ k2
    /// the DupDetect outputs compare byte-wise with the same sign as
    /// k1 vs k2 regardless of row IDs; for a fixed key the comparison
    /// reduces to comparing the row IDs as byte strings.
    pub fn encode(&self, buf: &mut KeyBuf, key: &[u8], row_id: &[u8]) {
        match self {
            KeyAdapter::Noop => buf.append(key),
            KeyAdapter::DupDetect => {
                buf.reserve(self.encoded_len(key, row_id));
                escape_to(buf, key);
                buf.append(row_id);
            }
        }
    }

    /// Append the user key recovered from engine-key bytes to `buf`.
    ///
    /// For DupDetect the row-ID tail after the terminal group is
    /// discarded; row IDs are never recovered. Fails with
    /// [`MalformedEncoding`](crate::RowKeyError::MalformedEncoding) on a
    /// truncated group, an out-of-range marker, or corrupt padding; the
    /// Noop variant never fails.
    pub fn decode(&self, buf: &mut KeyBuf, data: &[u8]) -> Result<()> {
        match self {
            KeyAdapter::Noop => {
                buf.append(data);
                Ok(())
            }
            KeyAdapter::DupDetect => unescape_to(buf, data).map(|_consumed| ()),
        }
    }
}
