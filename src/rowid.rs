//! Row-identifier encoding
//!
//! A row ID is an opaque byte blob that disambiguates rows sharing the
//! same user key. The adapter appends it verbatim and never inspects it;
//! row IDs of different user keys are never compared. Structured handles
//! arrive pre-encoded from the caller, so only the synthetic sequential
//! counter encoding lives here.

/// Sign-bit flip mask for the order-preserving i64 encoding.
const SIGN_FLIP: u64 = 1 << 63;

/// The smallest possible row ID: the zero-length byte string.
///
/// `encode(key, MIN_ROW_ID)` is the lexicographically smallest engine key
/// among all engine keys sharing `key`, for any non-empty row-ID encoding
/// in use. Callers use it to build a per-key scan lower bound.
pub const MIN_ROW_ID: &[u8] = &[];

/// Encode a synthetic sequential counter as a fixed 8-byte row ID.
///
/// Flipping the sign bit before emitting big-endian keeps the byte order
/// aligned with the numeric order: negative counters sort first.
#[inline]
pub fn encode_int_row_id(row_id: i64) -> [u8; 8] {
    ((row_id as u64) ^ SIGN_FLIP).to_be_bytes()
}
