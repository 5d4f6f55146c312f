//! Destination buffer for key encoding and decoding.
//!
//! Encode and decode append their output to a caller-owned [`KeyBuf`]
//! passed by mutable reference. The append contract:
//!
//! - If the buffer's spare capacity holds the appended bytes, they land in
//!   the existing backing allocation and the hot path does not allocate.
//! - Otherwise the buffer reallocates, copies its logical content as a
//!   prefix, and appends. Growth is silent; an undersized buffer is never
//!   an error and never truncates.
//!
//! Callers size buffers up front from `encoded_len` and keep reusing them
//! across rows ([`KeyBuf::clear`] keeps the allocation).

/// Caller-owned growable append buffer.
///
/// One `KeyBuf` must not be shared between concurrently in-flight encode
/// or decode calls; the `&mut` receiver enforces that in safe code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyBuf {
    data: Vec<u8>,
}

impl KeyBuf {
    /// Create an empty buffer with no backing allocation.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Create an empty buffer with `capacity` bytes pre-allocated.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Append `bytes`, reusing spare capacity when it suffices.
    #[inline]
    pub fn append(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }

    /// Append a single byte.
    #[inline]
    pub fn push(&mut self, byte: u8) {
        self.data.push(byte);
    }

    /// Ensure room for at least `additional` more bytes.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Number of bytes currently in the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if the buffer holds no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Total capacity of the backing allocation.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Allocated-but-unused tail available for appends without reallocating.
    #[inline]
    pub fn spare_capacity(&self) -> usize {
        self.data.capacity() - self.data.len()
    }

    /// Address of the backing allocation.
    ///
    /// Tests compare this before and after an append to observe whether
    /// the buffer reused its storage or reallocated.
    #[inline]
    pub fn as_ptr(&self) -> *const u8 {
        self.data.as_ptr()
    }

    /// View the buffer contents.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Drop the contents, keeping the allocation for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Take the contents as a plain `Vec<u8>`.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

impl From<Vec<u8>> for KeyBuf {
    fn from(data: Vec<u8>) -> Self {
        Self { data }
    }
}

impl AsRef<[u8]> for KeyBuf {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl std::ops::Deref for KeyBuf {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}
