//! Property-based tests for the key codec
//!
//! Universal properties over arbitrary keys and row IDs: round trips,
//! order preservation, row-ID tie-breaking, and exact length reporting.

use std::cmp::Ordering;

use proptest::prelude::*;
use rowkey::{KeyAdapter, KeyBuf, MIN_ROW_ID};

fn arb_key() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..64)
}

fn arb_row_id() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..24)
}

fn arb_nonempty_row_id() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 1..24)
}

fn encode(adapter: KeyAdapter, key: &[u8], row_id: &[u8]) -> Vec<u8> {
    let mut buf = KeyBuf::new();
    adapter.encode(&mut buf, key, row_id);
    buf.into_vec()
}

fn decode(adapter: KeyAdapter, data: &[u8]) -> rowkey::Result<Vec<u8>> {
    let mut buf = KeyBuf::new();
    adapter.decode(&mut buf, data)?;
    Ok(buf.into_vec())
}

proptest! {
    #[test]
    fn dup_detect_roundtrip(key in arb_key(), row_id in arb_row_id()) {
        let encoded = encode(KeyAdapter::DupDetect, &key, &row_id);
        let decoded = decode(KeyAdapter::DupDetect, &encoded).expect("decoding should succeed");
        prop_assert_eq!(decoded, key);
    }

    #[test]
    fn noop_roundtrip(key in arb_key(), row_id in arb_row_id()) {
        let encoded = encode(KeyAdapter::Noop, &key, &row_id);
        prop_assert_eq!(&encoded, &key);
        let decoded = decode(KeyAdapter::Noop, &encoded).expect("decoding should succeed");
        prop_assert_eq!(decoded, key);
    }

    #[test]
    fn dup_detect_preserves_key_order(
        k1 in arb_key(),
        k2 in arb_key(),
        r1 in arb_row_id(),
        r2 in arb_row_id(),
    ) {
        prop_assume!(k1 != k2);
        let e1 = encode(KeyAdapter::DupDetect, &k1, &r1);
        let e2 = encode(KeyAdapter::DupDetect, &k2, &r2);
        prop_assert_eq!(e1.cmp(&e2), k1.cmp(&k2));
    }

    #[test]
    fn dup_detect_ties_break_on_row_id(
        key in arb_key(),
        r1 in arb_row_id(),
        r2 in arb_row_id(),
    ) {
        let e1 = encode(KeyAdapter::DupDetect, &key, &r1);
        let e2 = encode(KeyAdapter::DupDetect, &key, &r2);
        prop_assert_eq!(e1.cmp(&e2), r1.cmp(&r2));
    }

    #[test]
    fn dup_detect_distinct_row_ids_distinct_keys(
        key in arb_key(),
        r1 in arb_row_id(),
        r2 in arb_row_id(),
    ) {
        prop_assume!(r1 != r2);
        let e1 = encode(KeyAdapter::DupDetect, &key, &r1);
        let e2 = encode(KeyAdapter::DupDetect, &key, &r2);
        prop_assert_ne!(e1, e2);
    }

    #[test]
    fn min_row_id_is_scan_lower_bound(key in arb_key(), row_id in arb_nonempty_row_id()) {
        let lower_bound = encode(KeyAdapter::DupDetect, &key, MIN_ROW_ID);
        let encoded = encode(KeyAdapter::DupDetect, &key, &row_id);
        prop_assert_eq!(lower_bound.cmp(&encoded), Ordering::Less);
    }

    #[test]
    fn encoded_len_is_exact(key in arb_key(), row_id in arb_row_id()) {
        for adapter in [KeyAdapter::Noop, KeyAdapter::DupDetect] {
            let encoded = encode(adapter, &key, &row_id);
            prop_assert_eq!(encoded.len(), adapter.encoded_len(&key, &row_id));
        }
    }
}
