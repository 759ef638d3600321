//! Sorted-value translator
//!
//! Both directions are total. A wire code this build does not recognise
//! decodes to `Unknown` so descriptors written by newer producers still load.

use crate::log_debug;
use crate::proto;
use crate::types::sorted::SortedValue;

/// Encode the in-memory sortedness
pub fn encode_sorted(sorted: SortedValue) -> proto::SortedValue {
    match sorted {
        SortedValue::Unsorted => proto::SortedValue::Unsorted,
        SortedValue::Descending => proto::SortedValue::Descending,
        SortedValue::Ascending => proto::SortedValue::Ascending,
        SortedValue::Unknown => proto::SortedValue::Unknown,
    }
}

/// Decode a wire sortedness, given as the enum or its raw code
pub fn decode_sorted(sorted: impl Into<i32>) -> SortedValue {
    let code = sorted.into();
    match proto::SortedValue::try_from(code) {
        Ok(proto::SortedValue::Unsorted) => SortedValue::Unsorted,
        Ok(proto::SortedValue::Descending) => SortedValue::Descending,
        Ok(proto::SortedValue::Ascending) => SortedValue::Ascending,
        Ok(proto::SortedValue::Unknown) => SortedValue::Unknown,
        Err(_) => {
            log_debug!(code, "unrecognised sorted value decoded as UNKNOWN");
            SortedValue::Unknown
        }
    }
}
