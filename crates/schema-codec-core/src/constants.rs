//! Layout constants shared by the codec
//!
//! The data type byte packs the value type above the size bits. These
//! numbers are part of the persisted format and must never change.

/// Number of low bits of a data type byte holding the size bits
pub const SIZE_BITS_WIDTH: u8 = 3;

/// Mask selecting the size bits of a data type byte
pub const SIZE_BITS_MASK: u8 = (1 << SIZE_BITS_WIDTH) - 1;

/// Character code of the empty index kind
pub const INDEX_CHAR_EMPTY: char = 'E';

/// Character code of the timestamp index kind
pub const INDEX_CHAR_TIMESTAMP: char = 'T';

/// Character code of the row count index kind
pub const INDEX_CHAR_ROWCOUNT: char = 'R';

/// Character code of the string index kind
pub const INDEX_CHAR_STRING: char = 'S';

/// Character code of the unknown index kind
pub const INDEX_CHAR_UNKNOWN: char = 'U';

/// Tracing target used by every codec log event
pub const LOG_TARGET: &str = "schema_codec";
