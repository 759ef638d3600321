//! Index kind mapping tables
//!
//! Closed tables over the five defined index kinds. Anything outside them
//! means the code and the data disagree, so these return an error instead
//! of falling back to a sentinel.

use crate::constants::{
    INDEX_CHAR_EMPTY, INDEX_CHAR_ROWCOUNT, INDEX_CHAR_STRING, INDEX_CHAR_TIMESTAMP,
    INDEX_CHAR_UNKNOWN,
};
use crate::log_warn;
use crate::types::error::{CodecError, Result};
use crate::types::index::IndexKind;

/// Every defined index kind
pub const INDEX_KINDS: [IndexKind; 5] = [
    IndexKind::Empty,
    IndexKind::Timestamp,
    IndexKind::Rowcount,
    IndexKind::String,
    IndexKind::Unknown,
];

fn defined_kind(kind: i32) -> Result<IndexKind> {
    IndexKind::try_from(kind).map_err(|_| {
        log_warn!(kind, "index kind outside the defined kinds");
        CodecError::InvalidIndexKind(kind)
    })
}

/// Character code of an index kind, given as the enum or its raw code
pub fn kind_to_char(kind: impl Into<i32>) -> Result<char> {
    let code = match defined_kind(kind.into())? {
        IndexKind::Empty => INDEX_CHAR_EMPTY,
        IndexKind::Timestamp => INDEX_CHAR_TIMESTAMP,
        IndexKind::Rowcount => INDEX_CHAR_ROWCOUNT,
        IndexKind::String => INDEX_CHAR_STRING,
        IndexKind::Unknown => INDEX_CHAR_UNKNOWN,
    };
    Ok(code)
}

/// Index kind named by a character code
pub fn char_to_kind(code: char) -> Result<IndexKind> {
    match code {
        INDEX_CHAR_EMPTY => Ok(IndexKind::Empty),
        INDEX_CHAR_TIMESTAMP => Ok(IndexKind::Timestamp),
        INDEX_CHAR_ROWCOUNT => Ok(IndexKind::Rowcount),
        INDEX_CHAR_STRING => Ok(IndexKind::String),
        INDEX_CHAR_UNKNOWN => Ok(IndexKind::Unknown),
        other => {
            log_warn!(code = ?other, "index kind char outside the defined kinds");
            Err(CodecError::InvalidIndexKindCode(other))
        }
    }
}

/// Human readable name of an index kind, given as the enum or its raw code
pub fn kind_to_display_name(kind: impl Into<i32>) -> Result<&'static str> {
    let name = match defined_kind(kind.into())? {
        IndexKind::Empty => "Empty",
        IndexKind::Timestamp => "Timestamp",
        IndexKind::Rowcount => "Row count",
        IndexKind::String => "String",
        IndexKind::Unknown => "Unknown",
    };
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_table() {
        assert_eq!(kind_to_char(IndexKind::Empty), Ok('E'));
        assert_eq!(kind_to_char(IndexKind::Timestamp), Ok('T'));
        assert_eq!(kind_to_char(IndexKind::Rowcount), Ok('R'));
        assert_eq!(kind_to_char(IndexKind::String), Ok('S'));
        assert_eq!(kind_to_char(IndexKind::Unknown), Ok('U'));
    }

    #[test]
    fn test_char_bijection() {
        for kind in INDEX_KINDS {
            assert_eq!(char_to_kind(kind_to_char(kind).unwrap()), Ok(kind));
        }
    }

    #[test]
    fn test_kind_codes_are_their_chars() {
        for kind in INDEX_KINDS.into_iter().filter(|k| *k != IndexKind::Unknown) {
            assert_eq!(kind as i32, kind_to_char(kind).unwrap() as i32);
        }
    }

    #[test]
    fn test_undefined_kind_fails() {
        assert_eq!(kind_to_char(1), Err(CodecError::InvalidIndexKind(1)));
        assert_eq!(kind_to_char(85), Err(CodecError::InvalidIndexKind(85)));
        assert_eq!(kind_to_display_name(-3), Err(CodecError::InvalidIndexKind(-3)));
    }

    #[test]
    fn test_undefined_char_fails() {
        for code in ['e', 'X', '0', ' ', 'é'] {
            let err = char_to_kind(code).unwrap_err();
            assert_eq!(err, CodecError::InvalidIndexKindCode(code));
            assert!(err.is_mapping_error());
        }
    }

    #[test]
    fn test_display_names() {
        let names: Vec<_> = INDEX_KINDS
            .iter()
            .map(|kind| kind_to_display_name(*kind).unwrap())
            .collect();
        assert_eq!(names, ["Empty", "Timestamp", "Row count", "String", "Unknown"]);
    }
}
