//! Field comparator
//!
//! Equality is structural over the whole wire field, ordering is by name
//! alone. The two relations disagree for same-named fields of different
//! types: those are equivalent under [`fields_less`] yet unequal under
//! [`fields_equal`]. Schema diffing relies on exactly this, so callers keying
//! sets or maps by field must pick the relation they mean.

use std::cmp::Ordering;

use crate::proto::FieldDescriptor;

/// True when every part of the two wire fields matches
pub fn fields_equal(left: &FieldDescriptor, right: &FieldDescriptor) -> bool {
    left == right
}

/// Strict weak ordering by name, byte-lexicographic
pub fn fields_less(left: &FieldDescriptor, right: &FieldDescriptor) -> bool {
    left.name < right.name
}

/// Name ordering as an [`Ordering`]
pub fn fields_cmp(left: &FieldDescriptor, right: &FieldDescriptor) -> Ordering {
    left.name.cmp(&right.name)
}

/// Stable sort into canonical by-name order
pub fn sort_fields(fields: &mut [FieldDescriptor]) {
    fields.sort_by(fields_cmp);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::type_desc::build_field_descriptor;
    use crate::types::{DataType, Dimension};

    #[test]
    fn test_same_name_different_type_is_asymmetric() {
        let a = build_field_descriptor(DataType::INT64, Dimension::Dim0, "x");
        let b = build_field_descriptor(DataType::FLOAT64, Dimension::Dim0, "x");

        assert!(!fields_less(&a, &b));
        assert!(!fields_less(&b, &a));
        assert_eq!(fields_cmp(&a, &b), Ordering::Equal);
        assert!(!fields_equal(&a, &b));
    }

    #[test]
    fn test_equality_is_deep() {
        let a = build_field_descriptor(DataType::INT64, Dimension::Dim0, "x");
        assert!(fields_equal(&a, &a.clone()));

        let b = build_field_descriptor(DataType::INT64, Dimension::Dim1, "x");
        assert!(!fields_equal(&a, &b));

        let c = build_field_descriptor(DataType::INT64, Dimension::Dim0, "y");
        assert!(!fields_equal(&a, &c));

        let mut missing_type = a.clone();
        missing_type.type_desc = None;
        assert!(!fields_equal(&a, &missing_type));
    }

    #[test]
    fn test_ordering_is_by_bytes() {
        let upper = build_field_descriptor(DataType::INT8, Dimension::Dim0, "Z");
        let lower = build_field_descriptor(DataType::INT8, Dimension::Dim0, "a");
        let anonymous = build_field_descriptor(DataType::INT8, Dimension::Dim0, "");

        assert!(fields_less(&upper, &lower));
        assert!(fields_less(&anonymous, &upper));
        assert!(!fields_less(&lower, &lower));
    }

    #[test]
    fn test_sort_is_stable() {
        let mut fields = vec![
            build_field_descriptor(DataType::INT8, Dimension::Dim0, "b"),
            build_field_descriptor(DataType::INT16, Dimension::Dim0, "a"),
            build_field_descriptor(DataType::INT32, Dimension::Dim0, "b"),
        ];
        sort_fields(&mut fields);

        let names: Vec<_> = fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "b"]);
        assert_eq!(
            crate::codec::type_desc::decode_data_type(fields[1].type_desc.as_ref().unwrap()),
            DataType::INT8
        );
    }
}
