//! In-memory column type model
//!
//! A [`DataType`] is a single byte: the [`ValueType`] code shifted above the
//! three [`SizeBits`] bits. [`DataType::combine`] and the two `slice_*`
//! methods are exact inverses, which is what lets the wire form carry the
//! two halves separately.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{SIZE_BITS_MASK, SIZE_BITS_WIDTH};
use crate::log_debug;

/// Scalar kind, independent of width
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ValueType {
    /// Not set or not recognised
    Unknown = 0,
    /// Unsigned integer
    Uint = 1,
    /// Signed integer
    Int = 2,
    /// IEEE float
    Float = 3,
    /// Boolean
    Bool = 4,
    /// Nanoseconds since the UTC epoch
    NanosecondsUtc = 5,
    /// Fixed width ASCII string
    AsciiFixed = 7,
    /// Fixed width UTF-8 string
    Utf8Fixed = 8,
    /// Opaque bytes
    Bytes = 9,
    /// Dynamic UTF-8 string
    Utf8Dynamic = 11,
    /// Dynamic ASCII string
    AsciiDynamic = 12,
    /// Null-only column, convertible to and from every other type
    Empty = 13,
    /// Nullable boolean
    BoolObject = 14,
}

impl ValueType {
    /// Every value type, `Unknown` included
    pub const ALL: [ValueType; 13] = [
        ValueType::Unknown,
        ValueType::Uint,
        ValueType::Int,
        ValueType::Float,
        ValueType::Bool,
        ValueType::NanosecondsUtc,
        ValueType::AsciiFixed,
        ValueType::Utf8Fixed,
        ValueType::Bytes,
        ValueType::Utf8Dynamic,
        ValueType::AsciiDynamic,
        ValueType::Empty,
        ValueType::BoolObject,
    ];

    /// Convert a raw code, mapping anything unrecognised to `Unknown`
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => ValueType::Unknown,
            1 => ValueType::Uint,
            2 => ValueType::Int,
            3 => ValueType::Float,
            4 => ValueType::Bool,
            5 => ValueType::NanosecondsUtc,
            7 => ValueType::AsciiFixed,
            8 => ValueType::Utf8Fixed,
            9 => ValueType::Bytes,
            11 => ValueType::Utf8Dynamic,
            12 => ValueType::AsciiDynamic,
            13 => ValueType::Empty,
            14 => ValueType::BoolObject,
            other => {
                log_debug!(code = other, "unrecognised value type decoded as Unknown");
                ValueType::Unknown
            }
        }
    }

    /// Numeric code of this value type
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// Storage width of a scalar
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SizeBits {
    /// Not set or not recognised
    Unknown = 0,
    /// 8 bits
    S8 = 1,
    /// 16 bits
    S16 = 2,
    /// 32 bits
    S32 = 3,
    /// 64 bits
    S64 = 4,
}

impl SizeBits {
    /// Every size, `Unknown` included
    pub const ALL: [SizeBits; 5] = [
        SizeBits::Unknown,
        SizeBits::S8,
        SizeBits::S16,
        SizeBits::S32,
        SizeBits::S64,
    ];

    /// Convert a raw code, mapping anything unrecognised to `Unknown`
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => SizeBits::Unknown,
            1 => SizeBits::S8,
            2 => SizeBits::S16,
            3 => SizeBits::S32,
            4 => SizeBits::S64,
            other => {
                log_debug!(code = other, "unrecognised size bits decoded as Unknown");
                SizeBits::Unknown
            }
        }
    }

    /// Numeric code of this size
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Width in bytes, zero for `Unknown`
    pub const fn size_in_bytes(self) -> usize {
        match self {
            SizeBits::Unknown => 0,
            SizeBits::S8 => 1,
            SizeBits::S16 => 2,
            SizeBits::S32 => 4,
            SizeBits::S64 => 8,
        }
    }
}

/// Scalar representation: a value type at a given width
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "DataTypeParts", into = "DataTypeParts")]
pub struct DataType(u8);

/// Serialized form of a [`DataType`]
#[derive(Serialize, Deserialize)]
struct DataTypeParts {
    value_type: ValueType,
    size_bits: SizeBits,
}

impl From<DataTypeParts> for DataType {
    fn from(parts: DataTypeParts) -> Self {
        DataType::combine(parts.value_type, parts.size_bits)
    }
}

impl From<DataType> for DataTypeParts {
    fn from(data_type: DataType) -> Self {
        DataTypeParts {
            value_type: data_type.slice_value_type(),
            size_bits: data_type.slice_bit_size(),
        }
    }
}

impl DataType {
    /// Unsigned 8 bit integer
    pub const UINT8: DataType = DataType::combine(ValueType::Uint, SizeBits::S8);
    /// Unsigned 16 bit integer
    pub const UINT16: DataType = DataType::combine(ValueType::Uint, SizeBits::S16);
    /// Unsigned 32 bit integer
    pub const UINT32: DataType = DataType::combine(ValueType::Uint, SizeBits::S32);
    /// Unsigned 64 bit integer
    pub const UINT64: DataType = DataType::combine(ValueType::Uint, SizeBits::S64);
    /// Signed 8 bit integer
    pub const INT8: DataType = DataType::combine(ValueType::Int, SizeBits::S8);
    /// Signed 16 bit integer
    pub const INT16: DataType = DataType::combine(ValueType::Int, SizeBits::S16);
    /// Signed 32 bit integer
    pub const INT32: DataType = DataType::combine(ValueType::Int, SizeBits::S32);
    /// Signed 64 bit integer
    pub const INT64: DataType = DataType::combine(ValueType::Int, SizeBits::S64);
    /// 32 bit float
    pub const FLOAT32: DataType = DataType::combine(ValueType::Float, SizeBits::S32);
    /// 64 bit float
    pub const FLOAT64: DataType = DataType::combine(ValueType::Float, SizeBits::S64);
    /// Boolean
    pub const BOOL8: DataType = DataType::combine(ValueType::Bool, SizeBits::S8);
    /// Nanosecond timestamp
    pub const NANOSECONDS_UTC64: DataType = DataType::combine(ValueType::NanosecondsUtc, SizeBits::S64);
    /// Fixed width ASCII string
    pub const ASCII_FIXED64: DataType = DataType::combine(ValueType::AsciiFixed, SizeBits::S64);
    /// Dynamic ASCII string
    pub const ASCII_DYNAMIC64: DataType = DataType::combine(ValueType::AsciiDynamic, SizeBits::S64);
    /// Fixed width UTF-8 string
    pub const UTF_FIXED64: DataType = DataType::combine(ValueType::Utf8Fixed, SizeBits::S64);
    /// Dynamic UTF-8 string
    pub const UTF_DYNAMIC64: DataType = DataType::combine(ValueType::Utf8Dynamic, SizeBits::S64);
    /// Null-only column
    pub const EMPTYVAL: DataType = DataType::combine(ValueType::Empty, SizeBits::S64);
    /// Nullable boolean
    pub const BOOL_OBJECT8: DataType = DataType::combine(ValueType::BoolObject, SizeBits::S8);
    /// Unknown type
    pub const UNKNOWN: DataType = DataType::combine(ValueType::Unknown, SizeBits::Unknown);

    const NAMED: [(DataType, &'static str); 19] = [
        (DataType::UINT8, "UINT8"),
        (DataType::UINT16, "UINT16"),
        (DataType::UINT32, "UINT32"),
        (DataType::UINT64, "UINT64"),
        (DataType::INT8, "INT8"),
        (DataType::INT16, "INT16"),
        (DataType::INT32, "INT32"),
        (DataType::INT64, "INT64"),
        (DataType::FLOAT32, "FLOAT32"),
        (DataType::FLOAT64, "FLOAT64"),
        (DataType::BOOL8, "BOOL8"),
        (DataType::NANOSECONDS_UTC64, "NANOSECONDS_UTC64"),
        (DataType::ASCII_FIXED64, "ASCII_FIXED64"),
        (DataType::ASCII_DYNAMIC64, "ASCII_DYNAMIC64"),
        (DataType::UTF_FIXED64, "UTF_FIXED64"),
        (DataType::UTF_DYNAMIC64, "UTF_DYNAMIC64"),
        (DataType::EMPTYVAL, "EMPTYVAL"),
        (DataType::BOOL_OBJECT8, "BOOL_OBJECT8"),
        (DataType::UNKNOWN, "UNKNOWN"),
    ];

    /// Pack a value type and size into a data type
    pub const fn combine(value_type: ValueType, size_bits: SizeBits) -> Self {
        DataType((value_type as u8) << SIZE_BITS_WIDTH | size_bits as u8)
    }

    /// Value type half of this data type
    pub fn slice_value_type(self) -> ValueType {
        ValueType::from_code(i32::from(self.0 >> SIZE_BITS_WIDTH))
    }

    /// Size half of this data type
    pub fn slice_bit_size(self) -> SizeBits {
        SizeBits::from_code(i32::from(self.0 & SIZE_BITS_MASK))
    }

    /// Packed byte as persisted
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Canonical name, if this is one of the named types
    pub fn name(self) -> Option<&'static str> {
        Self::NAMED
            .iter()
            .find(|(data_type, _)| *data_type == self)
            .map(|(_, name)| *name)
    }

    /// Width of one element in bytes
    pub fn size_in_bytes(self) -> usize {
        self.slice_bit_size().size_in_bytes()
    }

    /// Unsigned integer
    pub fn is_unsigned(self) -> bool {
        self.slice_value_type() == ValueType::Uint
    }

    /// Signed integer
    pub fn is_signed(self) -> bool {
        self.slice_value_type() == ValueType::Int
    }

    /// Signed or unsigned integer
    pub fn is_integer(self) -> bool {
        self.is_unsigned() || self.is_signed()
    }

    /// Float of any width
    pub fn is_floating_point(self) -> bool {
        self.slice_value_type() == ValueType::Float
    }

    /// Integer, float or timestamp
    pub fn is_numeric(self) -> bool {
        self.is_integer() || self.is_floating_point() || self.is_time()
    }

    /// Plain or nullable boolean
    pub fn is_bool(self) -> bool {
        matches!(self.slice_value_type(), ValueType::Bool | ValueType::BoolObject)
    }

    /// Nanosecond timestamp
    pub fn is_time(self) -> bool {
        self.slice_value_type() == ValueType::NanosecondsUtc
    }

    /// Fixed width string
    pub fn is_fixed_string(self) -> bool {
        matches!(self.slice_value_type(), ValueType::AsciiFixed | ValueType::Utf8Fixed)
    }

    /// Dynamic string
    pub fn is_dynamic_string(self) -> bool {
        matches!(self.slice_value_type(), ValueType::AsciiDynamic | ValueType::Utf8Dynamic)
    }

    /// Any string type
    pub fn is_sequence(self) -> bool {
        self.is_fixed_string() || self.is_dynamic_string()
    }

    /// Null-only column
    pub fn is_empty(self) -> bool {
        self.slice_value_type() == ValueType::Empty
    }
}

impl Default for DataType {
    fn default() -> Self {
        DataType::UNKNOWN
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(
                f,
                "DataType({:?},{:?})",
                self.slice_value_type(),
                self.slice_bit_size()
            ),
        }
    }
}

impl fmt::Debug for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Rank of a column element
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Dimension {
    /// Scalar
    #[default]
    Dim0 = 0,
    /// One dimensional array
    Dim1 = 1,
    /// Nested / two dimensional
    Dim2 = 2,
    /// Count not recognised by this build
    Unknown = 255,
}

impl Dimension {
    /// Every recognised dimension
    pub const ALL: [Dimension; 3] = [Dimension::Dim0, Dimension::Dim1, Dimension::Dim2];

    /// Convert a wire count, mapping anything unrecognised to `Unknown`
    pub fn from_count(count: u32) -> Self {
        match count {
            0 => Dimension::Dim0,
            1 => Dimension::Dim1,
            2 => Dimension::Dim2,
            other => {
                log_debug!(count = other, "unrecognised dimension decoded as Unknown");
                Dimension::Unknown
            }
        }
    }

    /// Count as stored on the wire
    pub const fn as_u32(self) -> u32 {
        self as u32
    }
}

/// Full type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Scalar representation
    pub data_type: DataType,
    /// Element rank
    #[serde(default)]
    pub dimension: Dimension,
}

impl TypeDescriptor {
    /// Build a type descriptor
    pub const fn new(data_type: DataType, dimension: Dimension) -> Self {
        Self { data_type, dimension }
    }

    /// Scalar column of the given data type
    pub const fn scalar(data_type: DataType) -> Self {
        Self::new(data_type, Dimension::Dim0)
    }

    /// Scalar representation
    pub const fn data_type(&self) -> DataType {
        self.data_type
    }

    /// Element rank
    pub const fn dimension(&self) -> Dimension {
        self.dimension
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TD<type={}, dim={}>", self.data_type, self.dimension.as_u32())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_and_slice_are_inverse() {
        for value_type in ValueType::ALL {
            for size_bits in SizeBits::ALL {
                let data_type = DataType::combine(value_type, size_bits);
                assert_eq!(data_type.slice_value_type(), value_type);
                assert_eq!(data_type.slice_bit_size(), size_bits);
            }
        }
    }

    #[test]
    fn test_packed_layout() {
        assert_eq!(DataType::UNKNOWN.as_u8(), 0);
        assert_eq!(DataType::UINT8.as_u8(), (1 << 3) | 1);
        assert_eq!(DataType::INT64.as_u8(), (2 << 3) | 4);
        assert_eq!(DataType::BOOL_OBJECT8.as_u8(), (14 << 3) | 1);
    }

    #[test]
    fn test_unrecognised_codes_are_unknown() {
        assert_eq!(ValueType::from_code(6), ValueType::Unknown);
        assert_eq!(ValueType::from_code(10), ValueType::Unknown);
        assert_eq!(ValueType::from_code(-1), ValueType::Unknown);
        assert_eq!(SizeBits::from_code(5), SizeBits::Unknown);
        assert_eq!(SizeBits::from_code(i32::MAX), SizeBits::Unknown);
    }

    #[test]
    fn test_classification() {
        assert!(DataType::UINT32.is_unsigned());
        assert!(DataType::UINT32.is_integer());
        assert!(!DataType::UINT32.is_signed());
        assert!(DataType::INT8.is_signed());
        assert!(DataType::FLOAT64.is_floating_point());
        assert!(DataType::NANOSECONDS_UTC64.is_time());
        assert!(DataType::NANOSECONDS_UTC64.is_numeric());
        assert!(DataType::BOOL_OBJECT8.is_bool());
        assert!(DataType::UTF_DYNAMIC64.is_dynamic_string());
        assert!(DataType::ASCII_FIXED64.is_fixed_string());
        assert!(DataType::ASCII_FIXED64.is_sequence());
        assert!(!DataType::BOOL8.is_sequence());
        assert!(DataType::EMPTYVAL.is_empty());
        assert_eq!(DataType::INT16.size_in_bytes(), 2);
        assert_eq!(DataType::UNKNOWN.size_in_bytes(), 0);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(DataType::FLOAT64.to_string(), "FLOAT64");
        assert_eq!(DataType::UNKNOWN.to_string(), "UNKNOWN");
        assert_eq!(
            DataType::combine(ValueType::Bytes, SizeBits::S32).to_string(),
            "DataType(Bytes,S32)"
        );
        let td = TypeDescriptor::new(DataType::INT32, Dimension::Dim1);
        assert_eq!(td.to_string(), "TD<type=INT32, dim=1>");
    }

    #[test]
    fn test_dimension_from_count() {
        assert_eq!(Dimension::from_count(2), Dimension::Dim2);
        assert_eq!(Dimension::from_count(3), Dimension::Unknown);
        assert_eq!(Dimension::from_count(u32::MAX), Dimension::Unknown);
        // The sentinel reads back as itself
        assert_eq!(Dimension::from_count(Dimension::Unknown.as_u32()), Dimension::Unknown);
    }

    #[test]
    fn test_serde_shape() {
        let td = TypeDescriptor::new(DataType::UINT16, Dimension::Dim1);
        let json = serde_json::to_value(td).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "data_type": { "value_type": "Uint", "size_bits": "S16" },
                "dimension": "Dim1"
            })
        );
        let back: TypeDescriptor = serde_json::from_value(json).unwrap();
        assert_eq!(back, td);
    }
}
