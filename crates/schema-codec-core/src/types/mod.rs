/// Type definitions for the descriptor codec
///
/// The in-memory model that the codec translates to and from the wire
/// descriptors in [`crate::proto`].

/// Data type, dimension and type descriptor
pub mod data_type;
/// Sortedness
pub mod sorted;
/// Index descriptor wrapper
pub mod index;
/// Stream identity
pub mod stream_id;
/// Column fields
pub mod field;
/// Stream descriptor
pub mod descriptor;
/// Codec error types
pub mod error;

pub use data_type::{DataType, Dimension, SizeBits, TypeDescriptor, ValueType};
pub use sorted::SortedValue;
pub use index::{IndexDescriptor, IndexKind};
pub use stream_id::StreamId;
pub use field::{scalar_field, Field};
pub use descriptor::StreamDescriptor;
pub use error::{CodecError, Result};
