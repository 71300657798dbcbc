mod classify;
mod codec;
mod error;
mod exclusion;
mod leaf;
mod macros;
mod mapper;
mod reflect;
mod store;
mod strategy;
#[cfg(test)]
mod test_support;
mod value;

/// Structural kind classification.
pub use classify::{Kind, Specified, classify, specify};
/// JSON, property list and archive encode/decode entry points.
pub use codec::{
	JsonOptions, decode_archive, decode_archive_tree, decode_json, decode_plist, decode_plist_tree, encode_archive, encode_archive_tree, encode_json,
	encode_json_with, encode_plist, encode_tree_json, encode_tree_plist,
};
/// Error and result aliases.
pub use error::{MirrorError, Result};
/// Exclusion list lookup.
pub use exclusion::{EXCLUSION_FIELD, Exclusions};
/// Scalar leaf types with dedicated JSON encodings.
pub use leaf::{Blob, Point, REFERENCE_EPOCH_UNIX_SECONDS, Rect, Size, Timestamp};
/// Structural mapping entry points.
pub use mapper::{map_composite, map_mapping, map_sequence, map_value};
/// Reflection traits implemented by mapped types.
pub use reflect::{Composite, Enumerated, FieldDescriptor, Mapping, MappingKey, Primitive, Reflect, Sequence, short_type_name};
/// Persistence gateway.
pub use store::{Format, Store, StoredFile, default_file_name, load_tree};
/// Encoding strategy selection.
pub use strategy::EncodingStrategy;
/// Mapped tree types.
pub use value::{Scalar, StructuralValue};
