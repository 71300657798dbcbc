use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// JSON-compatible leaf of a mapped tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Scalar {
	/// Boolean.
	Bool(bool),
	/// Signed integer.
	I64(i64),
	/// Unsigned integer.
	U64(u64),
	/// Floating point number.
	F64(f64),
	/// Text.
	String(String),
}

impl Scalar {
	/// Stable lowercase label for the scalar kind.
	pub fn kind_str(&self) -> &'static str {
		match self {
			Self::Bool(_) => "bool",
			Self::I64(_) => "i64",
			Self::U64(_) => "u64",
			Self::F64(_) => "f64",
			Self::String(_) => "string",
		}
	}

	/// JSON form; non-finite floats have none and become `null`.
	pub fn to_json(&self) -> serde_json::Value {
		match self {
			Self::Bool(value) => serde_json::Value::Bool(*value),
			Self::I64(value) => serde_json::Value::from(*value),
			Self::U64(value) => serde_json::Value::from(*value),
			Self::F64(value) => serde_json::Number::from_f64(*value).map_or(serde_json::Value::Null, serde_json::Value::Number),
			Self::String(value) => serde_json::Value::String(value.clone()),
		}
	}
}

macro_rules! scalar_from {
	($variant:ident <= $($ty:ty),*) => {$(
		impl From<$ty> for Scalar {
			fn from(value: $ty) -> Self {
				Self::$variant(value.into())
			}
		}
	)*};
}

scalar_from!(Bool <= bool);
scalar_from!(I64 <= i8, i16, i32, i64);
scalar_from!(U64 <= u8, u16, u32, u64);
scalar_from!(F64 <= f32, f64);
scalar_from!(String <= String, &str);

/// Uniform intermediate tree produced by the structural mapper.
///
/// `Mapping` and `Composite` keep their entries sorted by key, which makes
/// rendering deterministic without a separate sorting pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StructuralValue {
	/// Explicit null. The mapper never produces it; it only appears in trees
	/// rebuilt from foreign JSON.
	Null,
	/// JSON-compatible leaf.
	Scalar(Scalar),
	/// Ordered list.
	Sequence(Vec<StructuralValue>),
	/// Keyed collection.
	Mapping(BTreeMap<String, StructuralValue>),
	/// Named fields of a composite.
	Composite(BTreeMap<String, StructuralValue>),
}

impl StructuralValue {
	/// Stable lowercase label for the node kind.
	pub fn kind_str(&self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Scalar(_) => "scalar",
			Self::Sequence(_) => "sequence",
			Self::Mapping(_) => "mapping",
			Self::Composite(_) => "composite",
		}
	}

	/// Entry of a composite or mapping by key.
	pub fn get(&self, key: &str) -> Option<&StructuralValue> {
		match self {
			Self::Mapping(entries) | Self::Composite(entries) => entries.get(key),
			_ => None,
		}
	}

	/// Element of a sequence by position.
	pub fn at(&self, index: usize) -> Option<&StructuralValue> {
		match self {
			Self::Sequence(items) => items.get(index),
			_ => None,
		}
	}

	/// Leaf payload when this node is a scalar.
	pub fn as_scalar(&self) -> Option<&Scalar> {
		match self {
			Self::Scalar(scalar) => Some(scalar),
			_ => None,
		}
	}

	/// JSON form of the tree. Composites and mappings both become objects.
	pub fn to_json(&self) -> serde_json::Value {
		match self {
			Self::Null => serde_json::Value::Null,
			Self::Scalar(scalar) => scalar.to_json(),
			Self::Sequence(items) => serde_json::Value::Array(items.iter().map(Self::to_json).collect()),
			Self::Mapping(entries) | Self::Composite(entries) => {
				serde_json::Value::Object(entries.iter().map(|(key, value)| (key.clone(), value.to_json())).collect())
			}
		}
	}

	/// Rebuild a tree from JSON. Objects come back as composites, since JSON
	/// does not distinguish them from mappings.
	pub fn from_json(value: &serde_json::Value) -> Self {
		match value {
			serde_json::Value::Null => Self::Null,
			serde_json::Value::Bool(item) => Self::Scalar(Scalar::Bool(*item)),
			serde_json::Value::Number(number) => {
				if let Some(item) = number.as_i64() {
					Self::Scalar(Scalar::I64(item))
				} else if let Some(item) = number.as_u64() {
					Self::Scalar(Scalar::U64(item))
				} else {
					Self::Scalar(Scalar::F64(number.as_f64().unwrap_or(f64::NAN)))
				}
			}
			serde_json::Value::String(item) => Self::Scalar(Scalar::String(item.clone())),
			serde_json::Value::Array(items) => Self::Sequence(items.iter().map(Self::from_json).collect()),
			serde_json::Value::Object(entries) => Self::Composite(entries.iter().map(|(key, value)| (key.clone(), Self::from_json(value))).collect()),
		}
	}
}

impl From<Scalar> for StructuralValue {
	fn from(value: Scalar) -> Self {
		Self::Scalar(value)
	}
}
