use std::collections::{BTreeMap, HashMap, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use crate::mirror::leaf::{Blob, Point, Rect, Size, Timestamp};
use crate::mirror::value::Scalar;

/// Leaf payload exposed by a scalar-shaped value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive<'a> {
	/// Boolean scalar.
	Bool(bool),
	/// Signed integer scalar.
	I64(i64),
	/// Unsigned integer scalar.
	U64(u64),
	/// Floating point scalar.
	F64(f64),
	/// Borrowed text.
	Str(&'a str),
	/// Borrowed byte blob.
	Bytes(&'a [u8]),
	/// Instant in time.
	Timestamp(Timestamp),
	/// 2D point.
	Point(Point),
	/// 2D size.
	Size(Size),
	/// 2D rectangle.
	Rect(Rect),
	/// Value with no JSON-compatible leaf form.
	Opaque,
}

/// Capability accessors used to classify a runtime value.
///
/// Every accessor defaults to "not supported"; a type overrides the ones
/// matching its shape. Classification checks them in a fixed priority order,
/// so a type exposing several capabilities is still classified one way.
pub trait Reflect {
	/// Closed enumeration capability.
	fn as_enumerated(&self) -> Option<&dyn Enumerated> {
		None
	}

	/// Field enumeration capability.
	fn as_composite(&self) -> Option<&dyn Composite> {
		None
	}

	/// Ordered, index-accessible collection capability.
	fn as_sequence(&self) -> Option<&dyn Sequence> {
		None
	}

	/// Keyed collection capability.
	fn as_mapping(&self) -> Option<&dyn Mapping> {
		None
	}

	/// Optional wrapper: `Some(None)` for an absent value, `Some(Some(inner))` when present.
	fn as_optional(&self) -> Option<Option<&dyn Reflect>> {
		None
	}

	/// Leaf payload for scalar-shaped values.
	fn as_primitive(&self) -> Primitive<'_> {
		Primitive::Opaque
	}
}

/// Closed set of named cases backed by a raw scalar discriminant.
pub trait Enumerated {
	/// Raw discriminant, or `None` when the type declares no underlying scalar.
	fn raw_value(&self) -> Option<Scalar>;
}

/// Struct-like value with a registered field table.
pub trait Composite {
	/// Declared type name used for default file naming.
	fn declared_name() -> &'static str
	where
		Self: Sized,
	{
		short_type_name(std::any::type_name::<Self>())
	}

	/// Direct fields in declaration order.
	fn fields(&self) -> Vec<FieldDescriptor<'_>>;
}

/// Ordered collection addressed by position.
pub trait Sequence {
	/// Number of elements.
	fn len(&self) -> usize;

	/// Element at `index`.
	fn element(&self, index: usize) -> Option<&dyn Reflect>;

	/// Whether the sequence has no elements.
	fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

/// Associative collection with primitive keys.
pub trait Mapping {
	/// Entries as rendered key plus value.
	fn entries(&self) -> Vec<(String, &dyn Reflect)>;
}

/// Primitive key type usable in a [`Mapping`].
pub trait MappingKey {
	/// Key as it appears in the mapped tree.
	fn key_string(&self) -> String;
}

/// One registered field of a composite.
#[derive(Clone, Copy)]
pub struct FieldDescriptor<'a> {
	/// Field name as it appears in output.
	pub name: &'static str,
	/// Field value.
	pub value: &'a dyn Reflect,
	/// Field is declared with an optional wrapper.
	pub optional: bool,
}

impl<'a> FieldDescriptor<'a> {
	/// Describe `value` under `name`.
	pub fn new(name: &'static str, value: &'a dyn Reflect) -> Self {
		Self {
			name,
			value,
			optional: value.as_optional().is_some(),
		}
	}
}

impl std::fmt::Debug for FieldDescriptor<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("FieldDescriptor").field("name", &self.name).field("optional", &self.optional).finish_non_exhaustive()
	}
}

/// Strip module path and generic arguments from a `std::any::type_name` string.
pub fn short_type_name(full: &str) -> &str {
	let base = full.split('<').next().unwrap_or(full);
	base.rsplit("::").next().unwrap_or(base)
}

macro_rules! reflect_signed {
	($($ty:ty),*) => {$(
		impl Reflect for $ty {
			fn as_primitive(&self) -> Primitive<'_> {
				Primitive::I64(i64::from(*self))
			}
		}
	)*};
}

macro_rules! reflect_unsigned {
	($($ty:ty),*) => {$(
		impl Reflect for $ty {
			fn as_primitive(&self) -> Primitive<'_> {
				Primitive::U64(u64::from(*self))
			}
		}
	)*};
}

reflect_signed!(i8, i16, i32, i64);
reflect_unsigned!(u8, u16, u32, u64);

impl Reflect for isize {
	fn as_primitive(&self) -> Primitive<'_> {
		Primitive::I64(*self as i64)
	}
}

impl Reflect for usize {
	fn as_primitive(&self) -> Primitive<'_> {
		Primitive::U64(*self as u64)
	}
}

impl Reflect for bool {
	fn as_primitive(&self) -> Primitive<'_> {
		Primitive::Bool(*self)
	}
}

impl Reflect for f32 {
	fn as_primitive(&self) -> Primitive<'_> {
		Primitive::F64(f64::from(*self))
	}
}

impl Reflect for f64 {
	fn as_primitive(&self) -> Primitive<'_> {
		Primitive::F64(*self)
	}
}

impl Reflect for str {
	fn as_primitive(&self) -> Primitive<'_> {
		Primitive::Str(self)
	}
}

impl Reflect for String {
	fn as_primitive(&self) -> Primitive<'_> {
		Primitive::Str(self)
	}
}

impl Reflect for Blob {
	fn as_primitive(&self) -> Primitive<'_> {
		Primitive::Bytes(&self.0)
	}
}

impl Reflect for Timestamp {
	fn as_primitive(&self) -> Primitive<'_> {
		Primitive::Timestamp(*self)
	}
}

impl Reflect for Point {
	fn as_primitive(&self) -> Primitive<'_> {
		Primitive::Point(*self)
	}
}

impl Reflect for Size {
	fn as_primitive(&self) -> Primitive<'_> {
		Primitive::Size(*self)
	}
}

impl Reflect for Rect {
	fn as_primitive(&self) -> Primitive<'_> {
		Primitive::Rect(*self)
	}
}

impl<T: Reflect> Reflect for Option<T> {
	fn as_optional(&self) -> Option<Option<&dyn Reflect>> {
		Some(self.as_ref().map(|inner| inner as &dyn Reflect))
	}
}

macro_rules! reflect_forward {
	($($ptr:ident),*) => {$(
		impl<T: Reflect + ?Sized> Reflect for $ptr<T> {
			fn as_enumerated(&self) -> Option<&dyn Enumerated> {
				(**self).as_enumerated()
			}

			fn as_composite(&self) -> Option<&dyn Composite> {
				(**self).as_composite()
			}

			fn as_sequence(&self) -> Option<&dyn Sequence> {
				(**self).as_sequence()
			}

			fn as_mapping(&self) -> Option<&dyn Mapping> {
				(**self).as_mapping()
			}

			fn as_optional(&self) -> Option<Option<&dyn Reflect>> {
				(**self).as_optional()
			}

			fn as_primitive(&self) -> Primitive<'_> {
				(**self).as_primitive()
			}
		}
	)*};
}

reflect_forward!(Box, Rc, Arc);

impl<T: Reflect + ?Sized> Reflect for &T {
	fn as_enumerated(&self) -> Option<&dyn Enumerated> {
		(**self).as_enumerated()
	}

	fn as_composite(&self) -> Option<&dyn Composite> {
		(**self).as_composite()
	}

	fn as_sequence(&self) -> Option<&dyn Sequence> {
		(**self).as_sequence()
	}

	fn as_mapping(&self) -> Option<&dyn Mapping> {
		(**self).as_mapping()
	}

	fn as_optional(&self) -> Option<Option<&dyn Reflect>> {
		(**self).as_optional()
	}

	fn as_primitive(&self) -> Primitive<'_> {
		(**self).as_primitive()
	}
}

impl<T: Reflect> Sequence for Vec<T> {
	fn len(&self) -> usize {
		Vec::len(self)
	}

	fn element(&self, index: usize) -> Option<&dyn Reflect> {
		self.get(index).map(|item| item as &dyn Reflect)
	}
}

impl<T: Reflect> Reflect for Vec<T> {
	fn as_sequence(&self) -> Option<&dyn Sequence> {
		Some(self)
	}
}

impl<T: Reflect> Sequence for VecDeque<T> {
	fn len(&self) -> usize {
		VecDeque::len(self)
	}

	fn element(&self, index: usize) -> Option<&dyn Reflect> {
		self.get(index).map(|item| item as &dyn Reflect)
	}
}

impl<T: Reflect> Reflect for VecDeque<T> {
	fn as_sequence(&self) -> Option<&dyn Sequence> {
		Some(self)
	}
}

impl<T: Reflect, const N: usize> Sequence for [T; N] {
	fn len(&self) -> usize {
		N
	}

	fn element(&self, index: usize) -> Option<&dyn Reflect> {
		self.get(index).map(|item| item as &dyn Reflect)
	}
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
	fn as_sequence(&self) -> Option<&dyn Sequence> {
		Some(self)
	}
}

impl<K: MappingKey, V: Reflect, S> Mapping for HashMap<K, V, S> {
	fn entries(&self) -> Vec<(String, &dyn Reflect)> {
		self.iter().map(|(key, value)| (key.key_string(), value as &dyn Reflect)).collect()
	}
}

impl<K: MappingKey, V: Reflect, S> Reflect for HashMap<K, V, S> {
	fn as_mapping(&self) -> Option<&dyn Mapping> {
		Some(self)
	}
}

impl<K: MappingKey, V: Reflect> Mapping for BTreeMap<K, V> {
	fn entries(&self) -> Vec<(String, &dyn Reflect)> {
		self.iter().map(|(key, value)| (key.key_string(), value as &dyn Reflect)).collect()
	}
}

impl<K: MappingKey, V: Reflect> Reflect for BTreeMap<K, V> {
	fn as_mapping(&self) -> Option<&dyn Mapping> {
		Some(self)
	}
}

impl MappingKey for String {
	fn key_string(&self) -> String {
		self.clone()
	}
}

impl MappingKey for &str {
	fn key_string(&self) -> String {
		(*self).to_owned()
	}
}

impl MappingKey for Box<str> {
	fn key_string(&self) -> String {
		self.to_string()
	}
}

impl MappingKey for char {
	fn key_string(&self) -> String {
		self.to_string()
	}
}

macro_rules! mapping_key_display {
	($($ty:ty),*) => {$(
		impl MappingKey for $ty {
			fn key_string(&self) -> String {
				self.to_string()
			}
		}
	)*};
}

mapping_key_display!(bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests;
