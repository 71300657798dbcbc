use std::collections::BTreeMap;

use tracing::trace;

use crate::mirror::classify::{Specified, specify};
use crate::mirror::exclusion::{EXCLUSION_FIELD, Exclusions};
use crate::mirror::leaf::Blob;
use crate::mirror::reflect::{Composite, Mapping, Primitive, Reflect, Sequence};
use crate::mirror::value::{Scalar, StructuralValue};

/// Fold a composite into a [`StructuralValue::Composite`].
///
/// Fields named by the composite's own exclusion list are skipped. The
/// exclusion-list field itself is never emitted, even when its value is not a
/// well-formed list. Fields that cannot be represented (absent
/// optionals, enumerations without a raw value, opaque scalars) are omitted.
pub fn map_composite(composite: &dyn Composite) -> StructuralValue {
	let exclusions = Exclusions::lookup(composite);
	map_composite_with(composite, &exclusions)
}

pub(crate) fn map_composite_with(composite: &dyn Composite, exclusions: &Exclusions) -> StructuralValue {
	let mut out = BTreeMap::new();
	for field in composite.fields() {
		if field.name == EXCLUSION_FIELD {
			continue;
		}
		if exclusions.is_excluded(field.name) {
			trace!(field = field.name, "skipping excluded field");
			continue;
		}

		match map_value(field.value) {
			Some(value) => {
				out.insert(field.name.to_owned(), value);
			}
			None => trace!(field = field.name, optional = field.optional, "omitting field without a representable value"),
		}
	}
	StructuralValue::Composite(out)
}

/// Fold an ordered collection, preserving element order.
pub fn map_sequence(sequence: &dyn Sequence) -> StructuralValue {
	let mut items = Vec::with_capacity(sequence.len());
	for index in 0..sequence.len() {
		if let Some(value) = sequence.element(index).and_then(map_value) {
			items.push(value);
		}
	}
	StructuralValue::Sequence(items)
}

/// Fold a keyed collection. Keys pass through as rendered by the key type.
pub fn map_mapping(mapping: &dyn Mapping) -> StructuralValue {
	let mut entries = BTreeMap::new();
	for (key, value) in mapping.entries() {
		if let Some(value) = map_value(value) {
			entries.insert(key, value);
		}
	}
	StructuralValue::Mapping(entries)
}

/// Per-value dispatch shared by composites, sequences and mappings.
///
/// Returns `None` when the value has no representation and must be omitted.
pub fn map_value(value: &dyn Reflect) -> Option<StructuralValue> {
	match specify(value) {
		Specified::Null => None,
		Specified::Scalar(primitive) => map_primitive(primitive),
		Specified::Enumerated(raw) => raw.map(StructuralValue::Scalar),
		Specified::Composite(composite) => Some(map_composite(composite)),
		Specified::Sequence(sequence) => Some(map_sequence(sequence)),
		Specified::Mapping(mapping) => Some(map_mapping(mapping)),
	}
}

fn map_primitive(primitive: Primitive<'_>) -> Option<StructuralValue> {
	let value = match primitive {
		Primitive::Bool(value) => scalar(Scalar::Bool(value)),
		Primitive::I64(value) => scalar(Scalar::I64(value)),
		Primitive::U64(value) => scalar(Scalar::U64(value)),
		Primitive::F64(value) => scalar(Scalar::F64(value)),
		Primitive::Str(value) => scalar(Scalar::String(value.to_owned())),
		Primitive::Bytes(bytes) => scalar(Scalar::String(Blob::from(bytes).to_text())),
		Primitive::Timestamp(timestamp) => scalar(Scalar::F64(timestamp.reference_seconds())),
		Primitive::Point(point) => floats(&[point.x, point.y]),
		Primitive::Size(size) => floats(&[size.width, size.height]),
		Primitive::Rect(rect) => floats(&[rect.origin.x, rect.origin.y, rect.size.width, rect.size.height]),
		Primitive::Opaque => return None,
	};
	Some(value)
}

fn scalar(value: Scalar) -> StructuralValue {
	StructuralValue::Scalar(value)
}

fn floats(values: &[f64]) -> StructuralValue {
	StructuralValue::Sequence(values.iter().map(|value| scalar(Scalar::F64(*value))).collect())
}
