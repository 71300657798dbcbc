use crate::mirror::reflect::{Composite, Mapping, Primitive, Reflect, Sequence};
use crate::mirror::value::Scalar;

/// Structural kind of a runtime value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Kind {
	/// Leaf value passed to the scalar conversions.
	Scalar,
	/// Optional wrapper; carries the wrapped value's kind when present.
	Optional(Option<Box<Kind>>),
	/// Closed enumeration.
	Enumerated,
	/// Struct-like value with registered fields.
	Composite,
	/// Ordered collection.
	Sequence,
	/// Keyed collection.
	Mapping,
}

impl Kind {
	/// Stable lowercase label.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Scalar => "scalar",
			Self::Optional(_) => "optional",
			Self::Enumerated => "enumerated",
			Self::Composite => "composite",
			Self::Sequence => "sequence",
			Self::Mapping => "mapping",
		}
	}
}

/// Kind of a value after optional unwrapping, with the accessor it was
/// classified through.
pub enum Specified<'a> {
	/// Absent optional; the field or element is omitted.
	Null,
	/// Leaf value.
	Scalar(Primitive<'a>),
	/// Enumeration with its raw discriminant, if it has one.
	Enumerated(Option<Scalar>),
	/// Struct-like value.
	Composite(&'a dyn Composite),
	/// Ordered collection.
	Sequence(&'a dyn Sequence),
	/// Keyed collection.
	Mapping(&'a dyn Mapping),
}

impl Specified<'_> {
	/// Kind this value was classified as.
	pub fn kind(&self) -> Kind {
		match self {
			Self::Null => Kind::Optional(None),
			Self::Scalar(_) => Kind::Scalar,
			Self::Enumerated(_) => Kind::Enumerated,
			Self::Composite(_) => Kind::Composite,
			Self::Sequence(_) => Kind::Sequence,
			Self::Mapping(_) => Kind::Mapping,
		}
	}
}

/// Classify a value by the capabilities its type exposes.
///
/// Optional wrappers are reported as such. Everything else is checked in
/// priority order: enumeration with a raw value, composite, sequence,
/// mapping, then scalar. An enumeration without a raw value only wins when
/// no other capability applies.
pub fn classify(value: &dyn Reflect) -> Kind {
	if let Some(inner) = value.as_optional() {
		return Kind::Optional(inner.map(|item| Box::new(classify(item))));
	}
	classify_unwrapped(value)
}

/// Unwrap optionals and classify the remaining value.
///
/// Nested optionals collapse: `Some(None)` is as absent as `None`.
pub fn specify(value: &dyn Reflect) -> Specified<'_> {
	if let Some(inner) = value.as_optional() {
		return match inner {
			Some(item) => specify(item),
			None => Specified::Null,
		};
	}

	if let Some(enumerated) = value.as_enumerated()
		&& let Some(raw) = enumerated.raw_value()
	{
		return Specified::Enumerated(Some(raw));
	}
	if let Some(composite) = value.as_composite() {
		return Specified::Composite(composite);
	}
	if let Some(sequence) = value.as_sequence() {
		return Specified::Sequence(sequence);
	}
	if let Some(mapping) = value.as_mapping() {
		return Specified::Mapping(mapping);
	}
	if value.as_enumerated().is_some() {
		return Specified::Enumerated(None);
	}
	Specified::Scalar(value.as_primitive())
}

fn classify_unwrapped(value: &dyn Reflect) -> Kind {
	match specify(value) {
		Specified::Null => Kind::Optional(None),
		other => other.kind(),
	}
}
