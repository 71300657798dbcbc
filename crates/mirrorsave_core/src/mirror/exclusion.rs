use crate::mirror::classify::{Specified, specify};
use crate::mirror::reflect::{Composite, Primitive};

/// Field name that declares a composite's exclusion list.
pub const EXCLUSION_FIELD: &str = "excludedProperties";

/// Exclusion declaration of one composite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exclusions {
	/// No usable exclusion-list field.
	Undeclared,
	/// Exclusion-list field present but empty.
	DeclaredEmpty,
	/// Exclusion-list field naming at least one field.
	Declared(Vec<String>),
}

impl Exclusions {
	/// Read the exclusion list from the composite's own direct fields.
	///
	/// The field must hold a sequence of strings. Any other shape, an absent
	/// optional, or a missing field reads as [`Exclusions::Undeclared`].
	pub fn lookup(composite: &dyn Composite) -> Self {
		let fields = composite.fields();
		let Some(field) = fields.iter().find(|field| field.name == EXCLUSION_FIELD) else {
			return Self::Undeclared;
		};

		let Specified::Sequence(sequence) = specify(field.value) else {
			return Self::Undeclared;
		};

		let mut names = Vec::with_capacity(sequence.len());
		for index in 0..sequence.len() {
			let Some(item) = sequence.element(index) else {
				return Self::Undeclared;
			};
			match specify(item) {
				Specified::Scalar(Primitive::Str(name)) => names.push(name.to_owned()),
				_ => return Self::Undeclared,
			}
		}

		if names.is_empty() { Self::DeclaredEmpty } else { Self::Declared(names) }
	}

	/// Whether an exclusion-list field was found, even an empty one.
	pub fn is_declared(&self) -> bool {
		!matches!(self, Self::Undeclared)
	}

	/// Declared names, empty unless [`Exclusions::Declared`].
	pub fn names(&self) -> &[String] {
		match self {
			Self::Declared(names) => names,
			Self::Undeclared | Self::DeclaredEmpty => &[],
		}
	}

	/// Exact, case-sensitive membership test.
	pub fn is_excluded(&self, name: &str) -> bool {
		self.names().iter().any(|item| item == name)
	}
}
