use crate::mirror::exclusion::Exclusions;
use crate::mirror::reflect::Composite;

/// Encode path chosen for one composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingStrategy {
	/// Fold through the structural mapper, then encode the tree.
	Mapper,
	/// Hand the typed value to serde directly.
	Native,
}

impl EncodingStrategy {
	/// Pick the strategy from the composite's exclusion declaration.
	pub fn select(composite: &dyn Composite) -> Self {
		Self::for_exclusions(&Exclusions::lookup(composite))
	}

	/// Any declaration, even an empty one, routes through the mapper.
	pub fn for_exclusions(exclusions: &Exclusions) -> Self {
		if exclusions.is_declared() { Self::Mapper } else { Self::Native }
	}

	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Mapper => "mapper",
			Self::Native => "native",
		}
	}
}
