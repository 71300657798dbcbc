//! Declarative registration macros standing in for runtime field reflection.

/// Implement [`Reflect`](crate::mirror::Reflect) and
/// [`Composite`](crate::mirror::Composite) for a struct from its field list.
///
/// Each field is registered under its identifier, or under the literal
/// given with `as`. Names should match the type's serde names so both
/// encoding strategies agree.
///
/// ```
/// use mirrorsave::composite;
///
/// #[derive(serde::Serialize)]
/// struct User {
/// 	id: u64,
/// 	#[serde(rename = "avatarFile", skip_serializing_if = "Option::is_none")]
/// 	avatar_file: Option<String>,
/// }
///
/// composite!(User { id, avatar_file as "avatarFile" });
/// ```
#[macro_export]
macro_rules! composite {
	($ty:ident { $($field:ident $(as $name:literal)?),* $(,)? }) => {
		impl $crate::mirror::Reflect for $ty {
			fn as_composite(&self) -> ::core::option::Option<&dyn $crate::mirror::Composite> {
				::core::option::Option::Some(self)
			}
		}

		impl $crate::mirror::Composite for $ty {
			fn declared_name() -> &'static str
			where
				Self: Sized,
			{
				stringify!($ty)
			}

			fn fields(&self) -> ::std::vec::Vec<$crate::mirror::FieldDescriptor<'_>> {
				::std::vec![$($crate::mirror::FieldDescriptor::new($crate::__field_name!($field $(, $name)?), &self.$field)),*]
			}
		}
	};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __field_name {
	($field:ident) => {
		stringify!($field)
	};
	($field:ident, $name:literal) => {
		$name
	};
}

/// Declare a field-less enum backed by integer discriminants.
///
/// Generates `raw`/`from_raw`, the [`Enumerated`](crate::mirror::Enumerated)
/// and [`Reflect`](crate::mirror::Reflect) impls, and serde impls that encode
/// the raw value, so both encoding strategies agree.
///
/// ```
/// mirrorsave::raw_enum! {
/// 	#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// 	pub enum Gender: u8 {
/// 		Male = 0,
/// 		Female = 1,
/// 	}
/// }
///
/// assert_eq!(Gender::Female.raw(), 1);
/// assert_eq!(Gender::from_raw(0), Some(Gender::Male));
/// ```
#[macro_export]
macro_rules! raw_enum {
	(
		$(#[$meta:meta])*
		$vis:vis enum $name:ident : $raw:ty {
			$($(#[$vmeta:meta])* $variant:ident = $value:literal),+ $(,)?
		}
	) => {
		$(#[$meta])*
		$vis enum $name {
			$($(#[$vmeta])* $variant),+
		}

		impl $name {
			/// Raw discriminant.
			pub fn raw(&self) -> $raw {
				match self {
					$(Self::$variant => $value),+
				}
			}

			/// Case for a raw discriminant.
			pub fn from_raw(raw: $raw) -> ::core::option::Option<Self> {
				$(if raw == $value {
					return ::core::option::Option::Some(Self::$variant);
				})+
				::core::option::Option::None
			}
		}

		impl $crate::mirror::Enumerated for $name {
			fn raw_value(&self) -> ::core::option::Option<$crate::mirror::Scalar> {
				::core::option::Option::Some($crate::mirror::Scalar::from(self.raw()))
			}
		}

		impl $crate::mirror::Reflect for $name {
			fn as_enumerated(&self) -> ::core::option::Option<&dyn $crate::mirror::Enumerated> {
				::core::option::Option::Some(self)
			}
		}

		impl $crate::__serde::Serialize for $name {
			fn serialize<S: $crate::__serde::Serializer>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error> {
				$crate::__serde::Serialize::serialize(&self.raw(), serializer)
			}
		}

		impl<'de> $crate::__serde::Deserialize<'de> for $name {
			fn deserialize<D: $crate::__serde::Deserializer<'de>>(deserializer: D) -> ::core::result::Result<Self, D::Error> {
				let raw = <$raw as $crate::__serde::Deserialize>::deserialize(deserializer)?;
				Self::from_raw(raw).ok_or_else(|| {
					<D::Error as $crate::__serde::de::Error>::custom(::std::format!("unknown {} raw value {}", stringify!($name), raw))
				})
			}
		}
	};
}
