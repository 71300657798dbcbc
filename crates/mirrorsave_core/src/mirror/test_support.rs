use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::mirror::{Blob, Composite, Enumerated, FieldDescriptor, Point, Rect, Reflect, Scalar, Size, Timestamp};
use crate::{composite, raw_enum};

raw_enum! {
	#[derive(Debug, Clone, Copy, PartialEq, Eq)]
	pub(crate) enum Gender: i64 {
		Male = 0,
		Female = 1,
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct User {
	pub id: u64,
	pub username: String,
	pub email: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub avatar_file: Option<String>,
}

composite!(User { id, username, email, avatar_file as "avatarFile" });

pub(crate) fn superman() -> User {
	User {
		id: 11,
		username: "superman".to_owned(),
		email: "superman@x.org".to_owned(),
		avatar_file: None,
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AdditionalInfo {
	pub first_name: String,
	#[serde(default)]
	pub last_name: String,
	pub gender: Gender,
	#[serde(skip)]
	pub excluded_properties: Vec<String>,
}

composite!(AdditionalInfo {
	first_name as "firstName",
	last_name as "lastName",
	gender,
	excluded_properties as "excludedProperties",
});

pub(crate) fn clark() -> AdditionalInfo {
	AdditionalInfo {
		first_name: "Clark".to_owned(),
		last_name: "Kent".to_owned(),
		gender: Gender::Male,
		excluded_properties: vec!["lastName".to_owned()],
	}
}

/// Parent whose exclusion list names a field its nested user also has, and
/// which has a field its nested info excludes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Team {
	pub name: String,
	#[serde(default)]
	pub username: String,
	pub last_name: String,
	pub owner: User,
	pub info: AdditionalInfo,
	#[serde(skip)]
	pub excluded_properties: Vec<String>,
}

composite!(Team {
	name,
	username,
	last_name as "lastName",
	owner,
	info,
	excluded_properties as "excludedProperties",
});

pub(crate) fn justice_league() -> Team {
	Team {
		name: "Justice League".to_owned(),
		username: "jl".to_owned(),
		last_name: "League".to_owned(),
		owner: superman(),
		info: clark(),
		excluded_properties: vec!["username".to_owned()],
	}
}

/// Scalar-only settings without an exclusion list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct PlainSettings {
	pub volume: u32,
	pub name: String,
	pub enabled: bool,
	pub ratio: f64,
	pub offset: i32,
}

composite!(PlainSettings { volume, name, enabled, ratio, offset });

/// Same fields as [`PlainSettings`] with an empty exclusion list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct DeclaredSettings {
	pub volume: u32,
	pub name: String,
	pub enabled: bool,
	pub ratio: f64,
	pub offset: i32,
	#[serde(skip)]
	pub excluded_properties: Vec<String>,
}

composite!(DeclaredSettings {
	volume,
	name,
	enabled,
	ratio,
	offset,
	excluded_properties as "excludedProperties",
});

pub(crate) fn plain_settings() -> PlainSettings {
	PlainSettings {
		volume: 7,
		name: "main".to_owned(),
		enabled: true,
		ratio: 0.25,
		offset: -3,
	}
}

pub(crate) fn declared_settings() -> DeclaredSettings {
	DeclaredSettings {
		volume: 7,
		name: "main".to_owned(),
		enabled: true,
		ratio: 0.25,
		offset: -3,
		excluded_properties: Vec::new(),
	}
}

/// Every leaf and collection shape in one composite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Gallery {
	pub title: Blob,
	pub thumbnail: Blob,
	pub created: Timestamp,
	pub anchor: Point,
	pub extent: Size,
	pub frame: Rect,
	pub tags: Vec<String>,
	pub members: Vec<User>,
	pub scores: BTreeMap<String, i32>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub cover: Option<User>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub caption: Option<String>,
}

composite!(Gallery {
	title,
	thumbnail,
	created,
	anchor,
	extent,
	frame,
	tags,
	members,
	scores,
	cover,
	caption,
});

pub(crate) fn gallery() -> Gallery {
	Gallery {
		title: Blob(b"hi".to_vec()),
		thumbnail: Blob(vec![0xff, 0xfe, 0x00]),
		created: Timestamp::from_reference_seconds(86_400.5).unwrap_or_else(Timestamp::reference_epoch),
		anchor: Point::new(1.0, 2.0),
		extent: Size::new(3.0, 4.0),
		frame: Rect::new(1.0, 2.0, 3.0, 4.0),
		tags: vec!["b".to_owned(), "a".to_owned(), "c".to_owned()],
		members: vec![superman()],
		scores: BTreeMap::from([("x".to_owned(), 1), ("y".to_owned(), -2)]),
		cover: Some(superman()),
		caption: None,
	}
}

/// Enumeration that declares no underlying scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mood {
	Calm,
}

impl Enumerated for Mood {
	fn raw_value(&self) -> Option<Scalar> {
		None
	}
}

impl Reflect for Mood {
	fn as_enumerated(&self) -> Option<&dyn Enumerated> {
		Some(self)
	}
}

/// String-backed enumeration implemented by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Role {
	Admin,
	Guest,
}

impl Enumerated for Role {
	fn raw_value(&self) -> Option<Scalar> {
		Some(Scalar::from(match self {
			Self::Admin => "admin",
			Self::Guest => "guest",
		}))
	}
}

impl Reflect for Role {
	fn as_enumerated(&self) -> Option<&dyn Enumerated> {
		Some(self)
	}
}

/// Value with no JSON-compatible form.
pub(crate) struct Handle;

impl Reflect for Handle {}

/// Enumeration that also exposes fields; `raw` toggles its discriminant.
pub(crate) struct Tagged {
	pub raw: Option<i64>,
	pub label: String,
}

impl Enumerated for Tagged {
	fn raw_value(&self) -> Option<Scalar> {
		self.raw.map(Scalar::from)
	}
}

impl Composite for Tagged {
	fn fields(&self) -> Vec<FieldDescriptor<'_>> {
		vec![FieldDescriptor::new("label", &self.label)]
	}
}

impl Reflect for Tagged {
	fn as_enumerated(&self) -> Option<&dyn Enumerated> {
		Some(self)
	}

	fn as_composite(&self) -> Option<&dyn Composite> {
		Some(self)
	}
}

/// Composite holding the odd shapes above.
pub(crate) struct Oddities {
	pub mood: Mood,
	pub role: Role,
	pub handle: Handle,
	pub moods: Vec<Mood>,
	pub maybe: Vec<Option<u8>>,
	pub nested: Option<Option<u8>>,
}

composite!(Oddities { mood, role, handle, moods, maybe, nested });

pub(crate) fn oddities() -> Oddities {
	Oddities {
		mood: Mood::Calm,
		role: Role::Admin,
		handle: Handle,
		moods: vec![Mood::Calm, Mood::Calm],
		maybe: vec![Some(1), None, Some(3)],
		nested: Some(None),
	}
}

/// Composite whose exclusion-list field has the wrong type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Misconfigured {
	pub id: u32,
	pub secret: String,
	#[serde(skip)]
	pub excluded_properties: String,
}

composite!(Misconfigured {
	id,
	secret,
	excluded_properties as "excludedProperties",
});

/// Composite whose exclusion-list field is misspelled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Misspelled {
	pub id: u32,
	pub secret: String,
	pub excluded_propertys: Vec<String>,
}

composite!(Misspelled {
	id,
	secret,
	excluded_propertys as "excludedPropertys",
});
