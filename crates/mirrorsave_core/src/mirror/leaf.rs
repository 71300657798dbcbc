use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Unix timestamp of the reference epoch, 2001-01-01T00:00:00Z.
pub const REFERENCE_EPOCH_UNIX_SECONDS: i64 = 978_307_200;

/// Opaque byte blob.
///
/// Encodes as UTF-8 text when the bytes are valid UTF-8, otherwise as
/// standard padded base64.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Blob(pub Vec<u8>);

impl Blob {
	/// Text form used in JSON output.
	pub fn to_text(&self) -> String {
		match std::str::from_utf8(&self.0) {
			Ok(text) => text.to_owned(),
			Err(_) => STANDARD.encode(&self.0),
		}
	}

	/// Rebuild a blob from its text form.
	///
	/// Text that is valid base64 of bytes that are not valid UTF-8 is decoded;
	/// anything else is taken as literal UTF-8 content. The text form does not
	/// record which branch produced it, so a UTF-8 blob whose content happens
	/// to be such base64 (e.g. `b"//4A"`) reads back as the decoded bytes.
	pub fn from_text(text: &str) -> Self {
		if let Ok(decoded) = STANDARD.decode(text)
			&& std::str::from_utf8(&decoded).is_err()
		{
			return Self(decoded);
		}
		Self(text.as_bytes().to_vec())
	}
}

impl From<Vec<u8>> for Blob {
	fn from(value: Vec<u8>) -> Self {
		Self(value)
	}
}

impl From<&[u8]> for Blob {
	fn from(value: &[u8]) -> Self {
		Self(value.to_vec())
	}
}

impl Serialize for Blob {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(&self.to_text())
	}
}

impl<'de> Deserialize<'de> for Blob {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let text = String::deserialize(deserializer)?;
		Ok(Self::from_text(&text))
	}
}

/// Instant encoded as float seconds since [`REFERENCE_EPOCH_UNIX_SECONDS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub DateTime<Utc>);

impl Timestamp {
	/// The reference epoch itself.
	pub fn reference_epoch() -> Self {
		Self(DateTime::from_timestamp(REFERENCE_EPOCH_UNIX_SECONDS, 0).unwrap_or_default())
	}

	/// Build from seconds relative to the reference epoch.
	pub fn from_reference_seconds(seconds: f64) -> Option<Self> {
		if !seconds.is_finite() {
			return None;
		}
		let whole = seconds.floor();
		let nanos = ((seconds - whole) * 1e9).round() as u32;
		let (whole, nanos) = if nanos >= 1_000_000_000 { (whole + 1.0, 0) } else { (whole, nanos) };
		let unix = (whole as i64).checked_add(REFERENCE_EPOCH_UNIX_SECONDS)?;
		DateTime::from_timestamp(unix, nanos).map(Self)
	}

	/// Seconds elapsed since the reference epoch; negative before it.
	pub fn reference_seconds(&self) -> f64 {
		let whole = self.0.timestamp() - REFERENCE_EPOCH_UNIX_SECONDS;
		whole as f64 + f64::from(self.0.timestamp_subsec_nanos()) / 1e9
	}
}

impl From<DateTime<Utc>> for Timestamp {
	fn from(value: DateTime<Utc>) -> Self {
		Self(value)
	}
}

impl Serialize for Timestamp {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_f64(self.reference_seconds())
	}
}

impl<'de> Deserialize<'de> for Timestamp {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let seconds = f64::deserialize(deserializer)?;
		Self::from_reference_seconds(seconds).ok_or_else(|| serde::de::Error::custom(format!("timestamp out of range: {seconds}")))
	}
}

/// 2D point, encoded as `[x, y]`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
	/// Horizontal coordinate.
	pub x: f64,
	/// Vertical coordinate.
	pub y: f64,
}

impl Point {
	/// Point at `(x, y)`.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

/// 2D extent, encoded as `[width, height]`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
	/// Horizontal extent.
	pub width: f64,
	/// Vertical extent.
	pub height: f64,
}

impl Size {
	/// Size of `width` by `height`.
	pub const fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}
}

/// Axis-aligned rectangle, encoded as `[x, y, width, height]`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
	/// Origin corner.
	pub origin: Point,
	/// Extent from the origin.
	pub size: Size,
}

impl Rect {
	/// Rectangle from raw components.
	pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
		Self {
			origin: Point::new(x, y),
			size: Size::new(width, height),
		}
	}
}

impl Serialize for Point {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		[self.x, self.y].serialize(serializer)
	}
}

impl<'de> Deserialize<'de> for Point {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let [x, y] = <[f64; 2]>::deserialize(deserializer)?;
		Ok(Self { x, y })
	}
}

impl Serialize for Size {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		[self.width, self.height].serialize(serializer)
	}
}

impl<'de> Deserialize<'de> for Size {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let [width, height] = <[f64; 2]>::deserialize(deserializer)?;
		Ok(Self { width, height })
	}
}

impl Serialize for Rect {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		[self.origin.x, self.origin.y, self.size.width, self.size.height].serialize(serializer)
	}
}

impl<'de> Deserialize<'de> for Rect {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let [x, y, width, height] = <[f64; 4]>::deserialize(deserializer)?;
		Ok(Self::new(x, y, width, height))
	}
}
