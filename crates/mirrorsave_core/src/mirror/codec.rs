use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::mirror::exclusion::Exclusions;
use crate::mirror::mapper::{map_composite, map_composite_with};
use crate::mirror::reflect::Composite;
use crate::mirror::strategy::EncodingStrategy;
use crate::mirror::value::StructuralValue;
use crate::mirror::{MirrorError, Result};

const ARCHIVE_MAGIC: [u8; 4] = *b"MSAR";
const ARCHIVE_VERSION: u8 = 1;
const ARCHIVE_HEADER_LEN: usize = ARCHIVE_MAGIC.len() + 1;

/// JSON output formatting.
#[derive(Debug, Clone, Copy)]
pub struct JsonOptions {
	/// Indent nested values; otherwise emit compact JSON.
	pub pretty: bool,
}

impl Default for JsonOptions {
	fn default() -> Self {
		Self { pretty: true }
	}
}

impl JsonOptions {
	/// Single-line output.
	pub fn compact() -> Self {
		Self { pretty: false }
	}
}

/// Encode a composite to JSON with default options.
pub fn encode_json<T: Composite + Serialize>(value: &T) -> Result<Vec<u8>> {
	encode_json_with(value, &JsonOptions::default())
}

/// Encode a composite to JSON, choosing the strategy from its exclusion list.
///
/// Both strategies emit keys in sorted order and drop `null` object members
/// and sequence elements, so absent optionals never appear on either path.
pub fn encode_json_with<T: Composite + Serialize>(value: &T, options: &JsonOptions) -> Result<Vec<u8>> {
	write_json(strategy_value(value, "json")?, options)
}

/// Encode an already mapped tree to JSON.
pub fn encode_tree_json(tree: &StructuralValue, options: &JsonOptions) -> Result<Vec<u8>> {
	write_json(prune_nulls(tree.to_json()), options)
}

/// Decode JSON into a typed value through serde.
pub fn decode_json<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
	Ok(serde_json::from_slice(bytes)?)
}

/// Encode a composite as an XML property list.
///
/// The strategy is selected exactly as for JSON and the same pruned value is
/// written, so both text formats carry the same keys.
pub fn encode_plist<T: Composite + Serialize>(value: &T) -> Result<Vec<u8>> {
	write_plist(&strategy_value(value, "plist")?)
}

/// Encode an already mapped tree as an XML property list.
pub fn encode_tree_plist(tree: &StructuralValue) -> Result<Vec<u8>> {
	write_plist(&prune_nulls(tree.to_json()))
}

/// Read a property list back into a tree.
pub fn decode_plist_tree(bytes: &[u8]) -> Result<StructuralValue> {
	Ok(StructuralValue::from_json(&read_plist(bytes)?))
}

/// Decode a property list into a typed value.
///
/// The list is read into a JSON value and handed to serde, the only typed
/// decode path.
pub fn decode_plist<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
	Ok(serde_json::from_value(read_plist(bytes)?)?)
}

/// Map a composite and archive the resulting tree.
pub fn encode_archive<T: Composite>(value: &T) -> Result<Vec<u8>> {
	debug!(type_name = T::declared_name(), "encoding archive");
	encode_archive_tree(&map_composite(value))
}

/// Archive a mapped tree: magic, version byte, then the bincode payload.
pub fn encode_archive_tree(tree: &StructuralValue) -> Result<Vec<u8>> {
	let payload = bincode::serde::encode_to_vec(tree, bincode::config::standard())?;
	let mut out = Vec::with_capacity(ARCHIVE_HEADER_LEN + payload.len());
	out.extend_from_slice(&ARCHIVE_MAGIC);
	out.push(ARCHIVE_VERSION);
	out.extend_from_slice(&payload);
	Ok(out)
}

/// Read the mapped tree back out of an archive.
pub fn decode_archive_tree(bytes: &[u8]) -> Result<StructuralValue> {
	let mut magic = [0_u8; 4];
	let head = bytes.get(..ARCHIVE_MAGIC.len()).unwrap_or(bytes);
	magic[..head.len()].copy_from_slice(head);
	if magic != ARCHIVE_MAGIC {
		return Err(MirrorError::ArchiveMagic { magic });
	}

	let version = bytes.get(ARCHIVE_MAGIC.len()).copied().ok_or(MirrorError::ArchiveMagic { magic })?;
	if version != ARCHIVE_VERSION {
		return Err(MirrorError::ArchiveVersion { version });
	}

	let payload = &bytes[ARCHIVE_HEADER_LEN..];
	let (tree, read) = bincode::serde::decode_from_slice::<StructuralValue, _>(payload, bincode::config::standard())?;
	if read != payload.len() {
		return Err(MirrorError::ArchiveTrailingBytes { extra: payload.len() - read });
	}
	Ok(tree)
}

/// Decode an archive into a typed value.
///
/// The archived tree is re-encoded as JSON and handed to serde, the only
/// typed decode path.
pub fn decode_archive<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
	let tree = decode_archive_tree(bytes)?;
	Ok(serde_json::from_value(tree.to_json())?)
}

fn strategy_value<T: Composite + Serialize>(value: &T, output: &'static str) -> Result<serde_json::Value> {
	let exclusions = Exclusions::lookup(value);
	let strategy = EncodingStrategy::for_exclusions(&exclusions);
	debug!(type_name = T::declared_name(), strategy = strategy.as_str(), output, "encoding");

	let json = match strategy {
		EncodingStrategy::Mapper => map_composite_with(value, &exclusions).to_json(),
		EncodingStrategy::Native => serde_json::to_value(value)?,
	};
	Ok(prune_nulls(json))
}

fn write_plist(value: &serde_json::Value) -> Result<Vec<u8>> {
	let mut out = Vec::new();
	plist::to_writer_xml(&mut out, value)?;
	Ok(out)
}

fn read_plist(bytes: &[u8]) -> Result<serde_json::Value> {
	Ok(plist::from_reader(std::io::Cursor::new(bytes))?)
}

fn write_json(value: serde_json::Value, options: &JsonOptions) -> Result<Vec<u8>> {
	let bytes = if options.pretty {
		serde_json::to_vec_pretty(&value)?
	} else {
		serde_json::to_vec(&value)?
	};
	Ok(bytes)
}

fn prune_nulls(value: serde_json::Value) -> serde_json::Value {
	match value {
		serde_json::Value::Object(entries) => {
			serde_json::Value::Object(entries.into_iter().filter(|(_, item)| !item.is_null()).map(|(key, item)| (key, prune_nulls(item))).collect())
		}
		serde_json::Value::Array(items) => serde_json::Value::Array(items.into_iter().filter(|item| !item.is_null()).map(prune_nulls).collect()),
		other => other,
	}
}
