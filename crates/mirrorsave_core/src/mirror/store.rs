use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::mirror::codec::{
	JsonOptions, decode_archive, decode_archive_tree, decode_json, decode_plist, decode_plist_tree, encode_archive, encode_json_with, encode_plist,
};
use crate::mirror::reflect::Composite;
use crate::mirror::value::StructuralValue;
use crate::mirror::{MirrorError, Result};

/// On-disk file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
	/// UTF-8 JSON text.
	Json,
	/// XML property list.
	Plist,
	/// Binary archive of the mapped tree.
	Archive,
}

impl Format {
	/// All supported formats.
	pub const ALL: [Format; 3] = [Format::Json, Format::Plist, Format::Archive];

	/// File extension without the dot.
	pub fn extension(self) -> &'static str {
		match self {
			Self::Json => "json",
			Self::Plist => "plist",
			Self::Archive => "archive",
		}
	}

	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		self.extension()
	}

	/// Format named by an extension.
	pub fn from_extension(extension: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|format| format.extension() == extension)
	}

	/// Format named by a path's extension.
	pub fn from_path(path: &Path) -> Option<Self> {
		path.extension().and_then(|ext| ext.to_str()).and_then(Self::from_extension)
	}
}

/// One file found by [`Store::list`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
	/// File name including extension.
	pub file_name: String,
	/// Logical name (file stem).
	pub name: String,
	/// Format inferred from the extension.
	pub format: Format,
	/// Size in bytes.
	pub len: u64,
}

/// File store rooted at one directory.
#[derive(Debug, Clone)]
pub struct Store {
	root: PathBuf,
}

impl Store {
	/// Store rooted at `root`. The directory is created on first write.
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self { root: root.into() }
	}

	/// Store under the platform's per-user data directory.
	pub fn in_data_dir(app_name: &str) -> Result<Self> {
		validate_name(app_name)?;
		let base = dirs::data_dir().ok_or(MirrorError::NoDataDir)?;
		Ok(Self::new(base.join(app_name)))
	}

	/// Root directory.
	pub fn root(&self) -> &Path {
		&self.root
	}

	/// Path of `name` stored as `format`.
	pub fn path_for(&self, name: &str, format: Format) -> Result<PathBuf> {
		validate_name(name)?;
		Ok(self.root.join(format!("{name}.{}", format.extension())))
	}

	/// Save under the default name derived from the type.
	pub fn save<T: Composite + Serialize>(&self, value: &T, format: Format) -> Result<PathBuf> {
		self.save_as(value, &default_stem(T::declared_name()), format)
	}

	/// Save under an explicit logical name.
	pub fn save_as<T: Composite + Serialize>(&self, value: &T, name: &str, format: Format) -> Result<PathBuf> {
		let path = self.path_for(name, format)?;
		let bytes = match format {
			Format::Json => encode_json_with(value, &JsonOptions::default())?,
			Format::Plist => encode_plist(value)?,
			Format::Archive => encode_archive(value)?,
		};
		write_atomic(&path, &bytes)?;
		debug!(path = %path.display(), format = format.as_str(), len = bytes.len(), "saved");
		Ok(path)
	}

	/// Load from the default name derived from the type.
	pub fn load<T: Composite + DeserializeOwned>(&self, format: Format) -> Result<T> {
		self.load_from(&default_stem(T::declared_name()), format)
	}

	/// Load from an explicit logical name.
	pub fn load_from<T: DeserializeOwned>(&self, name: &str, format: Format) -> Result<T> {
		let path = self.path_for(name, format)?;
		let bytes = read_existing(&path)?;
		match format {
			Format::Json => decode_json(&bytes),
			Format::Plist => decode_plist(&bytes),
			Format::Archive => decode_archive(&bytes),
		}
	}

	/// Whether `name` is stored as `format`. Invalid names are never stored.
	pub fn exists(&self, name: &str, format: Format) -> bool {
		self.path_for(name, format).is_ok_and(|path| path.is_file())
	}

	/// Delete a stored file.
	pub fn remove(&self, name: &str, format: Format) -> Result<()> {
		let path = self.path_for(name, format)?;
		match fs::remove_file(&path) {
			Ok(()) => Ok(()),
			Err(err) if err.kind() == std::io::ErrorKind::NotFound => Err(MirrorError::NotFound {
				path: path.display().to_string(),
			}),
			Err(err) => Err(err.into()),
		}
	}

	/// Stored files of known formats, sorted by file name.
	///
	/// A root that does not exist yet lists as empty.
	pub fn list(&self) -> Result<Vec<StoredFile>> {
		let entries = match fs::read_dir(&self.root) {
			Ok(entries) => entries,
			Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
			Err(err) => return Err(err.into()),
		};

		let mut out = Vec::new();
		for entry in entries {
			let entry = entry?;
			let path = entry.path();
			let Some(format) = Format::from_path(&path) else {
				continue;
			};
			let metadata = entry.metadata()?;
			if !metadata.is_file() {
				continue;
			}
			let Some(file_name) = path.file_name().and_then(|item| item.to_str()) else {
				continue;
			};
			let name = path.file_stem().and_then(|item| item.to_str()).unwrap_or_default();
			out.push(StoredFile {
				file_name: file_name.to_owned(),
				name: name.to_owned(),
				format,
				len: metadata.len(),
			});
		}
		out.sort_by(|lhs, rhs| lhs.file_name.cmp(&rhs.file_name));
		Ok(out)
	}
}

/// Default file name for a composite type, e.g. `additional_info.json`.
pub fn default_file_name<T: Composite>(format: Format) -> String {
	format!("{}.{}", default_stem(T::declared_name()), format.extension())
}

/// Decode any stored file into a tree, picking the format from its extension.
pub fn load_tree(path: &Path) -> Result<(Format, StructuralValue)> {
	let format = Format::from_path(path).ok_or_else(|| MirrorError::UnknownFormat {
		path: path.display().to_string(),
	})?;
	let bytes = read_existing(path)?;
	let tree = match format {
		Format::Json => StructuralValue::from_json(&serde_json::from_slice(&bytes)?),
		Format::Plist => decode_plist_tree(&bytes)?,
		Format::Archive => decode_archive_tree(&bytes)?,
	};
	Ok((format, tree))
}

fn default_stem(type_name: &str) -> String {
	let mut out = String::with_capacity(type_name.len() + 4);
	let chars: Vec<char> = type_name.chars().collect();
	for (index, ch) in chars.iter().copied().enumerate() {
		if ch.is_uppercase() {
			let prev_lower = index > 0 && (chars[index - 1].is_lowercase() || chars[index - 1].is_ascii_digit());
			let next_lower = chars.get(index + 1).is_some_and(|next| next.is_lowercase());
			let prev_upper = index > 0 && chars[index - 1].is_uppercase();
			if prev_lower || (prev_upper && next_lower) {
				out.push('_');
			}
			out.extend(ch.to_lowercase());
		} else {
			out.push(ch);
		}
	}
	out
}

fn validate_name(name: &str) -> Result<()> {
	let invalid = name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\', '\0']);
	if invalid {
		return Err(MirrorError::InvalidFileName { name: name.to_owned() });
	}
	Ok(())
}

fn read_existing(path: &Path) -> Result<Vec<u8>> {
	match fs::read(path) {
		Ok(bytes) => Ok(bytes),
		Err(err) if err.kind() == std::io::ErrorKind::NotFound => Err(MirrorError::NotFound {
			path: path.display().to_string(),
		}),
		Err(err) => Err(err.into()),
	}
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent)?;
	}
	let mut tmp = path.as_os_str().to_owned();
	tmp.push(".tmp");
	let tmp = PathBuf::from(tmp);
	fs::write(&tmp, bytes)?;
	if let Err(err) = fs::rename(&tmp, path) {
		let _ = fs::remove_file(&tmp);
		return Err(err.into());
	}
	Ok(())
}

#[cfg(test)]
mod tests;
