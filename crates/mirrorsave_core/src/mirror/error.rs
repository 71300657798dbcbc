use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, MirrorError>;

/// Failures surfaced by the codec and storage layers.
///
/// The structural mapper itself never fails; unrepresentable data is omitted.
#[derive(Debug, Error)]
pub enum MirrorError {
	/// Filesystem failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// JSON encode or decode failure.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Property list encode or decode failure.
	#[error("plist: {0}")]
	Plist(#[from] plist::Error),
	/// Archive encode failure.
	#[error("archive encode: {0}")]
	ArchiveEncode(#[from] bincode::error::EncodeError),
	/// Archive decode failure.
	#[error("archive decode: {0}")]
	ArchiveDecode(#[from] bincode::error::DecodeError),
	/// Archive did not start with the expected magic.
	#[error("not an archive (magic={magic:?})")]
	ArchiveMagic {
		/// First up-to-4 bytes of the input.
		magic: [u8; 4],
	},
	/// Archive written by an unknown format version.
	#[error("unsupported archive version {version}")]
	ArchiveVersion {
		/// Version byte found in the header.
		version: u8,
	},
	/// Bytes remained after the archived tree.
	#[error("archive has {extra} trailing bytes")]
	ArchiveTrailingBytes {
		/// Unconsumed byte count.
		extra: usize,
	},
	/// The platform reports no per-user data directory.
	#[error("no data directory available")]
	NoDataDir,
	/// File extension does not name a known format.
	#[error("unknown file format: {path}")]
	UnknownFormat {
		/// Offending path.
		path: String,
	},
	/// Logical name cannot be used as a file name.
	#[error("invalid file name: {name:?}")]
	InvalidFileName {
		/// Offending name.
		name: String,
	},
	/// Requested stored file does not exist.
	#[error("stored file not found: {path}")]
	NotFound {
		/// Missing path.
		path: String,
	},
}
