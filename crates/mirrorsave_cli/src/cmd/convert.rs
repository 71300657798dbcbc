use std::fs;
use std::path::PathBuf;

use mirrorsave::mirror::{Format, JsonOptions, encode_archive_tree, encode_tree_json, encode_tree_plist, load_tree};
use tracing::info;

#[derive(Clone, Copy, clap::ValueEnum)]
pub enum Target {
	Json,
	Plist,
	Archive,
}

impl From<Target> for Format {
	fn from(value: Target) -> Self {
		match value {
			Target::Json => Format::Json,
			Target::Plist => Format::Plist,
			Target::Archive => Format::Archive,
		}
	}
}

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	#[arg(long, value_enum)]
	pub to: Target,
	#[arg(long)]
	pub out: Option<PathBuf>,
	#[arg(long)]
	pub compact: bool,
}

/// Re-encode a stored file in another format.
///
/// Without `--out` the result lands next to the input with the target
/// format's extension.
pub fn run(args: Args) -> mirrorsave::mirror::Result<()> {
	let target = Format::from(args.to);
	let (source, tree) = load_tree(&args.file)?;

	let bytes = match target {
		Format::Json => {
			let options = if args.compact { JsonOptions::compact() } else { JsonOptions::default() };
			encode_tree_json(&tree, &options)?
		}
		Format::Plist => encode_tree_plist(&tree)?,
		Format::Archive => encode_archive_tree(&tree)?,
	};

	let out = args.out.unwrap_or_else(|| args.file.with_extension(target.extension()));
	fs::write(&out, &bytes)?;
	info!(from = source.as_str(), to = target.as_str(), path = %out.display(), "converted");

	println!("wrote: {} ({} bytes)", out.display(), bytes.len());
	Ok(())
}
