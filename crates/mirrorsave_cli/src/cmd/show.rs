use std::path::PathBuf;

use mirrorsave::mirror::load_tree;
use serde::Serialize;

use crate::cmd::print::{PrintOptions, render_tree};
use crate::cmd::util::{display_path, emit_json};

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	#[arg(long)]
	pub json: bool,
	#[arg(long = "max-depth")]
	pub max_depth: Option<u32>,
	#[arg(long = "max-items")]
	pub max_items: Option<usize>,
}

#[derive(Serialize)]
struct ShowJson {
	path: String,
	format: &'static str,
	kind: &'static str,
	value: serde_json::Value,
}

/// Decode a stored file into its tree and print it.
pub fn run(args: Args) -> mirrorsave::mirror::Result<()> {
	let (format, tree) = load_tree(&args.file)?;

	if args.json {
		return emit_json(&ShowJson {
			path: display_path(&args.file),
			format: format.as_str(),
			kind: tree.kind_str(),
			value: tree.to_json(),
		});
	}

	let mut options = PrintOptions::default();
	if let Some(depth) = args.max_depth {
		options.max_depth = depth;
	}
	if let Some(items) = args.max_items {
		options.max_items = items;
	}

	println!("path: {}", args.file.display());
	println!("format: {}", format.as_str());
	print!("{}", render_tree(&tree, options));
	Ok(())
}
