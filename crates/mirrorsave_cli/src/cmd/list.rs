use std::path::PathBuf;

use mirrorsave::mirror::Store;
use serde::Serialize;

use crate::cmd::util::{display_path, emit_json, human_len};

#[derive(clap::Args)]
pub struct Args {
	pub dir: PathBuf,
	#[arg(long)]
	pub json: bool,
}

#[derive(Serialize)]
struct ListJson {
	root: String,
	files: Vec<FileJson>,
}

#[derive(Serialize)]
struct FileJson {
	file_name: String,
	name: String,
	format: &'static str,
	len: u64,
}

/// List stored files of known formats under a directory.
pub fn run(args: Args) -> mirrorsave::mirror::Result<()> {
	let store = Store::new(args.dir);
	let files = store.list()?;

	if args.json {
		let payload = ListJson {
			root: display_path(store.root()),
			files: files
				.into_iter()
				.map(|item| FileJson {
					file_name: item.file_name,
					name: item.name,
					format: item.format.as_str(),
					len: item.len,
				})
				.collect(),
		};
		return emit_json(&payload);
	}

	println!("root: {}", store.root().display());
	println!("files: {}", files.len());
	for item in &files {
		println!("  {:<32} {:<8} {}", item.file_name, item.format.as_str(), human_len(item.len));
	}
	Ok(())
}
