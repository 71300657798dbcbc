#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "mirrorsave", about = "Inspect and convert mirrorsave files")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	List(cmd::list::Args),
	Show(cmd::show::Args),
	Convert(cmd::convert::Args),
}

fn main() {
	init_tracing();
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> mirrorsave::mirror::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::List(args) => cmd::list::run(args),
		Commands::Show(args) => cmd::show::run(args),
		Commands::Convert(args) => cmd::convert::run(args),
	}
}

fn init_tracing() {
	let filter = EnvFilter::try_from_env("MIRRORSAVE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.without_time()
		.init();
}
