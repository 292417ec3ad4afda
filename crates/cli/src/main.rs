//! Chronopick command-line host.
//!
//! Opens a picker session, feeds it the given picks in order, and prints the
//! outcome of every session that closes:
//!
//! ```text
//! $ chronopick --mode date-and-time --initial 2024-01-01 2024-06-15 14:30
//! 2024-06-15T14:30:00
//! ```

use std::path::PathBuf;

use anyhow::Context;
use chronopick_picker::{Mode, PickerConfig, PickerSession, PointInTime};
use clap::Parser;
use tracing::info;

mod script;

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "chronopick")]
#[command(about = "Drive a staged date/time picker from the command line")]
struct Args {
	/// Picker configuration file (TOML)
	#[arg(short, long, value_name = "PATH")]
	config: Option<PathBuf>,

	/// Picker mode: date-only, time-only or date-and-time
	#[arg(short, long)]
	mode: Option<Mode>,

	/// Starting value, YYYY-MM-DD or YYYY-MM-DDTHH:MM[:SS]
	#[arg(short, long, value_name = "VALUE")]
	initial: Option<PointInTime>,

	/// Verbose logging
	#[arg(short, long)]
	verbose: bool,

	/// Picks fed to the picker in order; `cancel` or `-` dismisses it
	#[arg(value_name = "SELECTION")]
	selections: Vec<String>,
}

fn main() -> anyhow::Result<()> {
	let args = Args::parse();

	let subscriber = tracing_subscriber::fmt()
		.with_writer(std::io::stderr)
		.with_max_level(if args.verbose {
			tracing::Level::DEBUG
		} else {
			tracing::Level::INFO
		})
		.finish();
	tracing::subscriber::set_global_default(subscriber)?;

	let mut config = match &args.config {
		Some(path) => PickerConfig::load(path).with_context(|| format!("loading {}", path.display()))?,
		None => PickerConfig::default(),
	};
	if let Some(mode) = args.mode {
		config.picker.mode = mode;
	}
	if let Some(initial) = args.initial {
		config.picker.initial = Some(initial);
	}

	let mut session = PickerSession::from_config(&config);
	info!(mode = %session.mode(), initial = %session.value(), picks = args.selections.len(), "Starting picker");

	for report in script::run(&mut session, &args.selections)? {
		println!("{report}");
	}

	Ok(())
}
