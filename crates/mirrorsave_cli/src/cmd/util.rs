use std::path::Path;

use serde::Serialize;

/// Print a payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: Serialize>(payload: &T) -> mirrorsave::mirror::Result<()> {
	println!("{}", serde_json::to_string_pretty(payload)?);
	Ok(())
}

/// Render a path for display and JSON payloads.
pub(crate) fn display_path(path: &Path) -> String {
	path.display().to_string()
}

/// Human-readable byte count.
pub(crate) fn human_len(len: u64) -> String {
	const UNITS: [&str; 3] = ["KiB", "MiB", "GiB"];
	if len < 1024 {
		return format!("{len} B");
	}
	let mut value = len as f64 / 1024.0;
	let mut unit = 0;
	while value >= 1024.0 && unit + 1 < UNITS.len() {
		value /= 1024.0;
		unit += 1;
	}
	format!("{value:.1} {}", UNITS[unit])
}

#[cfg(test)]
mod tests {
	use super::human_len;

	#[test]
	fn lengths_scale_units() {
		assert_eq!(human_len(12), "12 B");
		assert_eq!(human_len(1536), "1.5 KiB");
		assert_eq!(human_len(3 * 1024 * 1024), "3.0 MiB");
	}
}
