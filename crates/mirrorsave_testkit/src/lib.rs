//! Shared test helpers for workspace crates.

use std::process::Output;

/// Parse encoder output, panicking with the text when it is not JSON.
pub fn parse_json(bytes: &[u8]) -> serde_json::Value {
	serde_json::from_slice(bytes).unwrap_or_else(|err| panic!("invalid json ({err}): {}", String::from_utf8_lossy(bytes)))
}

/// Assert a command succeeded and parse its stdout as JSON.
pub fn success_json(output: &Output) -> serde_json::Value {
	assert!(
		output.status.success(),
		"command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	parse_json(&output.stdout)
}
