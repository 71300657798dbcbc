use std::fmt::Write;

use mirrorsave::mirror::{Scalar, StructuralValue};

/// Output truncation limits for rendered trees.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Maximum number of Unicode scalar values printed for strings.
	pub max_string_len: usize,
	/// Maximum number of elements or members printed per container.
	pub max_items: usize,
	/// Maximum nesting depth before containers are summarized.
	pub max_depth: u32,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_string_len: 200,
			max_items: 32,
			max_depth: 8,
		}
	}
}

/// Render a tree as indented text, one value or member per line.
pub fn render_tree(value: &StructuralValue, options: PrintOptions) -> String {
	let mut out = String::new();
	render_value(&mut out, value, 0, 0, options);
	out
}

fn render_value(out: &mut String, value: &StructuralValue, indent: usize, depth: u32, options: PrintOptions) {
	let pad = " ".repeat(indent);
	match value {
		StructuralValue::Null => line(out, &pad, "null"),
		StructuralValue::Scalar(scalar) => line(out, &pad, &render_scalar(scalar, options)),
		StructuralValue::Sequence(items) => {
			if depth >= options.max_depth {
				line(out, &pad, &format!("[... {} items]", items.len()));
				return;
			}
			line(out, &pad, "[");
			for item in items.iter().take(options.max_items) {
				render_value(out, item, indent + 2, depth + 1, options);
			}
			if items.len() > options.max_items {
				line(out, &pad, &format!("  ... {} more", items.len() - options.max_items));
			}
			line(out, &pad, "]");
		}
		StructuralValue::Mapping(entries) | StructuralValue::Composite(entries) => {
			let quote_keys = matches!(value, StructuralValue::Mapping(_));
			if depth >= options.max_depth {
				line(out, &pad, &format!("{{ ... {} members }}", entries.len()));
				return;
			}
			line(out, &pad, "{");
			for (key, item) in entries.iter().take(options.max_items) {
				let label = if quote_keys { format!("{key:?}") } else { key.clone() };
				if matches!(item, StructuralValue::Sequence(_) | StructuralValue::Mapping(_) | StructuralValue::Composite(_)) {
					line(out, &pad, &format!("  {label} ="));
					render_value(out, item, indent + 4, depth + 1, options);
				} else {
					let _ = write!(out, "{pad}  {label} = ");
					render_value(out, item, 0, depth + 1, options);
				}
			}
			if entries.len() > options.max_items {
				line(out, &pad, &format!("  ... {} more members", entries.len() - options.max_items));
			}
			line(out, &pad, "}");
		}
	}
}

fn render_scalar(scalar: &Scalar, options: PrintOptions) -> String {
	match scalar {
		Scalar::Bool(value) => value.to_string(),
		Scalar::I64(value) => value.to_string(),
		Scalar::U64(value) => value.to_string(),
		Scalar::F64(value) => value.to_string(),
		Scalar::String(value) => format!("\"{}\"", truncate(value, options.max_string_len)),
	}
}

fn truncate(text: &str, max_chars: usize) -> String {
	match text.char_indices().nth(max_chars) {
		Some((cut, _)) => format!("{}...", &text[..cut]),
		None => text.to_owned(),
	}
}

fn line(out: &mut String, pad: &str, text: &str) {
	out.push_str(pad);
	out.push_str(text);
	out.push('\n');
}
