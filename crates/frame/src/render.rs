// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use tracing::{instrument, trace};
use unicode_width::UnicodeWidthStr;

use crate::{Frame, Result};

const ELLIPSIS: &str = "...";

fn escape_control_chars(s: &str) -> String {
	s.replace('\n', "\\n").replace('\t', "\\t")
}

/// One displayed column: its three header lines and its displayed cells.
struct Column {
	header: [String; 3],
	cells: Vec<String>,
}

impl Column {
	fn width(&self) -> usize {
		self.header.iter().chain(self.cells.iter()).map(|s| s.width()).max().unwrap_or(0)
	}
}

fn write_line<'a>(out: &mut String, widths: &[usize], parts: impl Iterator<Item = &'a str>) {
	out.push('|');
	for (part, w) in parts.zip(widths) {
		let pad = w - 2 - part.width();
		out.push_str(&format!(" {part}{:pad$} |", ""));
	}
	out.push('\n');
}

impl Frame {
	/// Renders the frame as a bordered text table showing at most `max_width`
	/// columns and `max_length` data rows.
	///
	/// Fields beyond the limit are folded into one trailing `...+N field...`
	/// column; rows beyond it are replaced by one row of `...`.
	#[instrument(level = "trace", skip(self), fields(frame = %self.name))]
	pub fn string_table(&self, max_width: usize, max_length: usize) -> Result<String> {
		let rows = self.rows()?;

		let (shown_fields, folded) = if self.fields.len() > max_width {
			let shown = max_width.saturating_sub(1);
			(shown, self.fields.len() - shown)
		} else {
			(self.fields.len(), 0)
		};

		let (shown_rows, truncated) = if rows > max_length && max_length > 0 {
			(max_length - 1, true)
		} else {
			(rows.min(max_length), false)
		};

		trace!(folded, hidden_rows = rows - shown_rows, "rendering frame");

		let mut columns: Vec<Column> = self.fields[..shown_fields]
			.iter()
			.map(|field| Column {
				header: [
					escape_control_chars(&format!("Name: {}", field.display_name())),
					escape_control_chars(&format!("Labels: {}", field.labels)),
					format!("Type: {}", field.data.type_name()),
				],
				cells: (0..shown_rows).map(|row| escape_control_chars(&field.data.as_string(row))).collect(),
			})
			.collect();

		if folded > 0 {
			columns.push(Column {
				header: [format!("...+{folded} field..."), String::new(), String::new()],
				cells: vec![ELLIPSIS.to_string(); shown_rows],
			});
		}

		if truncated {
			for column in &mut columns {
				column.cells.push(ELLIPSIS.to_string());
			}
		}

		let mut out = format!("Name: {}\nDimensions: {} Fields by {} Rows\n", self.name, self.fields.len(), rows);
		if columns.is_empty() {
			return Ok(out);
		}

		// Add padding
		let widths: Vec<usize> = columns.iter().map(|c| c.width() + 2).collect();

		let mut sep = String::from("+");
		for w in &widths {
			sep.push_str(&"-".repeat(*w));
			sep.push('+');
		}
		sep.push('\n');

		out.push_str(&sep);
		for line in 0..3 {
			write_line(&mut out, &widths, columns.iter().map(|c| c.header[line].as_str()));
		}
		out.push_str(&sep);

		let displayed = columns.first().map_or(0, |c| c.cells.len());
		for row in 0..displayed {
			write_line(&mut out, &widths, columns.iter().map(|c| c.cells[row].as_str()));
		}
		out.push_str(&sep);

		Ok(out)
	}
}

impl Display for Frame {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self.string_table(usize::MAX, usize::MAX) {
			Ok(table) => f.write_str(&table),
			Err(err) => write!(f, "{err}"),
		}
	}
}
