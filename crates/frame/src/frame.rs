// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::ops::Index;

use serde::{Deserialize, Serialize};
use tframe_type::{Error, IntoValue, Type};
use tracing::debug;

use crate::{Field, Result};

/// A named table of equal-length fields.
///
/// Field lengths are not checked on construction; every operation that needs
/// the row count goes through [`Frame::rows`], which reports a mismatch as
/// [`Error::Schema`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
	pub name: String,
	pub fields: Vec<Field>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub meta: Option<FrameMeta>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub warnings: Vec<Warning>,
}

/// Metadata a data source attaches to the frames it produced.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameMeta {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub executed_query_string: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub custom: Option<serde_json::Value>,
}

/// A recoverable issue met while building a frame's data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
	pub details: String,
	pub message: String,
}

impl Index<usize> for Frame {
	type Output = Field;

	fn index(&self, index: usize) -> &Self::Output {
		self.fields.index(index)
	}
}

impl Frame {
	pub fn new(name: impl Into<String>, fields: impl IntoIterator<Item = Field>) -> Self {
		Self {
			name: name.into(),
			fields: fields.into_iter().collect(),
			meta: None,
			warnings: Vec::new(),
		}
	}

	pub fn with_meta(mut self, meta: FrameMeta) -> Self {
		self.meta = Some(meta);
		self
	}

	/// The number of rows: the length of the first field, or 0 without fields.
	pub fn rows(&self) -> Result<usize> {
		let Some(first) = self.fields.first() else {
			return Ok(0);
		};
		let expected = first.len();
		for (idx, field) in self.fields.iter().enumerate().skip(1) {
			if field.len() != expected {
				return Err(Error::Schema {
					field: idx,
					name: field.name.clone(),
					expected,
					actual: field.len(),
				});
			}
		}
		Ok(expected)
	}

	pub fn field(&self, index: usize) -> Result<&Field> {
		self.fields.get(index).ok_or_else(|| Error::field_out_of_range(index, self.fields.len()))
	}

	pub fn field_by_name(&self, name: &str) -> Option<&Field> {
		self.fields.iter().find(|f| f.name == name)
	}

	/// Indices of the fields whose kind is one of `types`, in field order.
	pub fn type_indices(&self, types: &[Type]) -> Vec<usize> {
		self.fields.iter().enumerate().filter(|(_, f)| types.contains(&f.get_type())).map(|(i, _)| i).collect()
	}

	pub fn append_warning(&mut self, details: impl Into<String>, message: impl Into<String>) {
		let warning = Warning {
			details: details.into(),
			message: message.into(),
		};
		debug!(frame = %self.name, message = %warning.message, "frame warning");
		self.warnings.push(warning);
	}

	/// Appends one row, one value per field. Nothing is appended unless every
	/// value fits its field.
	pub fn append_row<I>(&mut self, values: I) -> Result<()>
	where
		I: IntoIterator,
		I::Item: IntoValue,
	{
		let rows = self.rows()?;
		let values: Vec<_> = values.into_iter().map(IntoValue::into_value).collect();
		if values.len() != self.fields.len() {
			return Err(Error::type_mismatch(
				format!("{} values", self.fields.len()),
				format!("{} values", values.len()),
			));
		}

		for (field, value) in self.fields.iter().zip(&values) {
			field.data.check(value)?;
		}
		for (field, value) in self.fields.iter_mut().zip(values) {
			field.push(value)?;
		}
		debug_assert!(self.fields.iter().all(|f| f.len() == rows + 1));
		Ok(())
	}

	/// Same name, meta and field schema, zero rows.
	pub fn empty_copy(&self) -> Self {
		Self {
			name: self.name.clone(),
			fields: self.fields.iter().map(Field::empty_copy).collect(),
			meta: self.meta.clone(),
			warnings: Vec::new(),
		}
	}
}
