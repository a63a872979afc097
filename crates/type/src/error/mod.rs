// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	error,
	fmt::{self, Display, Formatter},
};

pub type BoxError = Box<dyn error::Error + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexTarget {
	Field,
	Row,
}

impl Display for IndexTarget {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			IndexTarget::Field => f.write_str("field"),
			IndexTarget::Row => f.write_str("row"),
		}
	}
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("field {field} ({name:?}) has {actual} rows, expected {expected}")]
	Schema {
		field: usize,
		name: String,
		expected: usize,
		actual: usize,
	},

	#[error("{target} index {index} out of range [0, {len})")]
	OutOfRange {
		target: IndexTarget,
		index: usize,
		len: usize,
	},

	#[error("type mismatch: expected {expected}, got {actual}")]
	TypeMismatch {
		expected: String,
		actual: String,
	},

	#[error("filter predicate failed at row {row}: {source}")]
	Predicate {
		row: usize,
		#[source]
		source: BoxError,
	},

	#[error("invalid column data: {reason}")]
	InvalidData {
		reason: String,
	},

	#[error("invalid labels {input:?}: {reason}")]
	LabelParse {
		input: String,
		reason: String,
	},
}

impl Error {
	pub fn field_out_of_range(index: usize, len: usize) -> Self {
		Error::OutOfRange {
			target: IndexTarget::Field,
			index,
			len,
		}
	}

	pub fn row_out_of_range(index: usize, len: usize) -> Self {
		Error::OutOfRange {
			target: IndexTarget::Row,
			index,
			len,
		}
	}

	pub fn invalid_data(reason: impl Into<String>) -> Self {
		Error::InvalidData {
			reason: reason.into(),
		}
	}

	pub fn type_mismatch(expected: impl Display, actual: impl Display) -> Self {
		Error::TypeMismatch {
			expected: expected.to_string(),
			actual: actual.to_string(),
		}
	}
}
