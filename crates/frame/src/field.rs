// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};
use tframe_type::{ColumnData, Type, Value, util::BitVec};

use crate::{FieldConfig, Labels, Result};

/// A named, labeled column.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Field {
	pub name: String,
	#[serde(default, skip_serializing_if = "Labels::is_empty")]
	pub labels: Labels,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub config: Option<FieldConfig>,
	pub data: ColumnData,
}

impl Field {
	/// A field holding `values`, e.g. `Vec<f64>` for a float column or
	/// `Vec<Option<i64>>` for a nullable integer column.
	pub fn new(name: impl Into<String>, values: impl Into<ColumnData>) -> Self {
		Self {
			name: name.into(),
			labels: Labels::new(),
			config: None,
			data: values.into(),
		}
	}

	pub fn with_labels(mut self, labels: impl Into<Labels>) -> Self {
		self.labels = labels.into();
		self
	}

	pub fn with_config(mut self, config: FieldConfig) -> Self {
		self.config = Some(config);
		self
	}

	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	pub fn get_type(&self) -> Type {
		self.data.get_type()
	}

	pub fn is_nullable(&self) -> bool {
		self.data.is_nullable()
	}

	/// The configured title if there is one, otherwise the field name.
	pub fn display_name(&self) -> &str {
		self.config.as_ref().and_then(|c| c.title.as_deref()).filter(|t| !t.is_empty()).unwrap_or(&self.name)
	}

	pub fn at(&self, index: usize) -> Result<Value> {
		self.data.get(index)
	}

	pub fn push(&mut self, value: Value) -> Result<()> {
		self.data.push(value)
	}

	pub fn push_none(&mut self) -> Result<()> {
		self.data.push_none()
	}

	pub fn set(&mut self, index: usize, value: Value) -> Result<()> {
		self.data.set(index, value)
	}

	/// A copy of this field, same name, labels, config and kind, holding
	/// only the elements selected by `mask`.
	pub fn filtered(&self, mask: &BitVec) -> Self {
		let mut result = self.clone();
		result.data.filter(mask);
		result
	}

	/// A copy of this field with the same schema and no elements.
	pub fn empty_copy(&self) -> Self {
		Self {
			name: self.name.clone(),
			labels: self.labels.clone(),
			config: self.config.clone(),
			data: self.data.empty_like(),
		}
	}
}
