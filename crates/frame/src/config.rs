// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

/// Display metadata attached to a field. The table renderer only reads
/// `title`; everything else is carried for consumers.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldConfig {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub unit: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub decimals: Option<u16>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub min: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub max: Option<f64>,
	/// Text shown by consumers in place of a missing value.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub no_value: Option<String>,
	/// Free-form rendering hints, opaque to this crate.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub custom: Option<serde_json::Value>,
}

impl FieldConfig {
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
		self.unit = Some(unit.into());
		self
	}

	pub fn with_decimals(mut self, decimals: u16) -> Self {
		self.decimals = Some(decimals);
		self
	}
}
