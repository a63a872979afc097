// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use tframe_type::{BoxError, Error, Value, util::BitVec};
use tracing::{debug, instrument};

use crate::{Frame, Result};

impl Frame {
	/// Returns a new frame holding only the rows for which `predicate`
	/// accepts the value of field `field_idx`. Row order is kept.
	///
	/// A missing element is passed as [`Value::None`]. The first predicate
	/// error aborts the filter and is returned as [`Error::Predicate`].
	#[instrument(level = "debug", skip(self, predicate), fields(frame = %self.name))]
	pub fn filter_rows_by_field<F, E>(&self, field_idx: usize, mut predicate: F) -> Result<Frame>
	where
		F: FnMut(Value) -> std::result::Result<bool, E>,
		E: Into<BoxError>,
	{
		let field = self.field(field_idx)?;
		let rows = self.rows()?;

		let mut mask = BitVec::with_capacity(rows);
		for row in 0..rows {
			let value = field.at(row)?;
			let keep = predicate(value).map_err(|err| Error::Predicate {
				row,
				source: err.into(),
			})?;
			mask.push(keep);
		}

		debug!(rows, retained = mask.count_ones(), "filtered frame");

		Ok(Frame {
			name: self.name.clone(),
			fields: self.fields.iter().map(|f| f.filtered(&mask)).collect(),
			meta: self.meta.clone(),
			warnings: self.warnings.clone(),
		})
	}
}
