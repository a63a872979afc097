// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::with_container;
use crate::{ColumnData, util::BitVec};

impl ColumnData {
	/// Keeps the elements whose bit is set in `mask`, in their original order.
	pub fn filter(&mut self, mask: &BitVec) {
		with_container!(self, c => c.filter(mask))
	}
}
