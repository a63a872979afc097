// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Named, labeled, typed columnar frames: construction, row filtering and
//! bounded text rendering.

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use config::FieldConfig;
pub use field::Field;
pub use frame::{Frame, FrameMeta, Warning};
pub use labels::Labels;
pub use tframe_type::{
	BoxError, ColumnData, Error, FromValue, IndexTarget, IntoValue, NullableType, Result, TIME_FORMAT, Type, Value,
	util::BitVec,
};

mod config;
mod field;
mod filter;
mod frame;
mod labels;
mod render;
