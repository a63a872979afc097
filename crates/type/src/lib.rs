// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Value kinds, typed column storage and the shared error type of tframe.

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use column::ColumnData;
pub use error::{BoxError, Error, IndexTarget};
pub use value::{FromValue, GetType, IntoValue, NullableType, TIME_FORMAT, Type, Value};

mod column;
pub mod error;
pub mod util;
pub mod value;

pub type Result<T> = std::result::Result<T, Error>;
