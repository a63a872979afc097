// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

mod bitvec;

pub use bitvec::{BitVec, BitVecIter};
