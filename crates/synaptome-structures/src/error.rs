// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Error types for structure-level operations.

use thiserror::Error;

/// Errors raised by table structure operations.
#[derive(Debug, Error)]
pub enum StructureError {
    /// A derived label column must have exactly one value per synapse record.
    #[error("label column '{column}' has {actual} values but the table has {expected} records")]
    ColumnLengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },
}
