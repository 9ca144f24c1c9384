// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Error types for analysis operations.

use synaptome_structures::StructureError;
use thiserror::Error;

/// Errors raised by analysis operations.
///
/// Annotation lookup misses are not errors; the resolver absorbs them with
/// the sentinel label. These variants cover structural misuse only.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Cross-tabulation needs one column key for every row key.
    #[error("length mismatch between row keys ({rows}) and column keys ({cols})")]
    LengthMismatch { rows: usize, cols: usize },

    /// A table-level invariant was violated while appending derived columns.
    #[error(transparent)]
    Structure(#[from] StructureError),
}
