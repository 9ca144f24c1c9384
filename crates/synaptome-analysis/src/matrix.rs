// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Connectivity matrix: dense cross-tabulation of key pairs.
//!
//! Rows are the sorted distinct values of the row-key sequence, columns the
//! sorted distinct values of the column-key sequence, and cell (i, j) counts
//! the positions where both keys occur together. Keys are either raw
//! [`NeuronId`]s or resolved cell-type labels, so the matrix is generic over
//! its key type.
//!
//! Matrices are built fresh per query; there are no incremental updates.

use std::collections::BTreeSet;
use std::hash::Hash;

use ahash::AHashMap;
use ndarray::Array2;
use tracing::debug;

use crate::error::AnalysisError;

/// A dense cross-tabulation of (row key, column key) pair counts.
///
/// Entries are non-negative counts; pairs never seen in the input are zero.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectivityMatrix<K> {
    row_keys: Vec<K>,
    col_keys: Vec<K>,
    counts: Array2<u64>,
}

impl<K> ConnectivityMatrix<K>
where
    K: Clone + Ord + Hash,
{
    /// Cross-tabulate two aligned key sequences.
    ///
    /// `row_keys[i]` and `col_keys[i]` describe the same underlying synapse
    /// record, so the sequences must be the same length. Empty input yields
    /// a 0×0 matrix.
    pub fn from_pairs(row_keys: &[K], col_keys: &[K]) -> Result<Self, AnalysisError> {
        if row_keys.len() != col_keys.len() {
            return Err(AnalysisError::LengthMismatch {
                rows: row_keys.len(),
                cols: col_keys.len(),
            });
        }

        let distinct_rows: BTreeSet<&K> = row_keys.iter().collect();
        let distinct_cols: BTreeSet<&K> = col_keys.iter().collect();
        let rows: Vec<K> = distinct_rows.into_iter().cloned().collect();
        let cols: Vec<K> = distinct_cols.into_iter().cloned().collect();

        let row_index: AHashMap<&K, usize> =
            rows.iter().enumerate().map(|(i, k)| (k, i)).collect();
        let col_index: AHashMap<&K, usize> =
            cols.iter().enumerate().map(|(i, k)| (k, i)).collect();

        let mut counts = Array2::<u64>::zeros((rows.len(), cols.len()));
        for (row_key, col_key) in row_keys.iter().zip(col_keys.iter()) {
            counts[[row_index[row_key], col_index[col_key]]] += 1;
        }

        debug!(
            pairs = row_keys.len(),
            rows = rows.len(),
            cols = cols.len(),
            "built connectivity matrix"
        );
        Ok(Self {
            row_keys: rows,
            col_keys: cols,
            counts,
        })
    }

    /// Sorted distinct row keys.
    pub fn row_keys(&self) -> &[K] {
        &self.row_keys
    }

    /// Sorted distinct column keys.
    pub fn col_keys(&self) -> &[K] {
        &self.col_keys
    }

    /// The dense count matrix, row-major over (row key, column key).
    pub fn counts(&self) -> &Array2<u64> {
        &self.counts
    }

    /// Count for a (row key, column key) pair. Unseen keys and pairs are zero.
    pub fn count(&self, row_key: &K, col_key: &K) -> u64 {
        let row = self.row_keys.binary_search(row_key);
        let col = self.col_keys.binary_search(col_key);
        match (row, col) {
            (Ok(i), Ok(j)) => self.counts[[i, j]],
            _ => 0,
        }
    }

    /// Total count per row key, aligned with [`row_keys`](Self::row_keys).
    pub fn row_sums(&self) -> Vec<u64> {
        self.counts.rows().into_iter().map(|row| row.sum()).collect()
    }

    /// Total count per column key, aligned with [`col_keys`](Self::col_keys).
    pub fn col_sums(&self) -> Vec<u64> {
        self.counts
            .columns()
            .into_iter()
            .map(|col| col.sum())
            .collect()
    }

    /// Total count over the whole matrix; equals the input pair count.
    pub fn total(&self) -> u64 {
        self.counts.sum()
    }
}
