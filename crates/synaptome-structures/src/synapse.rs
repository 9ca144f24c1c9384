// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! The synapse table: one row per detected synapse.
//!
//! ## Data Storage
//!
//! - **Records**: Stored in row order as loaded; never mutated after load
//! - **Label columns**: Derived cell-type labels appended in place, one value
//!   per record, aligned by position
//!
//! Appending label columns is the only in-place extension the table supports.
//! Everything else (filtering, aggregation, cross-tabulation) produces fresh
//! derived values and leaves the source rows untouched.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::StructureError;
use crate::ids::{NeuronId, Side, SynapseId};

/// A 3D position in dataset coordinates.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynapsePosition {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl SynapsePosition {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// One row of the synapse table: a single detected synaptic connection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynapseRecord {
    /// Unique id of this detected synapse
    pub synapse_id: SynapseId,

    /// Sending neuron (shared neuron-id space)
    pub pre_id: NeuronId,

    /// Receiving neuron (shared neuron-id space)
    pub post_id: NeuronId,

    /// Synaptic-cleft size score from the detection pipeline
    pub cleft_score: f32,

    /// 3D position of the presynaptic site
    pub pre_position: SynapsePosition,

    /// 3D position of the postsynaptic site
    pub post_position: SynapsePosition,

    /// Bookkeeping sub-object id on the presynaptic side
    pub pre_segment_id: u64,

    /// Bookkeeping sub-object id on the postsynaptic side
    pub post_segment_id: u64,
}

impl SynapseRecord {
    /// The neuron id on the requested side of this connection.
    #[inline]
    pub fn id_on(&self, side: Side) -> NeuronId {
        match side {
            Side::Presynaptic => self.pre_id,
            Side::Postsynaptic => self.post_id,
        }
    }
}

/// A derived label column appended to a [`SynapseTable`].
///
/// Holds one label per record, aligned by row position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelColumn {
    pub name: String,
    pub values: Vec<String>,
}

/// An ordered table of synapse records with optional derived label columns.
///
/// Row order is preserved from construction through every query; operations
/// that subset the table keep the surviving rows in their original relative
/// order, with any label columns subset in lockstep.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SynapseTable {
    records: Vec<SynapseRecord>,
    label_columns: Vec<LabelColumn>,
}

impl SynapseTable {
    /// Create a table from records, in the given row order.
    pub fn from_records(records: Vec<SynapseRecord>) -> Self {
        Self {
            records,
            label_columns: Vec::new(),
        }
    }

    /// Number of synapse records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, in row order.
    pub fn records(&self) -> &[SynapseRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &SynapseRecord> {
        self.records.iter()
    }

    /// The pre or post neuron-id column, in row order.
    pub fn ids(&self, side: Side) -> Vec<NeuronId> {
        self.records.iter().map(|r| r.id_on(side)).collect()
    }

    /// Append a derived label column, one value per record.
    ///
    /// Replaces an existing column with the same name (re-annotation against a
    /// revised annotation table). The column must be exactly as long as the
    /// record vector.
    pub fn append_label_column(
        &mut self,
        name: impl Into<String>,
        values: Vec<String>,
    ) -> Result<(), StructureError> {
        let name = name.into();
        if values.len() != self.records.len() {
            return Err(StructureError::ColumnLengthMismatch {
                column: name,
                expected: self.records.len(),
                actual: values.len(),
            });
        }
        if let Some(existing) = self.label_columns.iter_mut().find(|c| c.name == name) {
            debug!(column = %name, "replacing existing label column");
            existing.values = values;
        } else {
            self.label_columns.push(LabelColumn { name, values });
        }
        Ok(())
    }

    /// The values of a derived label column, if present.
    pub fn label_column(&self, name: &str) -> Option<&[String]> {
        self.label_columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
    }

    /// Names of all appended label columns, in append order.
    pub fn label_column_names(&self) -> impl Iterator<Item = &str> {
        self.label_columns.iter().map(|c| c.name.as_str())
    }

    /// Build a new table from the rows at the given positions, carrying the
    /// matching slice of every label column along.
    ///
    /// Positions must be in ascending order to preserve row order; callers
    /// produce them by scanning the table front to back.
    pub fn subset(&self, row_indices: &[usize]) -> Self {
        let records = row_indices
            .iter()
            .map(|&i| self.records[i].clone())
            .collect();
        let label_columns = self
            .label_columns
            .iter()
            .map(|c| LabelColumn {
                name: c.name.clone(),
                values: row_indices.iter().map(|&i| c.values[i].clone()).collect(),
            })
            .collect();
        Self {
            records,
            label_columns,
        }
    }
}
