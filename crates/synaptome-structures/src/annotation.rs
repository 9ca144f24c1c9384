// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Annotation tables: curated neuron-id → label mappings.
//!
//! Separate tables exist for sensory neurons, postsynaptic partners and motor
//! neurons. They share the neuron-id space but carry independently curated
//! label sets, so a table is just rows plus a first-match index; nothing in
//! the type distinguishes the three curations.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::ids::{AnnotationId, NeuronId};

/// Which label column of an annotation row a lookup returns.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelMode {
    /// The specific cell-type label (e.g. "claw", "hook", "club").
    CellType,
    /// The broader classification-system label the cell type belongs to.
    ClassificationSystem,
}

/// One row of an annotation table: a curated label pair for a known neuron.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationRecord {
    /// Unique id of this annotation row
    pub annotation_id: AnnotationId,

    /// The annotated neuron (joins to the synapse table's pre/post columns)
    pub neuron_id: NeuronId,

    /// Specific cell-type label
    pub cell_type: String,

    /// Broader classification-system label
    pub classification_system: String,
}

/// An annotation table with first-match lookup by neuron id.
///
/// Duplicate neuron ids can occur in curated data; the index keeps the first
/// row for each id and later rows are shadowed. Construction warns when that
/// happens so the data-quality gap is visible, but results are unchanged.
#[derive(Debug, Clone, Default)]
pub struct AnnotationTable {
    records: Vec<AnnotationRecord>,
    index: AHashMap<NeuronId, usize>,
}

impl AnnotationTable {
    /// Build a table from rows, indexing the first occurrence of each neuron id.
    pub fn from_records(records: Vec<AnnotationRecord>) -> Self {
        let mut index = AHashMap::with_capacity(records.len());
        for (row, record) in records.iter().enumerate() {
            if index.contains_key(&record.neuron_id) {
                warn!(
                    neuron_id = %record.neuron_id,
                    row,
                    "duplicate annotation row shadowed by first match"
                );
            } else {
                index.insert(record.neuron_id, row);
            }
        }
        Self { records, index }
    }

    /// Number of annotation rows (duplicates included).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All rows, in curation order.
    pub fn records(&self) -> &[AnnotationRecord] {
        &self.records
    }

    /// First matching row for a neuron id, if any.
    pub fn lookup(&self, neuron_id: NeuronId) -> Option<&AnnotationRecord> {
        self.index.get(&neuron_id).map(|&row| &self.records[row])
    }

    /// First matching label for a neuron id under the given mode, if any.
    pub fn label_of(&self, neuron_id: NeuronId, mode: LabelMode) -> Option<&str> {
        self.lookup(neuron_id).map(|record| match mode {
            LabelMode::CellType => record.cell_type.as_str(),
            LabelMode::ClassificationSystem => record.classification_system.as_str(),
        })
    }
}
