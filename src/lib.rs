// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Synaptome - Connectomics Synapse-Table Exploration
//!
//! Synaptome is a small educational toolkit for exploring a connectomics
//! synapse table: per-neuron synapse and partner counts, weighted partner
//! rankings, cell-type annotation of raw neuron ids, and connectivity
//! matrices at id, class and motor-type granularity.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! synaptome = "0.1"
//! ```
//!
//! ```rust
//! use synaptome::prelude::*;
//!
//! // One synapse record per detected connection (ids come from the dataset).
//! let synapses = SynapseTable::from_records(vec![]);
//! let sensory = AnnotationTable::from_records(vec![]);
//! let partners = AnnotationTable::from_records(vec![]);
//! let motor = AnnotationTable::from_records(vec![]);
//!
//! let bench = Workbench::new(&synapses, &sensory, &partners, &motor,
//!     WorkbenchConfig::default());
//! let by_id = bench.connectivity_by_id().unwrap();
//! assert_eq!(by_id.total(), 0);
//! ```
//!
//! ## Components
//!
//! - [`synaptome_structures`]: identifier newtypes, the synapse table, the
//!   annotation tables
//! - [`synaptome_analysis`]: filter, weighted-edge aggregation, cell-type
//!   resolution, cross-tabulation, per-neuron statistics, the composed
//!   workflow and its TOML configuration
//!
//! Reading the dataset files and rendering heatmaps/histograms are external
//! collaborators; this crate computes the tables they consume.

pub use synaptome_analysis as analysis;
pub use synaptome_structures as structures;

// Matrix carrier, re-exported so consumers can name `Array2` without adding
// their own ndarray dependency
pub use ndarray;

// Re-export the working set at the crate root
pub use synaptome_analysis::{
    aggregate_edges, annotate, filter_by_neuron, partner_counts, resolve_labels,
    resolve_labels_with, synapse_counts, AnalysisError, ConfigError, ConnectivityMatrix,
    NeuronCount, WeightedEdge, Workbench, WorkbenchConfig, MOTOR_COLUMN, PARTNER_COLUMN,
    SENSORY_COLUMN, UNKNOWN_LABEL,
};
pub use synaptome_structures::{
    AnnotationId, AnnotationRecord, AnnotationTable, LabelColumn, LabelMode, NeuronId, Side,
    StructureError, SynapsePosition, SynapseRecord, SynapseTable, SynapseId,
};

/// Convenience prelude importing the common working set.
pub mod prelude {
    pub use synaptome_analysis::{
        aggregate_edges, filter_by_neuron, partner_counts, resolve_labels, synapse_counts,
        ConnectivityMatrix, NeuronCount, WeightedEdge, Workbench, WorkbenchConfig, UNKNOWN_LABEL,
    };
    pub use synaptome_structures::{
        AnnotationRecord, AnnotationTable, LabelMode, NeuronId, Side, SynapseRecord, SynapseTable,
    };
}
