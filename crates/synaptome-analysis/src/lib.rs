// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # synaptome-analysis
//!
//! The tabular transformations of the synaptome workflow, each a stateless
//! pure function over in-memory tables:
//! - **Filter**: Subset the synapse table by neuron id, preserving row order
//! - **Aggregate**: Collapse duplicate connections into weighted edges
//! - **Resolve**: Join annotation labels onto raw neuron ids, with a sentinel
//!   for unannotated ids
//! - **Matrix**: Cross-tabulate key pairs into a dense connectivity matrix
//! - **Stats**: Per-neuron synapse and partner counts
//! - **Workflow**: The composed exploration pipeline at id, class and
//!   motor-type granularity
//!
//! Heatmap/histogram rendering and dataset file reading are external
//! collaborators; this crate only produces the tables they consume.

mod aggregate;
mod config;
mod error;
mod filter;
mod matrix;
mod resolve;
mod stats;
mod workflow;

pub use aggregate::{aggregate_edges, WeightedEdge};
pub use config::{ConfigError, WorkbenchConfig};
pub use error::AnalysisError;
pub use filter::filter_by_neuron;
pub use matrix::ConnectivityMatrix;
pub use resolve::{annotate, resolve_labels, resolve_labels_with, UNKNOWN_LABEL};
pub use stats::{partner_counts, synapse_counts, NeuronCount};
pub use workflow::{Workbench, MOTOR_COLUMN, PARTNER_COLUMN, SENSORY_COLUMN};
