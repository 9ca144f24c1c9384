// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # synaptome-structures
//!
//! Core data structures for the synaptome workspace:
//! - **Ids**: Identifier newtypes (`NeuronId`, `SynapseId`, `AnnotationId`) and the
//!   `Side` selector for the pre/post id columns
//! - **Synapse**: One row per detected synapse, plus the ordered `SynapseTable`
//!   with appendable derived label columns
//! - **Annotation**: Curated neuron-id → cell-type tables with first-match lookup
//!
//! All types are plain in-memory values. Nothing here reads files or talks to a
//! network; tables are built from records the caller already has.

mod annotation;
mod error;
mod ids;
mod synapse;

pub use annotation::{AnnotationRecord, AnnotationTable, LabelMode};
pub use error::StructureError;
pub use ids::{AnnotationId, NeuronId, Side, SynapseId};
pub use synapse::{LabelColumn, SynapsePosition, SynapseRecord, SynapseTable};
