// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Cell-type resolution: join annotation labels onto raw neuron ids.
//!
//! Annotation coverage is expected to be partial, so a lookup miss is not an
//! error; every unannotated id resolves to the sentinel label. Applied once
//! per annotation table (sensory, postsynaptic partner, motor) to derive the
//! human-readable label columns of the synapse table.

use synaptome_structures::{AnnotationTable, LabelMode, NeuronId, Side, SynapseTable};
use tracing::debug;

use crate::error::AnalysisError;

/// Sentinel label for neuron ids absent from an annotation table.
pub const UNKNOWN_LABEL: &str = "unknown";

/// Resolve each id to its first matching label, or [`UNKNOWN_LABEL`].
///
/// Output is the same length as `ids` and order-preserving.
pub fn resolve_labels(
    ids: &[NeuronId],
    annotations: &AnnotationTable,
    mode: LabelMode,
) -> Vec<String> {
    resolve_labels_with(ids, annotations, mode, UNKNOWN_LABEL)
}

/// [`resolve_labels`] with a caller-chosen sentinel for misses.
pub fn resolve_labels_with(
    ids: &[NeuronId],
    annotations: &AnnotationTable,
    mode: LabelMode,
    sentinel: &str,
) -> Vec<String> {
    let mut misses = 0usize;
    let labels = ids
        .iter()
        .map(|&id| match annotations.label_of(id, mode) {
            Some(label) => label.to_string(),
            None => {
                misses += 1;
                sentinel.to_string()
            }
        })
        .collect();
    debug!(ids = ids.len(), misses, ?mode, "resolved cell-type labels");
    labels
}

/// Resolve the `side` id column of `table` and append it as a derived label
/// column named `column_name`.
pub fn annotate(
    table: &mut SynapseTable,
    column_name: &str,
    side: Side,
    annotations: &AnnotationTable,
    mode: LabelMode,
) -> Result<(), AnalysisError> {
    let labels = resolve_labels(&table.ids(side), annotations, mode);
    table.append_label_column(column_name, labels)?;
    Ok(())
}
