// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Neuron filter: subset the synapse table by one neuron id.

use synaptome_structures::{NeuronId, Side, SynapseTable};
use tracing::debug;

/// All synapse records whose id on `side` equals `neuron_id`, in original
/// row order. Any appended label columns are filtered in lockstep.
///
/// An empty result is an empty table, not an error: a neuron with no
/// detected synapses on that side is a valid query.
pub fn filter_by_neuron(table: &SynapseTable, neuron_id: NeuronId, side: Side) -> SynapseTable {
    let row_indices: Vec<usize> = table
        .records()
        .iter()
        .enumerate()
        .filter(|(_, record)| record.id_on(side) == neuron_id)
        .map(|(i, _)| i)
        .collect();
    debug!(
        %neuron_id,
        %side,
        matched = row_indices.len(),
        total = table.len(),
        "filtered synapse table"
    );
    table.subset(&row_indices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use synaptome_structures::{SynapsePosition, SynapseRecord, SynapseId};

    fn record(synapse_id: u64, pre: u64, post: u64) -> SynapseRecord {
        SynapseRecord {
            synapse_id: SynapseId(synapse_id),
            pre_id: NeuronId(pre),
            post_id: NeuronId(post),
            cleft_score: 50.0,
            pre_position: SynapsePosition::new(0.0, 0.0, 0.0),
            post_position: SynapsePosition::new(0.0, 0.0, 0.0),
            pre_segment_id: 0,
            post_segment_id: 0,
        }
    }

    fn table() -> SynapseTable {
        SynapseTable::from_records(vec![
            record(1, 10, 20),
            record(2, 11, 20),
            record(3, 10, 21),
            record(4, 12, 22),
            record(5, 10, 20),
        ])
    }

    #[test]
    fn test_every_returned_record_matches_query() {
        let result = filter_by_neuron(&table(), NeuronId(10), Side::Presynaptic);
        assert_eq!(result.len(), 3);
        assert!(result
            .records()
            .iter()
            .all(|r| r.pre_id == NeuronId(10)));
    }

    #[test]
    fn test_row_order_is_preserved() {
        let result = filter_by_neuron(&table(), NeuronId(10), Side::Presynaptic);
        let ids: Vec<u64> = result.records().iter().map(|r| r.synapse_id.0).collect();
        assert_eq!(ids, vec![1, 3, 5]);
    }

    #[test]
    fn test_no_match_yields_empty_table() {
        let result = filter_by_neuron(&table(), NeuronId(99), Side::Presynaptic);
        assert!(result.is_empty());
    }

    #[test]
    fn test_postsynaptic_side() {
        let result = filter_by_neuron(&table(), NeuronId(20), Side::Postsynaptic);
        assert_eq!(result.len(), 3);
        assert!(result
            .records()
            .iter()
            .all(|r| r.post_id == NeuronId(20)));
    }
}
