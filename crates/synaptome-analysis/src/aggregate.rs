// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Weighted-edge aggregation: collapse duplicate connection rows.
//!
//! Multiple synapse records between the same (pre, post) pair are one edge
//! with a weight. The output ordering contract is: descending by weight,
//! ties broken by the pair's first occurrence in the input, so partner
//! rankings are deterministic.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use synaptome_structures::{NeuronId, SynapseTable};
use tracing::debug;

/// One weighted edge of the connectivity graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedEdge {
    pub pre: NeuronId,
    pub post: NeuronId,
    /// Count of synapse records contributing to this (pre, post) pair.
    pub number_of_synapses: u64,
}

/// Group records by the ordered (pre, post) pair and count contributions.
///
/// Sorted descending by `number_of_synapses`; ties keep first-occurrence
/// order. Counts over all edges sum to `table.len()`.
pub fn aggregate_edges(table: &SynapseTable) -> Vec<WeightedEdge> {
    let mut first_seen: AHashMap<(NeuronId, NeuronId), usize> =
        AHashMap::with_capacity(table.len());
    let mut edges: Vec<WeightedEdge> = Vec::new();

    for record in table.records() {
        let pair = (record.pre_id, record.post_id);
        match first_seen.get(&pair) {
            Some(&slot) => edges[slot].number_of_synapses += 1,
            None => {
                first_seen.insert(pair, edges.len());
                edges.push(WeightedEdge {
                    pre: record.pre_id,
                    post: record.post_id,
                    number_of_synapses: 1,
                });
            }
        }
    }

    // Vec::sort_by is stable, so ties keep first-occurrence order.
    edges.sort_by(|a, b| b.number_of_synapses.cmp(&a.number_of_synapses));
    debug!(
        records = table.len(),
        edges = edges.len(),
        "aggregated synapse records into weighted edges"
    );
    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use synaptome_structures::{Side, SynapsePosition, SynapseRecord, SynapseId};

    fn record(synapse_id: u64, pre: u64, post: u64) -> SynapseRecord {
        SynapseRecord {
            synapse_id: SynapseId(synapse_id),
            pre_id: NeuronId(pre),
            post_id: NeuronId(post),
            cleft_score: 80.0,
            pre_position: SynapsePosition::new(0.0, 0.0, 0.0),
            post_position: SynapsePosition::new(0.0, 0.0, 0.0),
            pre_segment_id: 0,
            post_segment_id: 0,
        }
    }

    #[test]
    fn test_counts_sum_to_input_size() {
        let table = SynapseTable::from_records(vec![
            record(1, 1, 2),
            record(2, 1, 2),
            record(3, 1, 3),
            record(4, 2, 2),
            record(5, 2, 2),
            record(6, 2, 2),
        ]);
        let edges = aggregate_edges(&table);
        let total: u64 = edges.iter().map(|e| e.number_of_synapses).sum();
        assert_eq!(total as usize, table.len());
    }

    #[test]
    fn test_sorted_descending_stable_on_ties() {
        // (1,2) and (1,3) both have weight 2; (1,2) appears first in the input.
        let table = SynapseTable::from_records(vec![
            record(1, 1, 2),
            record(2, 1, 3),
            record(3, 1, 2),
            record(4, 1, 3),
            record(5, 1, 4),
        ]);
        let edges = aggregate_edges(&table);
        assert_eq!(edges.len(), 3);
        assert_eq!((edges[0].post, edges[0].number_of_synapses), (NeuronId(2), 2));
        assert_eq!((edges[1].post, edges[1].number_of_synapses), (NeuronId(3), 2));
        assert_eq!((edges[2].post, edges[2].number_of_synapses), (NeuronId(4), 1));
    }

    #[test]
    fn test_partner_ranking_example() {
        // Rows {(A,X),(A,X),(A,Y),(B,X)} with A=1, B=2, X=10, Y=11.
        let table = SynapseTable::from_records(vec![
            record(1, 1, 10),
            record(2, 1, 10),
            record(3, 1, 11),
            record(4, 2, 10),
        ]);
        let a_rows = crate::filter_by_neuron(&table, NeuronId(1), Side::Presynaptic);
        let edges = aggregate_edges(&a_rows);
        assert_eq!(
            edges,
            vec![
                WeightedEdge {
                    pre: NeuronId(1),
                    post: NeuronId(10),
                    number_of_synapses: 2
                },
                WeightedEdge {
                    pre: NeuronId(1),
                    post: NeuronId(11),
                    number_of_synapses: 1
                },
            ]
        );
    }

    #[test]
    fn test_empty_input_yields_no_edges() {
        let edges = aggregate_edges(&SynapseTable::default());
        assert!(edges.is_empty());
    }
}
