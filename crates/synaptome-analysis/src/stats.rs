// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Per-neuron statistics: synapse counts and distinct-partner counts.
//!
//! These feed the external histogram plots; this module only computes the
//! count tables.

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};
use synaptome_structures::{NeuronId, Side, SynapseTable};
use tracing::debug;

/// One row of a per-neuron count table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeuronCount {
    pub neuron_id: NeuronId,
    pub count: u64,
}

/// Total synapse records per distinct id on `side`.
///
/// Sorted descending by count, ties in first-occurrence order.
pub fn synapse_counts(table: &SynapseTable, side: Side) -> Vec<NeuronCount> {
    let mut first_seen: AHashMap<NeuronId, usize> = AHashMap::new();
    let mut counts: Vec<NeuronCount> = Vec::new();
    for record in table.records() {
        let id = record.id_on(side);
        match first_seen.get(&id) {
            Some(&slot) => counts[slot].count += 1,
            None => {
                first_seen.insert(id, counts.len());
                counts.push(NeuronCount {
                    neuron_id: id,
                    count: 1,
                });
            }
        }
    }
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    debug!(%side, neurons = counts.len(), "computed per-neuron synapse counts");
    counts
}

/// Distinct opposite-side partners per distinct id on `side`.
///
/// Sorted descending by count, ties in first-occurrence order.
pub fn partner_counts(table: &SynapseTable, side: Side) -> Vec<NeuronCount> {
    let mut first_seen: AHashMap<NeuronId, usize> = AHashMap::new();
    let mut partners: Vec<(NeuronId, AHashSet<NeuronId>)> = Vec::new();
    for record in table.records() {
        let id = record.id_on(side);
        let partner = record.id_on(side.opposite());
        match first_seen.get(&id) {
            Some(&slot) => {
                partners[slot].1.insert(partner);
            }
            None => {
                first_seen.insert(id, partners.len());
                let mut set = AHashSet::new();
                set.insert(partner);
                partners.push((id, set));
            }
        }
    }
    let mut counts: Vec<NeuronCount> = partners
        .into_iter()
        .map(|(neuron_id, set)| NeuronCount {
            neuron_id,
            count: set.len() as u64,
        })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    debug!(%side, neurons = counts.len(), "computed per-neuron partner counts");
    counts
}
