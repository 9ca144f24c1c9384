// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! The composed exploration workflow.
//!
//! A [`Workbench`] borrows the loaded synapse table and the three curated
//! annotation tables (sensory, postsynaptic partner, motor) and exposes the
//! standard queries at increasing granularity:
//!
//! 1. Raw id × raw id connectivity
//! 2. Sensory cell type × partner classification system
//! 3. Sensory cell type × motor cell type
//!
//! plus single-neuron partner ranking and the fully annotated table. Every
//! query recomputes from the source rows; nothing is cached or mutated.

use synaptome_structures::{AnnotationTable, NeuronId, Side, SynapseTable};
use tracing::debug;

use crate::aggregate::{aggregate_edges, WeightedEdge};
use crate::config::WorkbenchConfig;
use crate::error::AnalysisError;
use crate::filter::filter_by_neuron;
use crate::matrix::ConnectivityMatrix;
use crate::resolve::resolve_labels_with;

/// Derived column name for resolved sensory cell types.
pub const SENSORY_COLUMN: &str = "sensory_cell_type";
/// Derived column name for resolved partner classification systems.
pub const PARTNER_COLUMN: &str = "partner_classification";
/// Derived column name for resolved motor cell types.
pub const MOTOR_COLUMN: &str = "motor_cell_type";

/// The exploration workbench over one synapse table and its annotations.
pub struct Workbench<'a> {
    synapses: &'a SynapseTable,
    sensory: &'a AnnotationTable,
    partners: &'a AnnotationTable,
    motor: &'a AnnotationTable,
    config: WorkbenchConfig,
}

impl<'a> Workbench<'a> {
    pub fn new(
        synapses: &'a SynapseTable,
        sensory: &'a AnnotationTable,
        partners: &'a AnnotationTable,
        motor: &'a AnnotationTable,
        config: WorkbenchConfig,
    ) -> Self {
        debug!(
            synapses = synapses.len(),
            sensory = sensory.len(),
            partners = partners.len(),
            motor = motor.len(),
            "workbench ready"
        );
        Self {
            synapses,
            sensory,
            partners,
            motor,
            config,
        }
    }

    pub fn config(&self) -> &WorkbenchConfig {
        &self.config
    }

    /// Weighted partners of one presynaptic neuron, strongest first.
    pub fn partner_ranking(&self, neuron_id: NeuronId) -> Vec<WeightedEdge> {
        let subset = filter_by_neuron(self.synapses, neuron_id, Side::Presynaptic);
        aggregate_edges(&subset)
    }

    /// Raw id × raw id connectivity over the whole table.
    pub fn connectivity_by_id(&self) -> Result<ConnectivityMatrix<NeuronId>, AnalysisError> {
        ConnectivityMatrix::from_pairs(
            &self.synapses.ids(Side::Presynaptic),
            &self.synapses.ids(Side::Postsynaptic),
        )
    }

    /// Sensory cell type × partner classification-system connectivity.
    pub fn connectivity_by_class(&self) -> Result<ConnectivityMatrix<String>, AnalysisError> {
        ConnectivityMatrix::from_pairs(
            &self.sensory_labels(),
            &resolve_labels_with(
                &self.synapses.ids(Side::Postsynaptic),
                self.partners,
                self.config.partner_mode,
                &self.config.unknown_label,
            ),
        )
    }

    /// Sensory cell type × motor cell-type connectivity.
    pub fn connectivity_by_motor_type(&self) -> Result<ConnectivityMatrix<String>, AnalysisError> {
        ConnectivityMatrix::from_pairs(
            &self.sensory_labels(),
            &resolve_labels_with(
                &self.synapses.ids(Side::Postsynaptic),
                self.motor,
                self.config.motor_mode,
                &self.config.unknown_label,
            ),
        )
    }

    /// A copy of the synapse table with the three derived label columns
    /// (`sensory_cell_type`, `partner_classification`, `motor_cell_type`).
    pub fn annotated_table(&self) -> Result<SynapseTable, AnalysisError> {
        let mut table = self.synapses.clone();
        table.append_label_column(SENSORY_COLUMN, self.sensory_labels())?;
        table.append_label_column(
            PARTNER_COLUMN,
            resolve_labels_with(
                &table.ids(Side::Postsynaptic),
                self.partners,
                self.config.partner_mode,
                &self.config.unknown_label,
            ),
        )?;
        table.append_label_column(
            MOTOR_COLUMN,
            resolve_labels_with(
                &table.ids(Side::Postsynaptic),
                self.motor,
                self.config.motor_mode,
                &self.config.unknown_label,
            ),
        )?;
        Ok(table)
    }

    fn sensory_labels(&self) -> Vec<String> {
        resolve_labels_with(
            &self.synapses.ids(Side::Presynaptic),
            self.sensory,
            self.config.sensory_mode,
            &self.config.unknown_label,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use synaptome_structures::{
        AnnotationId, AnnotationRecord, SynapsePosition, SynapseRecord, SynapseId,
    };

    fn record(synapse_id: u64, pre: u64, post: u64) -> SynapseRecord {
        SynapseRecord {
            synapse_id: SynapseId(synapse_id),
            pre_id: NeuronId(pre),
            post_id: NeuronId(post),
            cleft_score: 120.0,
            pre_position: SynapsePosition::new(0.0, 0.0, 0.0),
            post_position: SynapsePosition::new(0.0, 0.0, 0.0),
            pre_segment_id: 0,
            post_segment_id: 0,
        }
    }

    fn annotation(neuron_id: u64, cell_type: &str, class: &str) -> AnnotationRecord {
        AnnotationRecord {
            annotation_id: AnnotationId(neuron_id),
            neuron_id: NeuronId(neuron_id),
            cell_type: cell_type.to_string(),
            classification_system: class.to_string(),
        }
    }

    // Two sensory neurons (1 = claw, 2 = hook) onto one interneuron (10)
    // and one motor neuron (20, "slow tibia flexor").
    fn fixture() -> (SynapseTable, AnnotationTable, AnnotationTable, AnnotationTable) {
        let synapses = SynapseTable::from_records(vec![
            record(1, 1, 10),
            record(2, 1, 10),
            record(3, 1, 20),
            record(4, 2, 10),
            record(5, 2, 99),
        ]);
        let sensory = AnnotationTable::from_records(vec![
            annotation(1, "claw", "proprioceptor"),
            annotation(2, "hook", "proprioceptor"),
        ]);
        let partners = AnnotationTable::from_records(vec![
            annotation(10, "13Ba", "intersegmental"),
            annotation(20, "slow tibia flexor", "motor neuron"),
        ]);
        let motor = AnnotationTable::from_records(vec![annotation(
            20,
            "slow tibia flexor",
            "motor neuron",
        )]);
        (synapses, sensory, partners, motor)
    }

    #[test]
    fn test_partner_ranking() {
        let (synapses, sensory, partners, motor) = fixture();
        let bench = Workbench::new(&synapses, &sensory, &partners, &motor, Default::default());
        let ranking = bench.partner_ranking(NeuronId(1));
        assert_eq!(ranking.len(), 2);
        assert_eq!(ranking[0].post, NeuronId(10));
        assert_eq!(ranking[0].number_of_synapses, 2);
        assert_eq!(ranking[1].post, NeuronId(20));
    }

    #[test]
    fn test_connectivity_by_id_total_matches_table() {
        let (synapses, sensory, partners, motor) = fixture();
        let bench = Workbench::new(&synapses, &sensory, &partners, &motor, Default::default());
        let matrix = bench.connectivity_by_id().unwrap();
        assert_eq!(matrix.total() as usize, synapses.len());
        assert_eq!(matrix.count(&NeuronId(1), &NeuronId(10)), 2);
    }

    #[test]
    fn test_connectivity_by_class_uses_classification_system() {
        let (synapses, sensory, partners, motor) = fixture();
        let bench = Workbench::new(&synapses, &sensory, &partners, &motor, Default::default());
        let matrix = bench.connectivity_by_class().unwrap();
        assert_eq!(
            matrix.row_keys(),
            &["claw".to_string(), "hook".to_string()]
        );
        assert_eq!(matrix.count(&"claw".into(), &"intersegmental".into()), 2);
        assert_eq!(matrix.count(&"claw".into(), &"motor neuron".into()), 1);
        // Post id 99 has no partner annotation.
        assert_eq!(matrix.count(&"hook".into(), &"unknown".into()), 1);
    }

    #[test]
    fn test_connectivity_by_motor_type_absorbs_non_motor_targets() {
        let (synapses, sensory, partners, motor) = fixture();
        let bench = Workbench::new(&synapses, &sensory, &partners, &motor, Default::default());
        let matrix = bench.connectivity_by_motor_type().unwrap();
        // Only post id 20 is a motor neuron; 10 and 99 fall into the sentinel.
        assert_eq!(matrix.count(&"claw".into(), &"slow tibia flexor".into()), 1);
        assert_eq!(matrix.count(&"claw".into(), &"unknown".into()), 2);
        assert_eq!(matrix.count(&"hook".into(), &"unknown".into()), 2);
    }

    #[test]
    fn test_annotated_table_has_three_columns() {
        let (synapses, sensory, partners, motor) = fixture();
        let bench = Workbench::new(&synapses, &sensory, &partners, &motor, Default::default());
        let table = bench.annotated_table().unwrap();
        assert_eq!(table.label_column_names().count(), 3);
        assert_eq!(
            table.label_column(SENSORY_COLUMN).unwrap()[0],
            "claw".to_string()
        );
        assert_eq!(
            table.label_column(PARTNER_COLUMN).unwrap()[4],
            "unknown".to_string()
        );
        // Source rows untouched.
        assert_eq!(table.records(), synapses.records());
    }

    #[test]
    fn test_custom_sentinel_flows_through() {
        let (synapses, sensory, partners, motor) = fixture();
        let config = WorkbenchConfig {
            unknown_label: "unlabelled".to_string(),
            ..Default::default()
        };
        let bench = Workbench::new(&synapses, &sensory, &partners, &motor, config);
        let matrix = bench.connectivity_by_motor_type().unwrap();
        assert_eq!(matrix.count(&"claw".into(), &"unlabelled".into()), 2);
    }
}
