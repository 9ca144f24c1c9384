// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Identifier newtypes shared across the synaptome workspace.
//!
//! Presynaptic and postsynaptic identifiers come from a single shared
//! neuron-id space, so both sides of a synapse use the same [`NeuronId`].

use core::fmt;
use serde::{Deserialize, Serialize};

/// Identifier of a neuron (segment) in the shared id space.
///
/// Both the presynaptic and postsynaptic columns of a synapse record hold
/// `NeuronId`s, as do the neuron-id columns of every annotation table.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct NeuronId(pub u64);

impl NeuronId {
    #[inline]
    pub const fn from_raw(value: u64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NeuronId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for NeuronId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Identifier of a single detected synapse.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct SynapseId(pub u64);

impl fmt::Display for SynapseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for SynapseId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Identifier of a row in an annotation table.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct AnnotationId(pub u64);

impl fmt::Display for AnnotationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for AnnotationId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Which id column of a synapse record an operation reads.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The sending side of the connection.
    Presynaptic,
    /// The receiving side of the connection.
    Postsynaptic,
}

impl Side {
    /// The opposite side. A neuron's partners live on the opposite column.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::Presynaptic => Side::Postsynaptic,
            Side::Postsynaptic => Side::Presynaptic,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Presynaptic => write!(f, "presynaptic"),
            Side::Postsynaptic => write!(f, "postsynaptic"),
        }
    }
}
