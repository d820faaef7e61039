//! Edge and node label types for flow graphs.
//!
//! The layout passes are generic over their labels through [`FlowEdge`] and [`RankedNode`];
//! [`FlowEdgeLabel`] and [`FlowNodeLabel`] are the stock implementations.

use serde::{Deserialize, Serialize};

pub trait FlowEdge {
    /// Flow carried by the edge.
    fn value(&self) -> f64;
    /// Whether the edge is a feedback (loop) edge.
    fn is_reverse(&self) -> bool;
    fn set_reverse(&mut self, reverse: bool);
}

pub trait RankedNode {
    fn rank(&self) -> Option<i32>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowEdgeLabel {
    pub value: f64,
    pub reverse: bool,
}

impl FlowEdgeLabel {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            reverse: false,
        }
    }

    pub fn reversed(value: f64) -> Self {
        Self {
            value,
            reverse: true,
        }
    }
}

impl FlowEdge for FlowEdgeLabel {
    fn value(&self) -> f64 {
        self.value
    }

    fn is_reverse(&self) -> bool {
        self.reverse
    }

    fn set_reverse(&mut self, reverse: bool) {
        self.reverse = reverse;
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowNodeLabel {
    pub rank: Option<i32>,
}

impl FlowNodeLabel {
    pub fn ranked(rank: i32) -> Self {
        Self { rank: Some(rank) }
    }
}

impl RankedNode for FlowNodeLabel {
    fn rank(&self) -> Option<i32> {
        self.rank
    }
}
