//! Degree centrality
//!
//! A node's centrality is its number of incident edges.

use super::common::{GraphView, NodeId};

/// Degree ranking, highest degree first; equal degrees are ordered by ascending node id
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DegreeCentrality {
    pub ranking: Vec<(NodeId, usize)>,
}

impl DegreeCentrality {
    /// Full ranking
    pub fn sorted(&self) -> &[(NodeId, usize)] {
        &self.ranking
    }

    /// The `n` highest-ranked nodes; all of them when fewer than `n` exist
    pub fn top_n(&self, n: usize) -> Vec<(NodeId, usize)> {
        self.ranking.iter().take(n).copied().collect()
    }

    /// Degree of a single node
    pub fn degree_of(&self, node: NodeId) -> Option<usize> {
        self.ranking
            .iter()
            .find(|(id, _)| *id == node)
            .map(|&(_, degree)| degree)
    }

    pub fn len(&self) -> usize {
        self.ranking.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranking.is_empty()
    }
}

/// Rank every node of the view by degree
pub fn degree_centrality(view: &GraphView) -> DegreeCentrality {
    let mut ranking: Vec<(NodeId, usize)> = (0..view.node_count)
        .map(|idx| (view.node_at(idx), view.degree(idx)))
        .collect();

    ranking.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    DegreeCentrality { ranking }
}
