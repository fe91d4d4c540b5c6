//! A derived-sample -> source-sample graph built from a transformation's provenance.
//!
//! This mirrors the links the orchestration layer writes to the backing store
//! after persisting a derived series, and lets callers answer lineage
//! questions in memory before (or without) that round trip.
use crate::series::SourceId;
use crate::transform::TransformationResult;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineageNode {
    /// The n-th sample of the derived series.
    Derived(usize),
    /// An originating stored value.
    Source(SourceId),
}

/// Edges point from a derived sample to each of its sources. The edge weight
/// is the source's slot in the provenance entry, so source order survives.
#[derive(Debug, Clone, Default)]
pub struct Lineage {
    graph: DiGraph<LineageNode, usize>,
    derived: Vec<NodeIndex>,
    sources: HashMap<SourceId, NodeIndex>,
}

impl Lineage {
    pub fn from_result(result: &TransformationResult) -> Self {
        let mut lineage = Self::default();
        for (index, entry) in result.provenance.iter().enumerate() {
            let derived = lineage.graph.add_node(LineageNode::Derived(index));
            lineage.derived.push(derived);
            for (slot, source_id) in entry.iter().enumerate() {
                let source = lineage.source_node(source_id);
                lineage.graph.add_edge(derived, source, slot);
            }
        }
        lineage
    }

    fn source_node(&mut self, id: &SourceId) -> NodeIndex {
        if let Some(&node) = self.sources.get(id) {
            return node;
        }
        let node = self.graph.add_node(LineageNode::Source(id.clone()));
        self.sources.insert(id.clone(), node);
        node
    }

    pub fn derived_count(&self) -> usize {
        self.derived.len()
    }

    /// Number of distinct source ids referenced.
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// The sources of the `index`-th derived sample, in provenance order.
    pub fn sources_of(&self, index: usize) -> Vec<&SourceId> {
        let Some(&node) = self.derived.get(index) else {
            return Vec::new();
        };
        let mut edges: Vec<_> = self.graph.edges_directed(node, Direction::Outgoing).collect();
        edges.sort_by_key(|e| *e.weight());
        edges
            .into_iter()
            .filter_map(|e| match &self.graph[e.target()] {
                LineageNode::Source(id) => Some(id),
                LineageNode::Derived(_) => None,
            })
            .collect()
    }

    /// Ascending indices of the derived samples that draw on `id`.
    pub fn derived_from(&self, id: &SourceId) -> Vec<usize> {
        let Some(&node) = self.sources.get(id) else {
            return Vec::new();
        };
        let mut indices: Vec<usize> = self
            .graph
            .neighbors_directed(node, Direction::Incoming)
            .filter_map(|n| match self.graph[n] {
                LineageNode::Derived(i) => Some(i),
                LineageNode::Source(_) => None,
            })
            .collect();
        indices.sort_unstable();
        indices.dedup();
        indices
    }
}
