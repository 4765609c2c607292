//! Is-a graph with bounded hypernym/hyponym traversal.

use std::collections::{HashMap, HashSet, VecDeque};

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;

/// Edges point hypernym -> hyponym.
#[derive(Debug, Clone, Default)]
pub struct TaxonomyGraph {
    graph: DiGraph<String, ()>,
    index: HashMap<String, NodeIndex>,
}

impl TaxonomyGraph {
    pub fn from_edges<'a>(edges: impl IntoIterator<Item = &'a (String, String)>) -> Self {
        let mut taxonomy = Self::default();
        for (hypernym, hyponym) in edges {
            taxonomy.add_edge(hypernym, hyponym);
        }
        taxonomy
    }

    pub fn add_edge(&mut self, hypernym: &str, hyponym: &str) {
        if hypernym == hyponym {
            return;
        }
        let parent = self.node(hypernym);
        let child = self.node(hyponym);
        if self.graph.find_edge(parent, child).is_none() {
            self.graph.add_edge(parent, child, ());
        }
    }

    fn node(&mut self, term: &str) -> NodeIndex {
        if let Some(idx) = self.index.get(term) {
            return *idx;
        }
        let idx = self.graph.add_node(term.to_string());
        self.index.insert(term.to_string(), idx);
        idx
    }

    pub fn contains(&self, term: &str) -> bool {
        self.index.contains_key(term)
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Ancestors of `term` up to `max_depth` levels, nearest first.
    pub fn hypernyms(&self, term: &str, max_depth: usize, limit: usize) -> Vec<String> {
        self.walk(term, Direction::Incoming, max_depth, limit)
    }

    /// Descendants of `term` up to `max_depth` levels, nearest first.
    pub fn hyponyms(&self, term: &str, max_depth: usize, limit: usize) -> Vec<String> {
        self.walk(term, Direction::Outgoing, max_depth, limit)
    }

    /// Whether `general` is an ancestor of `specific` within `max_depth`.
    pub fn is_hypernym_of(&self, general: &str, specific: &str, max_depth: usize) -> bool {
        self.hypernyms(specific, max_depth, usize::MAX)
            .iter()
            .any(|h| h == general)
    }

    fn walk(&self, term: &str, direction: Direction, max_depth: usize, limit: usize) -> Vec<String> {
        let mut found = Vec::new();
        let Some(&start) = self.index.get(term) else {
            return found;
        };

        let mut visited = HashSet::new();
        visited.insert(start);
        let mut queue = VecDeque::new();
        queue.push_back((start, 0usize));

        while let Some((current, depth)) = queue.pop_front() {
            if depth >= max_depth || found.len() >= limit {
                break;
            }
            // Node indices follow insertion order, which keeps results stable.
            let mut neighbors: Vec<NodeIndex> =
                self.graph.neighbors_directed(current, direction).collect();
            neighbors.sort();
            for neighbor in neighbors {
                if found.len() >= limit {
                    break;
                }
                if !visited.insert(neighbor) {
                    continue;
                }
                if let Some(name) = self.graph.node_weight(neighbor) {
                    found.push(name.clone());
                }
                queue.push_back((neighbor, depth + 1));
            }
        }

        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph() -> TaxonomyGraph {
        let edges = vec![
            ("weapon".to_string(), "gun".to_string()),
            ("gun".to_string(), "pistol".to_string()),
            ("weapon".to_string(), "knife".to_string()),
        ];
        TaxonomyGraph::from_edges(&edges)
    }

    #[test]
    fn hypernyms_respect_depth() {
        let g = graph();
        assert_eq!(g.hypernyms("pistol", 1, 10), vec!["gun"]);
        assert_eq!(g.hypernyms("pistol", 2, 10), vec!["gun", "weapon"]);
    }

    #[test]
    fn hyponyms_respect_limit() {
        let g = graph();
        assert_eq!(g.hyponyms("weapon", 2, 1).len(), 1);
        assert_eq!(g.hyponyms("weapon", 2, 10).len(), 3);
    }

    #[test]
    fn unknown_term_has_no_relatives() {
        assert!(graph().hypernyms("spoon", 3, 10).is_empty());
    }

    #[test]
    fn duplicate_edges_ignored() {
        let mut g = graph();
        g.add_edge("weapon", "gun");
        assert_eq!(g.edge_count(), 3);
        assert!(g.is_hypernym_of("weapon", "pistol", 2));
        assert!(!g.is_hypernym_of("weapon", "pistol", 1));
    }
}
