//! Directed dependency graph over string-labeled vertices
//!
//! Stores one successor list per vertex, kept in case-insensitive sorted
//! order so every traversal over the graph is deterministic. Mutations keep
//! the vertex and edge counts consistent with the stored lists; duplicate or
//! empty inserts and absent removals are no-ops rather than errors.

use std::cmp::Ordering;
use std::collections::HashMap;

/// Total order on vertex labels: case-insensitive, with plain byte order as
/// the tie-break so labels differing only in case stay distinct and stable.
pub fn compare_labels(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Directed, unweighted graph of package dependencies
///
/// An edge u→v means "u depends on v": v must be installed before u.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    /// Successor lists keyed by vertex label, each kept sorted by
    /// `compare_labels`
    adjacency: HashMap<String, Vec<String>>,

    /// Number of directed edges currently stored
    edge_count: usize,
}

impl DependencyGraph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
            edge_count: 0,
        }
    }

    /// Insert a vertex; duplicates and empty labels are no-ops
    pub fn add_vertex(&mut self, label: &str) {
        if label.is_empty() || self.adjacency.contains_key(label) {
            return;
        }
        self.adjacency.insert(label.to_string(), Vec::new());
    }

    /// Remove a vertex and every edge incident to it; absent labels are a
    /// no-op
    pub fn remove_vertex(&mut self, label: &str) {
        if let Some(outgoing) = self.adjacency.remove(label) {
            self.edge_count -= outgoing.len();
            for neighbors in self.adjacency.values_mut() {
                if let Ok(pos) =
                    neighbors.binary_search_by(|existing| compare_labels(existing, label))
                {
                    neighbors.remove(pos);
                    self.edge_count -= 1;
                }
            }
        }
    }

    /// Record the directed edge from→to, inserting missing endpoints first
    ///
    /// Re-adding an existing edge is a no-op, as is any edge with an empty
    /// endpoint label. The edge count moves only on actual insertion.
    pub fn add_edge(&mut self, from: &str, to: &str) {
        if from.is_empty() || to.is_empty() {
            return;
        }
        self.adjacency.entry(to.to_string()).or_default();
        let neighbors = self.adjacency.entry(from.to_string()).or_default();
        if let Err(pos) = neighbors.binary_search_by(|existing| compare_labels(existing, to)) {
            neighbors.insert(pos, to.to_string());
            self.edge_count += 1;
        }
    }

    /// Remove the directed edge from→to if present
    pub fn remove_edge(&mut self, from: &str, to: &str) {
        if let Some(neighbors) = self.adjacency.get_mut(from) {
            if let Ok(pos) = neighbors.binary_search_by(|existing| compare_labels(existing, to)) {
                neighbors.remove(pos);
                self.edge_count -= 1;
            }
        }
    }

    /// Whether the label is a vertex of the graph
    pub fn contains(&self, label: &str) -> bool {
        self.adjacency.contains_key(label)
    }

    /// All vertex labels, in no particular order
    pub fn vertices(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    /// All vertex labels in case-insensitive sorted order
    pub fn sorted_vertices(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self.adjacency.keys().map(String::as_str).collect();
        labels.sort_by(|a, b| compare_labels(a, b));
        labels
    }

    /// Successors of the vertex in sorted order, or `None` if the label is
    /// not a vertex (distinct from a vertex with no successors)
    pub fn neighbors_of(&self, label: &str) -> Option<&[String]> {
        self.adjacency.get(label).map(Vec::as_slice)
    }

    /// Number of vertices
    pub fn order(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges
    pub fn size(&self) -> usize {
        self.edge_count
    }
}
