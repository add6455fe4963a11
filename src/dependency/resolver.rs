//! Installation-order resolution over the dependency graph
//!
//! Every query runs the same iterative post-order traversal: an explicit
//! frame stack for the active path, an "ever visited" marker set, and an
//! on-path set for back-edge detection. Cycle errors are scoped to the part
//! of the graph a query actually walks; only the whole-graph order sweeps
//! everything first.

use std::collections::HashSet;

use crate::dependency::graph::DependencyGraph;
use crate::error::ResolveError;
use crate::manifest::PackageRecord;

/// One entry on the traversal path: a vertex and the index of the next
/// successor to scan
struct Frame<'g> {
    label: &'g str,
    next: usize,
}

/// Answers installation-order queries over a populated dependency graph
///
/// The graph is filled once from manifest records and treated as immutable
/// by every query.
#[derive(Debug, Clone, Default)]
pub struct DependencyResolver {
    graph: DependencyGraph,
}

impl DependencyResolver {
    /// Create a resolver over an empty graph
    pub fn new() -> Self {
        Self {
            graph: DependencyGraph::new(),
        }
    }

    /// Adopt an already-populated graph
    pub fn from_graph(graph: DependencyGraph) -> Self {
        Self { graph }
    }

    /// Build a resolver directly from parsed manifest records
    pub fn from_records(records: &[PackageRecord]) -> Self {
        let mut resolver = Self::new();
        resolver.build(records);
        resolver
    }

    /// Ingest manifest records into the graph
    ///
    /// Every package name becomes a vertex; every dependency entry becomes a
    /// vertex (if new) plus an edge package→dependency. Ingestion order does
    /// not affect the resulting graph. Must complete before any query runs.
    pub fn build(&mut self, records: &[PackageRecord]) {
        for record in records {
            self.graph.add_vertex(&record.name);
            for dependency in &record.dependencies {
                self.graph.add_edge(&record.name, dependency);
            }
        }
    }

    /// Read-only view of the underlying graph
    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    /// All package names, in no particular order
    pub fn all_packages(&self) -> Vec<&str> {
        self.graph.vertices().collect()
    }

    /// Installation order for `target` and everything it transitively
    /// depends on, dependencies first and `target` last
    ///
    /// A cycle is an error only when it lies on a path this traversal
    /// actually takes; cycles elsewhere in the graph are ignored.
    pub fn installation_order(&self, target: &str) -> Result<Vec<String>, ResolveError> {
        if !self.graph.contains(target) {
            return Err(ResolveError::not_found(target));
        }
        self.post_order_walk(&[target], None)
    }

    /// Packages that must still be installed to get `new_pkg`, given that
    /// `installed_pkg` and everything it reaches are already present
    ///
    /// The satisfied set is the reachability closure of `installed_pkg`
    /// including itself; satisfied packages are treated as leaves and never
    /// emitted. A cycle confined to the satisfied set is not an error.
    pub fn to_install(
        &self,
        new_pkg: &str,
        installed_pkg: &str,
    ) -> Result<Vec<String>, ResolveError> {
        if !self.graph.contains(new_pkg) {
            return Err(ResolveError::not_found(new_pkg));
        }
        if !self.graph.contains(installed_pkg) {
            return Err(ResolveError::not_found(installed_pkg));
        }
        let satisfied = self.reachable_from(installed_pkg);
        self.post_order_walk(&[new_pkg], Some(&satisfied))
    }

    /// One valid installation order covering every package in the graph
    ///
    /// Unlike the scoped queries this fails if a cycle exists anywhere: the
    /// scoped traversal is first swept independently from every vertex, then
    /// the order is produced in a single pass seeded with all source
    /// packages. Every vertex of an acyclic graph is reachable from some
    /// source, so the seeded pass covers the whole graph.
    pub fn installation_order_for_all(&self) -> Result<Vec<String>, ResolveError> {
        for &vertex in &self.graph.sorted_vertices() {
            self.post_order_walk(&[vertex], None)?;
        }
        let seeds = self.source_packages();
        self.post_order_walk(&seeds, None)
    }

    /// Packages nothing else depends on, in case-insensitive sorted order
    pub fn source_packages(&self) -> Vec<&str> {
        let mut depended_upon: HashSet<&str> = HashSet::new();
        for vertex in self.graph.vertices() {
            if let Some(neighbors) = self.graph.neighbors_of(vertex) {
                depended_upon.extend(neighbors.iter().map(String::as_str));
            }
        }
        self.graph
            .sorted_vertices()
            .into_iter()
            .filter(|label| !depended_upon.contains(label))
            .collect()
    }

    /// The package with the longest installation order, counting itself
    ///
    /// Ties resolve to the case-insensitively smaller label. Returns `None`
    /// on an empty graph. Errors raised while scanning (a cycle reachable
    /// from any vertex) propagate instead of being skipped.
    pub fn package_with_max_dependencies(&self) -> Result<Option<String>, ResolveError> {
        let mut best_count = 0;
        let mut best_label: Option<&str> = None;
        for vertex in self.graph.sorted_vertices() {
            let count = self.installation_order(vertex)?.len();
            if count > best_count {
                best_count = count;
                best_label = Some(vertex);
            }
        }
        Ok(best_label.map(str::to_string))
    }

    /// Installation-order length per package, in sorted order
    ///
    /// Convenience view over the ranking query, used for verbose reporting.
    pub fn dependency_counts(&self) -> Result<Vec<(String, usize)>, ResolveError> {
        let mut counts = Vec::with_capacity(self.graph.order());
        for vertex in self.graph.sorted_vertices() {
            let count = self.installation_order(vertex)?.len();
            counts.push((vertex.to_string(), count));
        }
        Ok(counts)
    }

    /// Vertices reachable from `start` along dependency edges, including
    /// `start` itself; insensitive to cycles
    fn reachable_from<'a>(&'a self, start: &'a str) -> HashSet<&'a str> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut stack = vec![start];
        seen.insert(start);
        while let Some(current) = stack.pop() {
            if let Some(neighbors) = self.graph.neighbors_of(current) {
                for succ in neighbors {
                    if seen.insert(succ.as_str()) {
                        stack.push(succ.as_str());
                    }
                }
            }
        }
        seen
    }

    /// Shared iterative post-order traversal
    ///
    /// Seeds are pushed in the order given and marked visited up front.
    /// Successors are scanned in the graph's sorted neighbor order. A
    /// successor in `satisfied` is treated as a leaf: never descended into,
    /// never emitted. A successor already on the active path is a back edge
    /// and fails the walk with the looping portion of the path.
    fn post_order_walk<'a>(
        &'a self,
        seeds: &[&'a str],
        satisfied: Option<&HashSet<&'a str>>,
    ) -> Result<Vec<String>, ResolveError> {
        let mut visited: HashSet<&str> = HashSet::new();
        let mut on_path: HashSet<&str> = HashSet::new();
        let mut path: Vec<Frame> = Vec::new();
        let mut order: Vec<String> = Vec::new();

        for &seed in seeds {
            if satisfied.is_some_and(|set| set.contains(seed)) {
                continue;
            }
            visited.insert(seed);
            on_path.insert(seed);
            path.push(Frame {
                label: seed,
                next: 0,
            });
        }

        while let Some(top) = path.last_mut() {
            let label = top.label;
            let neighbors = self.graph.neighbors_of(label).unwrap_or(&[]);

            if top.next < neighbors.len() {
                let succ = neighbors[top.next].as_str();
                top.next += 1;

                if satisfied.is_some_and(|set| set.contains(succ)) {
                    continue;
                }
                if !visited.contains(succ) {
                    visited.insert(succ);
                    on_path.insert(succ);
                    path.push(Frame {
                        label: succ,
                        next: 0,
                    });
                } else if on_path.contains(succ) {
                    let looped: Vec<String> = path
                        .iter()
                        .skip_while(|frame| frame.label != succ)
                        .map(|frame| frame.label.to_string())
                        .collect();
                    return Err(ResolveError::cycle(looped));
                }
                // Otherwise the successor is finished; keep scanning.
                continue;
            }

            // All successors handled: the vertex is finished.
            on_path.remove(label);
            order.push(label.to_string());
            path.pop();
        }

        Ok(order)
    }
}
