//! Dependency graph and installation-order resolution
//!
//! This module provides the directed dependency graph and the resolver that
//! answers installation-order, delta, and ranking queries over it.

pub mod graph;
pub mod resolver;

pub use graph::{compare_labels, DependencyGraph};
pub use resolver::DependencyResolver;
