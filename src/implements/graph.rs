//! # Directed Graph
//!
//! A small arena-backed adjacency list. Vertices are keyed by value, so
//! registering the same value twice hands back the vertex that already
//! exists. Edges point from one vertex id to another.

use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Index of a vertex inside its graph's arena.
pub struct VertexId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// A directed edge between two vertices of the same graph.
pub struct Edge {
    pub source: VertexId,
    pub destination: VertexId,
}

#[derive(Debug, Clone)]
pub struct DirectedGraph<T> {
    vertices: Vec<T>,
    index: HashMap<T, VertexId>,
    adjacency: Vec<Vec<Edge>>,
}

impl<T> Default for DirectedGraph<T> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
        }
    }
}

impl<T: Eq + Hash + Clone> DirectedGraph<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `data` as a vertex. Idempotent: an already known value
    /// returns its existing id.
    pub fn create_vertex(&mut self, data: T) -> VertexId {
        if let Some(id) = self.index.get(&data) {
            return *id;
        }
        let id = VertexId(self.vertices.len());
        self.vertices.push(data.clone());
        self.adjacency.push(Vec::new());
        self.index.insert(data, id);
        id
    }

    /// Appends an edge. Adding the same edge twice keeps both copies.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId) {
        self.adjacency[from.0].push(Edge {
            source: from,
            destination: to,
        });
    }

    /// Outgoing edges of `data`, in insertion order. Empty for unknown values.
    pub fn edges_from(&self, data: &T) -> &[Edge] {
        match self.index.get(data) {
            Some(id) => &self.adjacency[id.0],
            None => &[],
        }
    }

    /// Values reachable from `data` over a single edge.
    pub fn destinations<'a>(&'a self, data: &T) -> impl Iterator<Item = &'a T> + 'a {
        self.edges_from(data)
            .iter()
            .map(move |edge| &self.vertices[edge.destination.0])
    }

    pub fn has_edge(&self, from: &T, to: &T) -> bool {
        match self.index.get(to) {
            Some(to_id) => self
                .edges_from(from)
                .iter()
                .any(|edge| edge.destination == *to_id),
            None => false,
        }
    }

    pub fn vertex(&self, id: VertexId) -> &T {
        &self.vertices[id.0]
    }

    pub fn contains(&self, data: &T) -> bool {
        self.index.contains_key(data)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}
