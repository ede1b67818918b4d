//! Generic directed graph with dense vertex indices.
//!
//! Vertices carry an arbitrary payload and are addressed by the index
//! assigned at insertion (`0..N-1`, never reused within a graph's lifetime).
//! Edges are weighted and stored in per-source adjacency lists whose
//! insertion order is preserved, which keeps every traversal deterministic.
//!
//! Graph primitives assume valid indices: handing them an out-of-range index
//! is a precondition violation and panics rather than returning an error.
//! Callers that accept untrusted references (such as the layout solver)
//! validate names before touching the graph.

mod paths;

pub use paths::{BellmanFord, ShortestPath};

/// Edge weight. [`INFINITE`] is the "unreachable" sentinel.
pub type Weight = i64;

/// Maximum representable weight, used as the unreachable distance.
///
/// Relaxation loops must treat it as absorbing: never add to a distance that
/// is still `INFINITE`, or the sum would wrap to a small value.
pub const INFINITE: Weight = Weight::MAX;

/// Directed, weighted connection between two vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub source: usize,
    pub destination: usize,
    pub weight: Weight,
}

impl Edge {
    pub fn new(source: usize, destination: usize, weight: Weight) -> Self {
        Self {
            source,
            destination,
            weight,
        }
    }
}

/// A vertex: stable index plus payload.
#[derive(Debug, Clone)]
pub struct Vertex<T> {
    index: usize,
    pub value: T,
}

impl<T> Vertex<T> {
    /// The index assigned at insertion.
    pub fn index(&self) -> usize {
        self.index
    }
}

/// Directed graph over payloads of type `T`.
#[derive(Debug, Clone, Default)]
pub struct DirectedGraph<T> {
    vertices: Vec<Vertex<T>>,
    edges: Vec<Vec<Edge>>,
    edge_count: usize,
}

impl<T> DirectedGraph<T> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            edge_count: 0,
        }
    }

    /// Create a graph whose vertices hold `values`, with no edges.
    pub fn from_values(values: Vec<T>) -> Self {
        let mut graph = Self::new();
        for value in values {
            graph.push_vertex(value);
        }
        graph
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges across all adjacency lists.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// `true` if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Append a vertex, returning its new index. Amortized O(1).
    pub fn push_vertex(&mut self, value: T) -> usize {
        let index = self.vertices.len();
        self.vertices.push(Vertex { index, value });
        self.edges.push(Vec::new());
        index
    }

    /// Append an edge to `source`'s adjacency list.
    ///
    /// # Panics
    ///
    /// Panics if `source` is out of range. `destination` must also reference
    /// an existing vertex; traversals assume it without checking.
    pub fn push_edge(&mut self, source: usize, destination: usize, weight: Weight) {
        self.edges[source].push(Edge::new(source, destination, weight));
        self.edge_count += 1;
    }

    /// The vertex at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn vertex(&self, index: usize) -> &Vertex<T> {
        &self.vertices[index]
    }

    /// Mutable access to the vertex at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn vertex_mut(&mut self, index: usize) -> &mut Vertex<T> {
        &mut self.vertices[index]
    }

    /// All vertices in index order.
    pub fn vertices(&self) -> &[Vertex<T>] {
        &self.vertices
    }

    /// Outgoing edges of `source`, in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `source` is out of range.
    pub fn edges_from(&self, source: usize) -> &[Edge] {
        &self.edges[source]
    }

    /// Drop all vertices and edges. Indices restart from zero.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
        self.edge_count = 0;
    }

    /// Depth-first postorder covering every vertex.
    ///
    /// Runs a DFS from `start`, then from each still-unvisited vertex in
    /// ascending index order; a vertex is appended when its DFS completes.
    /// Reversing the sequence yields a topological order only if the graph
    /// is acyclic — the caller is responsible for certifying acyclicity
    /// first (see [`DirectedGraph::strongly_connected`]).
    ///
    /// Returns an empty sequence on an empty graph.
    ///
    /// # Panics
    ///
    /// Panics if `start` is out of range on a non-empty graph.
    pub fn postorder(&self, start: usize) -> Vec<usize> {
        if self.vertices.is_empty() {
            return Vec::new();
        }
        let mut visited = vec![false; self.vertices.len()];
        let mut order = Vec::with_capacity(self.vertices.len());
        self.postorder_from(start, &mut visited, &mut order);
        for index in 0..self.vertices.len() {
            self.postorder_from(index, &mut visited, &mut order);
        }
        order
    }

    /// One DFS tree rooted at `start`, appended to `order` in postorder.
    ///
    /// Uses an explicit stack so long dependency chains cannot overflow the
    /// call stack; the visit order is identical to the recursive form.
    fn postorder_from(&self, start: usize, visited: &mut [bool], order: &mut Vec<usize>) {
        if visited[start] {
            return;
        }
        visited[start] = true;
        let mut stack: Vec<(usize, usize)> = vec![(start, 0)];
        while let Some(frame) = stack.last_mut() {
            let (vertex, cursor) = *frame;
            if let Some(edge) = self.edges[vertex].get(cursor) {
                frame.1 += 1;
                if !visited[edge.destination] {
                    visited[edge.destination] = true;
                    stack.push((edge.destination, 0));
                }
            } else {
                order.push(vertex);
                stack.pop();
            }
        }
    }
}

impl<T: Clone> DirectedGraph<T> {
    /// A new graph with the same vertices and every edge reversed.
    pub fn transpose(&self) -> Self {
        let mut reversed = Self {
            vertices: self.vertices.clone(),
            edges: vec![Vec::new(); self.vertices.len()],
            edge_count: 0,
        };
        for edges in &self.edges {
            for edge in edges {
                reversed.push_edge(edge.destination, edge.source, edge.weight);
            }
        }
        reversed
    }

    /// Kosaraju strongly-connected components.
    ///
    /// Returns the condensation: one vertex per component holding the member
    /// payload values (in the order the component DFS finished them), and the
    /// original edges remapped to component indices. Edges internal to a
    /// component become self-loops and parallel edges are kept as-is, so the
    /// input graph is acyclic exactly when no condensation edge is a
    /// self-loop.
    pub fn strongly_connected(&self) -> DirectedGraph<Vec<T>> {
        let mut condensation = DirectedGraph::new();
        let order = self.postorder(0);
        let transposed = self.transpose();
        let mut component = vec![0usize; self.vertices.len()];
        let mut visited = vec![false; self.vertices.len()];

        for &index in order.iter().rev() {
            let mut members = Vec::new();
            transposed.postorder_from(index, &mut visited, &mut members);
            if members.is_empty() {
                continue;
            }
            let values = members
                .iter()
                .map(|&member| self.vertices[member].value.clone())
                .collect();
            let component_index = condensation.push_vertex(values);
            for &member in &members {
                component[member] = component_index;
            }
        }

        for edges in &self.edges {
            for edge in edges {
                condensation.push_edge(
                    component[edge.source],
                    component[edge.destination],
                    edge.weight,
                );
            }
        }
        condensation
    }
}
