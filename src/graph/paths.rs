//! Shortest-path algorithms over [`DirectedGraph`].
//!
//! All three share the same numeric contract: distances are [`Weight`]s,
//! unreachable means [`INFINITE`], and no relaxation ever adds to an
//! `INFINITE` distance (which would wrap below zero).

use crate::heap::PriorityQueue;

use super::{DirectedGraph, Weight, INFINITE};

/// Result of [`DirectedGraph::dijkstra`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath {
    /// Vertices from source to destination inclusive; empty when
    /// unreachable.
    pub path: Vec<usize>,
    /// Total weight along `path`, or [`INFINITE`] when unreachable.
    pub weight: Weight,
}

/// Result of [`DirectedGraph::bellman_ford`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BellmanFord {
    /// Predecessor of each vertex on its shortest path from the source;
    /// `None` for the source itself and for unreached vertices.
    pub parents: Vec<Option<usize>>,
    /// Shortest distance from the source to each vertex.
    pub distances: Vec<Weight>,
    /// `true` when a negative-weight cycle is reachable from the source,
    /// in which case `distances` on the cycle are meaningless.
    pub has_negative_cycle: bool,
}

impl<T> DirectedGraph<T> {
    /// Single-pair shortest path for non-negative edge weights.
    ///
    /// Keeps a min-priority frontier keyed by tentative distance. A vertex
    /// may be pushed several times; entries whose recorded weight exceeds
    /// the current best for that vertex are stale and skipped on pop
    /// instead of being removed eagerly.
    ///
    /// The result is undefined if any edge weight is negative.
    ///
    /// # Panics
    ///
    /// Panics if `source` or `destination` is out of range.
    pub fn dijkstra(&self, source: usize, destination: usize) -> ShortestPath {
        let mut distances = vec![INFINITE; self.vertex_count()];
        let mut parents: Vec<Option<usize>> = vec![None; self.vertex_count()];
        distances[source] = 0;

        let mut frontier =
            PriorityQueue::new(|left: &(usize, Weight), right: &(usize, Weight)| left.1 > right.1);
        frontier.push((source, 0));

        while let Some((vertex, weight)) = frontier.pop() {
            if weight > distances[vertex] {
                continue;
            }
            for edge in self.edges_from(vertex) {
                // Frontier entries are always finite, so the sum cannot wrap.
                let candidate = weight + edge.weight;
                if candidate < distances[edge.destination] {
                    distances[edge.destination] = candidate;
                    parents[edge.destination] = Some(vertex);
                    frontier.push((edge.destination, candidate));
                }
            }
        }

        if distances[destination] == INFINITE {
            return ShortestPath {
                path: Vec::new(),
                weight: INFINITE,
            };
        }
        let mut path = vec![destination];
        let mut cursor = destination;
        while let Some(parent) = parents[cursor] {
            path.push(parent);
            cursor = parent;
        }
        path.reverse();
        ShortestPath {
            path,
            weight: distances[destination],
        }
    }

    /// Single-source shortest paths tolerating negative edge weights.
    ///
    /// Runs `|V| - 1` relaxation rounds over every edge, then one
    /// verification pass; any edge still relaxable proves a negative cycle
    /// reachable from `source`.
    ///
    /// # Panics
    ///
    /// Panics if `source` is out of range.
    pub fn bellman_ford(&self, source: usize) -> BellmanFord {
        let mut distances = vec![INFINITE; self.vertex_count()];
        let mut parents: Vec<Option<usize>> = vec![None; self.vertex_count()];
        distances[source] = 0;

        for _ in 1..self.vertex_count() {
            for vertex in 0..self.vertex_count() {
                for edge in self.edges_from(vertex) {
                    if distances[edge.source] != INFINITE
                        && distances[edge.destination] > distances[edge.source] + edge.weight
                    {
                        distances[edge.destination] = distances[edge.source] + edge.weight;
                        parents[edge.destination] = Some(edge.source);
                    }
                }
            }
        }

        let mut has_negative_cycle = false;
        'verify: for vertex in 0..self.vertex_count() {
            for edge in self.edges_from(vertex) {
                if distances[edge.source] != INFINITE
                    && distances[edge.destination] > distances[edge.source] + edge.weight
                {
                    has_negative_cycle = true;
                    break 'verify;
                }
            }
        }

        BellmanFord {
            parents,
            distances,
            has_negative_cycle,
        }
    }

    /// All-pairs shortest distances.
    ///
    /// Returns a `|V| x |V|` matrix: zero on the diagonal, [`INFINITE`] for
    /// unreachable pairs. Parallel edges are collapsed by the last one seen.
    pub fn floyd_warshall(&self) -> Vec<Vec<Weight>> {
        let size = self.vertex_count();
        let mut matrix = vec![vec![INFINITE; size]; size];
        for vertex in 0..size {
            for edge in self.edges_from(vertex) {
                matrix[edge.source][edge.destination] = edge.weight;
            }
        }
        for diagonal in 0..size {
            matrix[diagonal][diagonal] = 0;
        }

        for via in 0..size {
            for from in 0..size {
                for to in 0..size {
                    if matrix[from][via] != INFINITE
                        && matrix[via][to] != INFINITE
                        && matrix[from][to] > matrix[from][via] + matrix[via][to]
                    {
                        matrix[from][to] = matrix[from][via] + matrix[via][to];
                    }
                }
            }
        }
        matrix
    }
}
