//! Single-source shortest paths over weighted directed graphs
//!
//! Two solvers share the same result type:
//!
//! - [`ToposortDagSolver`] relaxes edges in topological order. It only works
//!   on directed acyclic graphs but accepts negative weights, and keeps its
//!   distances in a plain map without any priority queue.
//! - [`DijkstraSolver`] uses [`OptimizedHeapMinPq`] as its frontier and calls
//!   `change_priority` whenever a shorter path to a queued vertex is found.
//!   Edge weights must be non-negative.
//!
//! # Example
//!
//! ```rust
//! use minpq::shortest_paths::{AdjacencyListGraph, DijkstraSolver, ShortestPathSolver};
//!
//! let mut graph = AdjacencyListGraph::new();
//! graph.add_edge('a', 'b', 4.0);
//! graph.add_edge('a', 'c', 1.0);
//! graph.add_edge('c', 'b', 2.0);
//!
//! let solver = DijkstraSolver::new(&graph, 'a').unwrap();
//! assert_eq!(solver.solution(&'b'), vec!['a', 'c', 'b']);
//! assert_eq!(solver.distance(&'b'), Some(3.0));
//! ```

use crate::optimized_heap::OptimizedHeapMinPq;
use crate::traits::{check_priority, MinPq, PqError};
use rustc_hash::{FxHashMap, FxHashSet};
use std::hash::Hash;
use thiserror::Error;
use tracing::debug;

/// Errors from building a shortest path solver
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// The frontier queue rejected an operation, e.g. a NaN distance
    #[error(transparent)]
    Queue(#[from] PqError),

    /// Dijkstra reached an edge with a weight below zero
    #[error("negative edge weight")]
    NegativeWeight,
}

/// A directed, weighted edge
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<V> {
    pub from: V,
    pub to: V,
    pub weight: f64,
}

/// A directed graph that can list the outgoing edges of a vertex
pub trait Graph<V> {
    /// Returns the edges leaving `vertex`, empty if it has none or is unknown
    fn neighbors(&self, vertex: &V) -> &[Edge<V>];
}

/// A graph stored as a map from each vertex to its outgoing edges
#[derive(Debug, Clone)]
pub struct AdjacencyListGraph<V: Eq + Hash> {
    adjacency: FxHashMap<V, Vec<Edge<V>>>,
}

impl<V: Eq + Hash + Clone> AdjacencyListGraph<V> {
    /// Creates an empty graph
    pub fn new() -> Self {
        Self {
            adjacency: FxHashMap::default(),
        }
    }

    /// Adds a directed edge, registering both endpoints as vertices
    pub fn add_edge(&mut self, from: V, to: V, weight: f64) {
        self.adjacency.entry(to.clone()).or_default();
        self.adjacency
            .entry(from.clone())
            .or_default()
            .push(Edge { from, to, weight });
    }

    /// Number of distinct vertices
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}

impl<V: Eq + Hash + Clone> Default for AdjacencyListGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Eq + Hash> Graph<V> for AdjacencyListGraph<V> {
    fn neighbors(&self, vertex: &V) -> &[Edge<V>] {
        self.adjacency.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Answers path queries from the start vertex a solver was built with
pub trait ShortestPathSolver<V> {
    /// Returns the vertices on the shortest path from the start to `goal`,
    /// both inclusive
    ///
    /// If `goal` is unreachable the result is just `[goal]`.
    fn solution(&self, goal: &V) -> Vec<V>;

    /// Returns the length of the shortest path to `goal`, `None` if unreachable
    fn distance(&self, goal: &V) -> Option<f64>;
}

/// Best known distance and last edge for each reached vertex
#[derive(Debug, Clone)]
struct ShortestPathTree<V: Eq + Hash> {
    dist_to: FxHashMap<V, f64>,
    edge_to: FxHashMap<V, Edge<V>>,
}

impl<V: Eq + Hash + Clone> ShortestPathTree<V> {
    fn new() -> Self {
        Self {
            dist_to: FxHashMap::default(),
            edge_to: FxHashMap::default(),
        }
    }

    fn best(&self, vertex: &V) -> f64 {
        self.dist_to.get(vertex).copied().unwrap_or(f64::INFINITY)
    }

    /// Records `edge` as the new best way into its target if it improves on
    /// the current distance. Returns the new distance when it does.
    fn relax(&mut self, edge: &Edge<V>) -> Option<f64> {
        let candidate = self.best(&edge.from) + edge.weight;
        if self.best(&edge.to) > candidate {
            self.dist_to.insert(edge.to.clone(), candidate);
            self.edge_to.insert(edge.to.clone(), edge.clone());
            Some(candidate)
        } else {
            None
        }
    }

    /// Walks predecessor edges back from `goal`
    ///
    /// Stops at the first repeated vertex, so a cycle left in `edge_to` by a
    /// negative cycle still yields a finite path.
    fn path_to(&self, goal: &V) -> Vec<V> {
        let mut path = vec![goal.clone()];
        let mut seen = FxHashSet::default();
        seen.insert(goal);
        let mut current = goal;
        while let Some(edge) = self.edge_to.get(current) {
            if !seen.insert(&edge.from) {
                break;
            }
            path.push(edge.from.clone());
            current = &edge.from;
        }
        path.reverse();
        path
    }

    fn distance(&self, goal: &V) -> Option<f64> {
        self.dist_to.get(goal).copied().filter(|d| d.is_finite())
    }
}

/// Shortest paths on a directed acyclic graph by relaxing vertices in
/// topological order
///
/// On a graph with cycles, negative cycles included, distances and paths are
/// not guaranteed to be optimal, but `solution` always returns a finite path
/// without repeated vertices.
#[derive(Debug, Clone)]
pub struct ToposortDagSolver<V: Eq + Hash> {
    tree: ShortestPathTree<V>,
}

impl<V: Eq + Hash + Clone> ToposortDagSolver<V> {
    /// Computes shortest paths from `start` to every vertex reachable from it
    pub fn new<G: Graph<V>>(graph: &G, start: V) -> Self {
        let mut order = dfs_post_order(graph, &start);
        order.reverse();

        let mut tree = ShortestPathTree::new();
        for vertex in &order {
            tree.dist_to.insert(vertex.clone(), f64::INFINITY);
        }
        tree.dist_to.insert(start, 0.0);

        for vertex in &order {
            if tree.best(vertex) < f64::INFINITY {
                for edge in graph.neighbors(vertex) {
                    tree.relax(edge);
                }
            }
        }

        debug!(reached = order.len(), "computed DAG shortest paths");
        Self { tree }
    }
}

impl<V: Eq + Hash + Clone> ShortestPathSolver<V> for ToposortDagSolver<V> {
    fn solution(&self, goal: &V) -> Vec<V> {
        self.tree.path_to(goal)
    }

    fn distance(&self, goal: &V) -> Option<f64> {
        self.tree.distance(goal)
    }
}

/// Vertices reachable from `start` in DFS post-order
///
/// Uses an explicit stack so deep graphs cannot overflow the call stack.
fn dfs_post_order<V, G>(graph: &G, start: &V) -> Vec<V>
where
    V: Eq + Hash + Clone,
    G: Graph<V>,
{
    let mut visited = FxHashSet::default();
    let mut order = Vec::new();
    // (vertex, index of the next outgoing edge to follow)
    let mut stack = vec![(start.clone(), 0usize)];
    visited.insert(start.clone());

    while let Some((vertex, next)) = stack.last_mut() {
        let edges = graph.neighbors(vertex);
        if *next < edges.len() {
            let to = edges[*next].to.clone();
            *next += 1;
            if visited.insert(to.clone()) {
                stack.push((to, 0));
            }
        } else if let Some((done, _)) = stack.pop() {
            order.push(done);
        }
    }

    order
}

/// Dijkstra's algorithm with an indexed heap as the frontier
#[derive(Debug, Clone)]
pub struct DijkstraSolver<V: Eq + Hash> {
    tree: ShortestPathTree<V>,
}

impl<V: Eq + Hash + Clone> DijkstraSolver<V> {
    /// Computes shortest paths from `start` to every vertex reachable from it
    ///
    /// A vertex is never revisited once it has been removed from the
    /// frontier, including through a self-loop.
    ///
    /// # Errors
    /// - [`PathError::NegativeWeight`] if a reached edge has a weight below zero
    /// - [`PathError::Queue`] with [`PqError::InvalidPriority`] if a reached
    ///   edge has a NaN weight
    pub fn new<G: Graph<V>>(graph: &G, start: V) -> Result<Self, PathError> {
        let mut tree = ShortestPathTree::new();
        let mut frontier: OptimizedHeapMinPq<V> = OptimizedHeapMinPq::new();
        let mut settled = FxHashSet::default();

        tree.dist_to.insert(start.clone(), 0.0);
        frontier.add(start, 0.0)?;

        while !frontier.is_empty() {
            let vertex = frontier.remove_min()?;
            settled.insert(vertex.clone());
            for edge in graph.neighbors(&vertex) {
                check_priority(edge.weight)?;
                if edge.weight < 0.0 {
                    return Err(PathError::NegativeWeight);
                }
                if settled.contains(&edge.to) {
                    continue;
                }
                if let Some(distance) = tree.relax(edge) {
                    frontier.add_or_change_priority(edge.to.clone(), distance)?;
                }
            }
        }

        debug!(settled = settled.len(), "computed Dijkstra shortest paths");
        Ok(Self { tree })
    }
}

impl<V: Eq + Hash + Clone> ShortestPathSolver<V> for DijkstraSolver<V> {
    fn solution(&self, goal: &V) -> Vec<V> {
        self.tree.path_to(goal)
    }

    fn distance(&self, goal: &V) -> Option<f64> {
        self.tree.distance(goal)
    }
}
