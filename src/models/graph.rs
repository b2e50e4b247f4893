//! Vertex, edge and graph types.
//!
//! Edges live in a central arena owned by [`Graph`]; vertices refer to their
//! incoming and outgoing edges by [`EdgeId`] rather than by reference.

use std::collections::HashMap;
use std::fmt;

use crate::error::{Result, TspError};

use super::Point;

/// Stable handle to a vertex. Never reused within one graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub u64);

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Stable handle to an edge. Never reused within one graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub u64);

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// A located vertex.
///
/// `index` is the vertex's position in [`Graph::vertices`] and doubles as its
/// row/column in a [`DistanceMatrix`](crate::distance::DistanceMatrix).
/// Removing an earlier vertex shifts it down.
#[derive(Debug, Clone)]
pub struct Vertex {
    id: VertexId,
    index: usize,
    name: String,
    point: Point,
    outgoing: Vec<EdgeId>,
    incoming: Vec<EdgeId>,
}

impl Vertex {
    /// Stable handle.
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Dense position in the graph.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Location of this vertex.
    pub fn point(&self) -> Point {
        self.point
    }

    /// Edges starting at this vertex.
    pub fn outgoing(&self) -> &[EdgeId] {
        &self.outgoing
    }

    /// Edges ending at this vertex.
    pub fn incoming(&self) -> &[EdgeId] {
        &self.incoming
    }
}

/// A directed weighted edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    id: EdgeId,
    start: VertexId,
    end: VertexId,
    weight: f64,
}

impl Edge {
    /// Default weight for edges added without one.
    pub const DEFAULT_WEIGHT: f64 = 1.0;

    /// Stable handle.
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// Start vertex.
    pub fn start(&self) -> VertexId {
        self.start
    }

    /// End vertex.
    pub fn end(&self) -> VertexId {
        self.end
    }

    /// Edge weight.
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// A directed graph of located vertices.
///
/// Vertices and edges are stored in insertion order. Lookups are linear
/// scans; vertex names are not required to be unique.
///
/// # Examples
///
/// ```
/// use u_tsp::models::{Graph, Point};
///
/// let mut g = Graph::new();
/// let a = g.add_vertex("a", Point::new(0.0, 0.0));
/// let b = g.add_vertex("b", Point::new(1.0, 0.0));
/// let e = g.add_weighted_edge(a, b, 2.5).unwrap();
///
/// assert_eq!(g.edge_by_vertices(a, b).map(|e| e.id()), Some(e));
/// assert!(g.edge_by_vertices(b, a).is_none());
///
/// g.remove_vertex(a).unwrap();
/// assert_eq!(g.edge_count(), 0);
/// assert_eq!(g.vertex_by_name("b").unwrap().index(), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    next_vertex: u64,
    next_edge: u64,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a vertex and returns its handle.
    pub fn add_vertex(&mut self, name: impl Into<String>, point: Point) -> VertexId {
        let id = VertexId(self.next_vertex);
        self.next_vertex += 1;
        self.vertices.push(Vertex {
            id,
            index: self.vertices.len(),
            name: name.into(),
            point,
            outgoing: Vec::new(),
            incoming: Vec::new(),
        });
        id
    }

    /// Removes a vertex together with every edge that starts or ends at it.
    ///
    /// Indices of the vertices after it shift down by one, so any
    /// distance matrix built earlier is stale afterwards.
    pub fn remove_vertex(&mut self, id: VertexId) -> Result<Vertex> {
        let pos = self
            .position_of(id)
            .ok_or_else(|| TspError::VertexNotFound(id.to_string()))?;

        let mut attached: Vec<EdgeId> = self.vertices[pos].outgoing.clone();
        attached.extend(self.vertices[pos].incoming.iter().copied());
        attached.sort_unstable();
        attached.dedup();
        for edge in attached {
            self.remove_edge(edge)?;
        }

        let vertex = self.vertices.remove(pos);
        for (index, v) in self.vertices.iter_mut().enumerate().skip(pos) {
            v.index = index;
        }
        log::debug!(
            "graph: removed vertex id={} remaining={}",
            vertex.id,
            self.vertices.len()
        );
        Ok(vertex)
    }

    /// Adds an edge with the default weight of 1.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId) -> Result<EdgeId> {
        self.add_weighted_edge(from, to, Edge::DEFAULT_WEIGHT)
    }

    /// Adds a directed edge `from → to`.
    ///
    /// Parallel edges are allowed; use [`connect`](Self::connect) to keep at
    /// most one edge per ordered pair.
    pub fn add_weighted_edge(
        &mut self,
        from: VertexId,
        to: VertexId,
        weight: f64,
    ) -> Result<EdgeId> {
        let from_pos = self
            .position_of(from)
            .ok_or_else(|| TspError::VertexNotFound(from.to_string()))?;
        let to_pos = self
            .position_of(to)
            .ok_or_else(|| TspError::VertexNotFound(to.to_string()))?;
        Ok(self.push_edge(from_pos, to_pos, weight))
    }

    /// Adds an edge between two vertices looked up by name.
    pub fn add_edge_by_name(&mut self, from: &str, to: &str, weight: f64) -> Result<EdgeId> {
        let from_id = self
            .vertex_by_name(from)
            .map(Vertex::id)
            .ok_or_else(|| TspError::VertexNotFound(from.to_string()))?;
        let to_id = self
            .vertex_by_name(to)
            .map(Vertex::id)
            .ok_or_else(|| TspError::VertexNotFound(to.to_string()))?;
        self.add_weighted_edge(from_id, to_id, weight)
    }

    /// Sets the weight of the `from → to` edge, adding the edge if absent.
    pub fn connect(&mut self, from: VertexId, to: VertexId, weight: f64) -> Result<EdgeId> {
        if let Some(edge) = self
            .edges
            .iter_mut()
            .find(|e| e.start == from && e.end == to)
        {
            edge.weight = weight;
            return Ok(edge.id);
        }
        self.add_weighted_edge(from, to, weight)
    }

    /// Removes an edge and detaches it from both endpoints.
    pub fn remove_edge(&mut self, id: EdgeId) -> Result<Edge> {
        let pos = self
            .edges
            .iter()
            .position(|e| e.id == id)
            .ok_or(TspError::EdgeNotFound(id))?;
        let edge = self.edges.remove(pos);

        if let Some(start) = self.vertices.iter_mut().find(|v| v.id == edge.start) {
            start.outgoing.retain(|&e| e != id);
        }
        if let Some(end) = self.vertices.iter_mut().find(|v| v.id == edge.end) {
            end.incoming.retain(|&e| e != id);
        }
        Ok(edge)
    }

    /// Returns the vertex with the given handle.
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.iter().find(|v| v.id == id)
    }

    /// Returns the vertex at a dense index.
    pub fn vertex_at(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    /// Returns the first vertex with the given name.
    pub fn vertex_by_name(&self, name: &str) -> Option<&Vertex> {
        self.vertices.iter().find(|v| v.name == name)
    }

    /// Returns the edge with the given handle.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }

    /// Returns the first edge going `from → to`.
    pub fn edge_by_vertices(&self, from: VertexId, to: VertexId) -> Option<&Edge> {
        self.edges.iter().find(|e| e.start == from && e.end == to)
    }

    /// Edges leaving a vertex. Empty if the vertex is unknown.
    pub fn outgoing_edges(&self, id: VertexId) -> impl Iterator<Item = &Edge> + '_ {
        self.vertex(id)
            .map(|v| v.outgoing.as_slice())
            .unwrap_or_default()
            .iter()
            .filter_map(move |&e| self.edge(e))
    }

    /// Edges entering a vertex. Empty if the vertex is unknown.
    pub fn incoming_edges(&self, id: VertexId) -> impl Iterator<Item = &Edge> + '_ {
        self.vertex(id)
            .map(|v| v.incoming.as_slice())
            .unwrap_or_default()
            .iter()
            .filter_map(move |&e| self.edge(e))
    }

    /// All vertices in index order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Upserts `(from, to, weight)` edges given by vertex index.
    ///
    /// Same result as calling [`connect`](Self::connect) for each triple, but
    /// existing edges are indexed once, so the cost is linear in the number
    /// of edges plus triples. Indices must be below `vertex_count()`.
    pub(crate) fn connect_all<I>(&mut self, weights: I)
    where
        I: IntoIterator<Item = (usize, usize, f64)>,
    {
        let mut slots: HashMap<(VertexId, VertexId), usize> =
            HashMap::with_capacity(self.edges.len());
        for (slot, edge) in self.edges.iter().enumerate() {
            slots.entry((edge.start, edge.end)).or_insert(slot);
        }

        for (from_pos, to_pos, weight) in weights {
            let key = (self.vertices[from_pos].id, self.vertices[to_pos].id);
            match slots.get(&key) {
                Some(&slot) => self.edges[slot].weight = weight,
                None => {
                    slots.insert(key, self.edges.len());
                    self.push_edge(from_pos, to_pos, weight);
                }
            }
        }
    }

    fn push_edge(&mut self, from_pos: usize, to_pos: usize, weight: f64) -> EdgeId {
        let id = EdgeId(self.next_edge);
        self.next_edge += 1;
        self.edges.push(Edge {
            id,
            start: self.vertices[from_pos].id,
            end: self.vertices[to_pos].id,
            weight,
        });
        self.vertices[from_pos].outgoing.push(id);
        self.vertices[to_pos].incoming.push(id);
        id
    }

    fn position_of(&self, id: VertexId) -> Option<usize> {
        self.vertices.iter().position(|v| v.id == id)
    }
}
