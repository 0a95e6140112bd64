use bit_set::BitSet;

use crate::dimacs::read_from_file;
use crate::error::Result;

/** Vertex Id */
pub type VertexId = usize;

/** models an undirected graph (symmetric adjacency, no self loops).

The search procedures only look for sets of vertices that are pairwise non-adjacent.
To search for a maximum clique, give them the complement graph (see [`Graph::complement`]).
*/
#[derive(Debug, Clone)]
pub struct Graph {
    /// nb vertices
    n: usize,
    /// nb edges
    m: usize,
    /// adj_list[i]: list of vertices adjacent to i
    adj_list: Vec<Vec<VertexId>>,
    /// if exists: adj_matrix[i] represents a bitset of its neighbors
    adj_matrix: Option<Vec<BitSet>>,
}


impl Graph {

    /** constructor using an adjacency list.
    The caller must provide a symmetric list without self loops: it is only checked in debug
    builds, and the neighbor counts maintained by the searches are wrong otherwise.
    */
    pub fn new(adj_list:Vec<Vec<VertexId>>) -> Self {
        let n = adj_list.len();
        // compute nb edges
        let mut m = 0;
        for e in &adj_list { // at the end: m = ∑ d(v)
            m += e.len();
        }
        debug_assert!(m % 2 == 0, "adjacency list is not symmetric");
        m /= 2; // m = (∑ d(v)) / 2
        debug_assert!(
            adj_list.iter().enumerate().all(|(i,l)| l.iter().all(|j| *j != i && adj_list[*j].contains(&i))),
            "adjacency list must be symmetric and loopless"
        );
        Self { n, m, adj_list, adj_matrix:None }
    }

    /** constructor using an edge list. Self loops and duplicated edges are ignored.
    Vertex ids must be smaller than n (panics otherwise).
    */
    pub fn from_edges(n:usize, edges:&[(VertexId,VertexId)]) -> Self {
        let mut seen = vec![BitSet::with_capacity(n) ; n];
        let mut adj_list = vec![Vec::new() ; n];
        for (a,b) in edges {
            let (a,b) = (*a,*b);
            assert!(a < n && b < n, "edge ({},{}) out of range (n={})", a, b, n);
            if a == b || seen[a].contains(b) { continue; }
            seen[a].insert(b);
            seen[b].insert(a);
            adj_list[a].push(b);
            adj_list[b].push(a);
        }
        let mut res = Self::new(adj_list);
        res.adj_matrix = Some(seen);
        res
    }

    /// creates an instance from a DIMACS file
    pub fn from_file(filename:&str) -> Result<Self> {
        let (n, edges) = read_from_file(filename)?;
        Ok(Self::from_edges(n, &edges))
    }

    /// number of vertices
    pub fn nb_vertices(&self) -> usize { self.n }

    /// number of edges
    pub fn nb_edges(&self) -> usize { self.m }

    /// iterator over the vertices
    pub fn vertices(&self) -> std::ops::Range<VertexId> { 0..self.n }

    /// list of vertices adjacent to vertex u
    pub fn neighbors(&self, u:VertexId) -> &[VertexId] { &self.adj_list[u] }

    /// degree of vertex u
    pub fn degree(&self, u:VertexId) -> usize { self.adj_list[u].len() }

    /// degree of every vertex
    pub fn degrees(&self) -> Vec<usize> {
        self.vertices().map(|u| self.degree(u)).collect()
    }

    /** returns if a and b are adjacent
    if the adjacency matrix is defined: O(1)
    otherwise: O(Δ(G))
    */
    pub fn are_adjacent(&self, a:VertexId, b:VertexId) -> bool {
        match &self.adj_matrix {
            None => { self.adj_list[a].iter().any(|c| &b==c) },
            Some(matrix) => { matrix[a].contains(b) }
        }
    }

    /// if called, populate the adj_matrix
    pub fn populate_adj_matrix(&mut self) {
        let mut res = vec![BitSet::with_capacity(self.n); self.n];
        for (a,resa) in res.iter_mut().enumerate() {
            for b in &self.adj_list[a] {
                resa.insert(*b);
            }
        }
        self.adj_matrix = Some(res);
    }

    /** builds the complement graph: u and v are adjacent in the complement iff they are
    distinct and not adjacent here. Stable sets of the complement are the cliques of self.
    */
    pub fn complement(&self) -> Self {
        let mut adj_list = vec![Vec::new() ; self.n];
        for (u,l) in adj_list.iter_mut().enumerate() {
            for v in self.vertices() {
                if u != v && !self.are_adjacent(u, v) {
                    l.push(v);
                }
            }
        }
        let mut res = Self::new(adj_list);
        res.populate_adj_matrix();
        res
    }

    /// print statistics of the instance
    pub fn display_statistics(&self) {
        println!("\t{} \t vertices", self.nb_vertices());
        println!("\t{} \t edges", self.nb_edges());
        let degrees = self.degrees();
        if let (Some(min), Some(max)) = (degrees.iter().min(), degrees.iter().max()) {
            println!("\t{} \t min degree", min);
            println!("\t{} \t max degree", max);
        }
        match self.adj_matrix {
            None => {},
            Some(_) => println!("\tadj matrix computed")
        }
    }
}

/**
returns None if the solution contains two adjacent vertices (or a vertex twice)
returns the number of vertices if the solution is a stable set
*/
pub fn checker(graph:&Graph, sol:&[VertexId]) -> Option<usize> {
    let mut visited = BitSet::with_capacity(graph.nb_vertices());
    for v in sol {
        if *v >= graph.nb_vertices() || visited.contains(*v) {
            return None;
        }
        visited.insert(*v);
    }
    for v in sol {
        if graph.neighbors(*v).iter().any(|u| visited.contains(*u)) {
            return None;
        }
    }
    Some(sol.len())
}
