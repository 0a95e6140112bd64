use std::str::FromStr;

use bit_set::BitSet;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId};


/** stable set under construction during a plateau search.
Vertices are either in the solution (sol) or in the remainder (rmn).
*/
#[derive(Debug, Clone)]
pub struct PlateauState {
    /// vertices in the stable set
    pub sol: BitSet,
    /// vertices not in the stable set
    pub rmn: BitSet,
    /// b[v]: number of neighbors of v inside sol
    pub b: Vec<usize>,
    /// number of vertices in sol
    card: usize,
}

impl PlateauState {
    /// empty stable set over n vertices
    pub fn new(n:usize) -> Self {
        Self {
            sol: BitSet::with_capacity(n),
            rmn: (0..n).collect(),
            b: vec![0 ; n],
            card: 0,
        }
    }

    /// number of vertices in the stable set
    pub fn card(&self) -> usize { self.card }

    /// moves i from the remainder to the solution
    pub fn add_node(&mut self, graph:&Graph, i:VertexId) {
        debug_assert!(self.rmn.contains(i));
        self.sol.insert(i);
        self.rmn.remove(i);
        self.card += 1;
        for j in graph.neighbors(i) {
            self.b[*j] += 1;
        }
    }

    /// moves i from the solution to the remainder
    pub fn rm_node(&mut self, graph:&Graph, i:VertexId) {
        debug_assert!(self.sol.contains(i));
        self.rmn.insert(i);
        self.sol.remove(i);
        self.card -= 1;
        for j in graph.neighbors(i) {
            self.b[*j] -= 1;
        }
    }

    /// true iff i is in the remainder and can be added without creating a conflict
    pub fn is_free(&self, i:VertexId) -> bool {
        self.b[i] == 0 && self.rmn.contains(i)
    }

    /// remainder vertices that can be added without creating a conflict
    pub fn possible_add(&self) -> Vec<VertexId> {
        self.rmn.iter().filter(|i| self.b[*i] == 0).collect()
    }

    /// remainder vertices that would create exactly one conflict
    pub fn one_edge(&self) -> Vec<VertexId> {
        self.rmn.iter().filter(|i| self.b[*i] == 1).collect()
    }
}


/** how the next vertex is chosen when expanding a stable set */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpansionPolicy {
    /// uniformly among the candidates
    #[serde(rename = "rand")]
    Random,
    /// among the candidates of minimum degree in the graph
    #[serde(rename = "stat-deg")]
    StaticDegree,
    /// among the candidates having the fewest neighbors among the candidates
    #[serde(rename = "dyn-deg")]
    DynamicDegree,
}

impl ExpansionPolicy {
    /// every policy (used by the hybrid search)
    pub const ALL:[ExpansionPolicy ; 3] = [Self::Random, Self::StaticDegree, Self::DynamicDegree];

    /** adds candidates to the stable set (chosen according to the policy) until no candidate can
    be added or maxiter vertices were added. `add` is left with the remaining candidates.
    `degree` is the degree of each vertex in the graph (only used by StaticDegree).
    Returns the number of iterations used.
    */
    pub fn expand<R:Rng+?Sized>(
        &self,
        add:&mut Vec<VertexId>,
        state:&mut PlateauState,
        graph:&Graph,
        maxiter:usize,
        degree:&[usize],
        rng:&mut R,
    ) -> usize {
        match self {
            Self::Random => expand_rand(add, state, graph, maxiter, rng),
            Self::StaticDegree => expand_stat_deg(add, state, graph, maxiter, degree, rng),
            Self::DynamicDegree => expand_dyn_deg(add, state, graph, maxiter, rng),
        }
    }
}

impl FromStr for ExpansionPolicy {
    type Err = Error;

    fn from_str(s:&str) -> Result<Self> {
        match s {
            "rand" => Ok(Self::Random),
            "stat-deg" => Ok(Self::StaticDegree),
            "dyn-deg" => Ok(Self::DynamicDegree),
            _ => Err(Error::UnknownName {
                kind: "expansion policy",
                name: s.to_string(),
                valid: "rand, stat-deg, dyn-deg",
            })
        }
    }
}


/// removes duplicates and candidates that cannot be added
fn keep_free(add:&mut Vec<VertexId>, state:&PlateauState) {
    add.sort_unstable();
    add.dedup();
    add.retain(|i| state.is_free(*i));
}

/// index (in add) of a random candidate among the ones of minimum degree
fn choose_min_degree<R:Rng+?Sized>(add:&[VertexId], degree:&[usize], rng:&mut R) -> usize {
    let mut min_deg = usize::MAX;
    let mut cand:Vec<usize> = Vec::new();
    for (pos,i) in add.iter().enumerate() {
        if degree[*i] < min_deg {
            min_deg = degree[*i];
            cand.clear();
            cand.push(pos);
        } else if degree[*i] == min_deg {
            cand.push(pos);
        }
    }
    cand[rng.gen_range(0..cand.len())]
}

/// random expansion
pub fn expand_rand<R:Rng+?Sized>(
    add:&mut Vec<VertexId>, state:&mut PlateauState, graph:&Graph, maxiter:usize, rng:&mut R
) -> usize {
    keep_free(add, state);
    let mut iteration = 0;
    while !add.is_empty() && iteration < maxiter {
        iteration += 1;
        let pos = rng.gen_range(0..add.len());
        let i = add.swap_remove(pos);
        state.add_node(graph, i);
        add.retain(|j| state.b[*j] == 0);
    }
    iteration
}

/// expansion choosing the candidates of minimum degree in the graph first
pub fn expand_stat_deg<R:Rng+?Sized>(
    add:&mut Vec<VertexId>, state:&mut PlateauState, graph:&Graph, maxiter:usize, degree:&[usize], rng:&mut R
) -> usize {
    keep_free(add, state);
    let mut iteration = 0;
    while !add.is_empty() && iteration < maxiter {
        iteration += 1;
        let pos = choose_min_degree(add, degree, rng);
        let i = add.swap_remove(pos);
        state.add_node(graph, i);
        add.retain(|j| state.b[*j] == 0);
    }
    iteration
}

/** expansion choosing the candidates having the fewest neighbors among the candidates first.
These degrees are updated each time a vertex leaves the candidate list.
*/
pub fn expand_dyn_deg<R:Rng+?Sized>(
    add:&mut Vec<VertexId>, state:&mut PlateauState, graph:&Graph, maxiter:usize, rng:&mut R
) -> usize {
    keep_free(add, state);
    let mut in_add:BitSet = add.iter().copied().collect();
    let mut degree = vec![0 ; graph.nb_vertices()];
    for i in add.iter() {
        degree[*i] = graph.neighbors(*i).iter().filter(|j| in_add.contains(**j)).count();
    }
    let mut iteration = 0;
    while !add.is_empty() && iteration < maxiter {
        iteration += 1;
        let pos = choose_min_degree(add, &degree, rng);
        let i = add.swap_remove(pos);
        state.add_node(graph, i);
        // update degrees of the vertices leaving the candidate list (i and its neighbors)
        let mut removed = vec![i];
        add.retain(|j| {
            if state.b[*j] == 0 { true } else { removed.push(*j); false }
        });
        for r in removed.iter() {
            in_add.remove(*r);
        }
        for r in removed.iter() {
            for j in graph.neighbors(*r) {
                if in_add.contains(*j) {
                    degree[*j] -= 1;
                }
            }
        }
        debug_assert!(add.iter().all(|u|
            degree[*u] == graph.neighbors(*u).iter().filter(|j| in_add.contains(**j)).count()
        ));
    }
    iteration
}

/** expands the stable set through the suggested vertices first (add), then through every
remainder vertex that can be added. `add` is left with the remaining candidates.
*/
pub fn expand_through<R:Rng+?Sized>(
    add:&mut Vec<VertexId>,
    state:&mut PlateauState,
    policy:ExpansionPolicy,
    graph:&Graph,
    maxiter:usize,
    degree:&[usize],
    rng:&mut R,
) -> usize {
    let iteration = policy.expand(add, state, graph, maxiter, degree, rng);
    *add = state.possible_add();
    iteration + policy.expand(add, state, graph, maxiter.saturating_sub(iteration), degree, rng)
}
