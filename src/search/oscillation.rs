use bit_set::BitSet;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::graph::{Graph, VertexId};
use crate::search::evaluation::evaluate;


/** soft tabu test: a vertex tabu until `tabu_until` is allowed with probability
1 - (tabu_until - iteration) / tenure. Vertices whose tabu status expired are always allowed.
*/
fn is_allowed<R:Rng+?Sized>(tabu_until:usize, tenure:usize, iteration:usize, rng:&mut R) -> bool {
    tabu_until <= iteration
        || rng.gen::<f64>() > (tabu_until - iteration) as f64 / tenure.max(1) as f64
}


/** state of the strategic oscillation: a (possibly infeasible) vertex set, the number of
neighbors each vertex has in it, and the tabu status of every vertex.
*/
#[derive(Debug, Clone)]
pub struct OscillationState<'a> {
    /// graph searched
    pub graph: &'a Graph,
    /// current vertex set
    pub sol: BitSet,
    /// b[v]: number of neighbors of v inside sol
    pub b: Vec<usize>,
    /// number of vertices in sol
    pub card: usize,
    /// number of edges inside sol
    pub infeas: usize,
    /// tabu[v]: iteration until which v is (softly) tabu
    pub tabu: Vec<usize>,
    /// print blocked states
    pub verbose: bool,
}

impl<'a> OscillationState<'a> {

    /// initializes the state from a vertex set (evaluated from scratch)
    pub fn new(graph:&'a Graph, sol:&BitSet, verbose:bool) -> Self {
        let (card, infeas, b) = evaluate(graph, sol);
        Self {
            graph,
            sol: sol.clone(),
            b,
            card,
            infeas,
            tabu: vec![0 ; graph.nb_vertices()],
            verbose,
        }
    }

    /// replaces the current vertex set (tabu status is kept)
    pub fn reset(&mut self, sol:BitSet, card:usize, infeas:usize, b:Vec<usize>) {
        debug_assert_eq!(sol.len(), card);
        self.sol = sol;
        self.card = card;
        self.infeas = infeas;
        self.b = b;
    }

    /// every vertex that is still tabu at `iteration` is released at `iteration`
    pub fn relax_tabu(&mut self, iteration:usize) {
        for t in self.tabu.iter_mut() {
            *t = (*t).min(iteration);
        }
    }

    /** chooses among the allowed vertices (inside or outside the solution) the ones with the
    best score (b[v] when removing, -b[v] when inserting). Ties are broken at random.
    If every vertex is tabu, relaxes the tabu list and tries again.
    Returns None only if there is no vertex to consider at all.
    */
    fn select<R:Rng+?Sized>(&mut self, inside:bool, tenure:usize, iteration:usize, rng:&mut R) -> Option<VertexId> {
        loop {
            let mut best_score = i64::MIN;
            let mut istar:Vec<VertexId> = Vec::new();
            let mut nb_considered = 0;
            for i in self.graph.vertices().filter(|i| self.sol.contains(*i) == inside) {
                nb_considered += 1;
                if !is_allowed(self.tabu[i], tenure, iteration, rng) { continue; }
                let score = if inside { self.b[i] as i64 } else { -(self.b[i] as i64) };
                if score > best_score {
                    best_score = score;
                    istar.clear();
                    istar.push(i);
                } else if score == best_score {
                    istar.push(i);
                }
            }
            if nb_considered == 0 {
                return None;
            }
            if let Some(i) = istar.choose(rng) {
                return Some(*i);
            }
            if self.verbose { println!("blocked, no non-tabu move"); }
            self.relax_tabu(iteration);
        }
    }

    /// vertex to insert (minimizes the number of created conflicts), None if every vertex is inside
    pub fn find_add<R:Rng+?Sized>(&mut self, tenure:usize, iteration:usize, rng:&mut R) -> Option<VertexId> {
        self.select(false, tenure, iteration, rng)
    }

    /// vertex to remove (maximizes the number of removed conflicts), None if the set is empty
    pub fn find_drop<R:Rng+?Sized>(&mut self, tenure:usize, iteration:usize, rng:&mut R) -> Option<VertexId> {
        self.select(true, tenure, iteration, rng)
    }

    /** inserts a vertex. It becomes tabu for tabu_in iterations. Candidates are filtered
    using tabu_out (the tenure they were given when they were removed).
    Returns the number of created conflicts.
    */
    pub fn move_in<R:Rng+?Sized>(&mut self, tabu_in:usize, tabu_out:usize, iteration:usize, rng:&mut R) -> Option<usize> {
        let i = self.find_add(tabu_out, iteration, rng)?;
        self.tabu[i] = iteration + tabu_in;
        self.sol.insert(i);
        self.card += 1;
        let mut delta_infeas = 0;
        for j in self.graph.neighbors(i) {
            self.b[*j] += 1;
            if self.sol.contains(*j) {
                delta_infeas += 1;
            }
        }
        self.infeas += delta_infeas;
        Some(delta_infeas)
    }

    /** removes a vertex. It becomes tabu for tabu_out iterations. Candidates are filtered
    using tabu_in. Returns the number of removed conflicts.
    */
    pub fn move_out<R:Rng+?Sized>(&mut self, tabu_in:usize, tabu_out:usize, iteration:usize, rng:&mut R) -> Option<usize> {
        let i = self.find_drop(tabu_in, iteration, rng)?;
        self.tabu[i] = iteration + tabu_out;
        self.sol.remove(i);
        self.card -= 1;
        let mut delta_infeas = 0;
        for j in self.graph.neighbors(i) {
            self.b[*j] -= 1;
            if self.sol.contains(*j) {
                delta_infeas += 1;
            }
        }
        self.infeas -= delta_infeas;
        Some(delta_infeas)
    }
}
