use bit_set::BitSet;
use rand::Rng;

use crate::config::SearchParams;
use crate::graph::{Graph, VertexId};
use crate::report::{Report, SearchOutcome};
use crate::search::expansion::{ExpansionPolicy, PlateauState, expand_through};
use crate::search::plateau::plateau;
use crate::search::tabu_search::checked_outcome;


/// best stable set found by a plateau search
#[derive(Debug, Default)]
struct BestFound {
    /// vertices of the best stable set
    sol: BitSet,
    /// size of the best stable set
    card: usize,
}

impl BestFound {
    /// records the current stable set if it improves the best one
    fn update<Rep:Report+?Sized>(&mut self, state:&PlateauState, iteration:usize, report:&mut Rep) {
        if state.card() > self.card {
            self.sol = state.sol.clone();
            self.card = state.card();
            report.improvement(self.card, &format!("iter: {}", iteration));
        }
    }
}

/// number of times each vertex belonged to a stable set obtained after an expansion
#[derive(Debug, Clone)]
struct LongTermMemory {
    usage: Vec<usize>,
}

impl LongTermMemory {
    fn new(n:usize) -> Self {
        Self { usage: vec![0 ; n] }
    }

    /// counts one more use for every vertex of the stable set
    fn record(&mut self, state:&PlateauState) {
        for i in state.sol.iter() {
            self.usage[i] += 1;
        }
    }

    /// vertices (among the given ones) that were used the fewest times
    fn least_used(&self, vertices:impl Iterator<Item=VertexId>) -> Vec<VertexId> {
        let mut minsel = usize::MAX;
        let mut cand = Vec::new();
        for i in vertices {
            if self.usage[i] < minsel {
                minsel = self.usage[i];
                cand.clear();
                cand.push(i);
            } else if self.usage[i] == minsel {
                cand.push(i);
            }
        }
        cand
    }
}

/// random element of a non-empty list
fn pick<R:Rng+?Sized>(l:&[VertexId], rng:&mut R) -> VertexId {
    l[rng.gen_range(0..l.len())]
}


/** Repeated expansions (using the given policy) from an empty stable set,
until reaching the iteration budget.
*/
pub fn iterated_expansion<R:Rng+?Sized, Rep:Report+?Sized>(
    graph:&Graph,
    policy:ExpansionPolicy,
    params:&SearchParams,
    rng:&mut R,
    report:&mut Rep,
) -> SearchOutcome {
    let n = graph.nb_vertices();
    if n == 0 { return SearchOutcome::empty(); }
    let degree = graph.degrees();
    let mut best = BestFound::default();
    let mut iteration = 0;
    while iteration < params.max_iter {
        let mut state = PlateauState::new(n);
        let mut add:Vec<VertexId> = graph.vertices().collect();
        iteration += policy.expand(&mut add, &mut state, graph, params.max_iter - iteration, &degree, rng);
        best.update(&state, iteration, report);
        if params.verbose {
            println!("iter: {} \t{}/{}", iteration, state.card(), best.card);
        }
    }
    checked_outcome(graph, &best.sol, best.card, iteration)
}


/** Plateau search, using the given policy for the expansion.
Each plateau search starts from an empty stable set, expands it, and tries to escape the
plateau reached (at most params.plateau_length iterations per escape).
*/
pub fn multistart_local_search<R:Rng+?Sized, Rep:Report+?Sized>(
    graph:&Graph,
    policy:ExpansionPolicy,
    params:&SearchParams,
    rng:&mut R,
    report:&mut Rep,
) -> SearchOutcome {
    let n = graph.nb_vertices();
    if n == 0 { return SearchOutcome::empty(); }
    let niterations = params.max_iter;
    let degree = graph.degrees();
    let mut best = BestFound::default();
    let mut iteration = 0;
    while iteration < niterations {
        if params.verbose { println!("New plateau search"); }
        let mut state = PlateauState::new(n);
        let mut add:Vec<VertexId> = graph.vertices().collect();
        while !add.is_empty() {
            iteration += policy.expand(&mut add, &mut state, graph, niterations.saturating_sub(iteration), &degree, rng);
            if params.verbose { println!("expanding... {}", state.card()); }
            best.update(&state, iteration, report);
            let maxiter = params.plateau_length.min(niterations.saturating_sub(iteration));
            let (usediter, next) = plateau(&mut state, graph, maxiter, rng);
            iteration += usediter;
            add = next;
            if params.verbose {
                println!("plateau phase... {}", state.card());
                println!("\t\titer:{}\t{}/{}", iteration, state.card(), best.card);
            }
        }
    }
    checked_outcome(graph, &best.sol, best.card, iteration)
}


/** Plateau search with long-term memory.
Each plateau search starts from an empty stable set, and is seeded either (with probability 1/2)
by the vertices of the best stable set found (intensification), or by the vertices that were
the least used in the stable sets obtained after each expansion (diversification).
*/
pub fn ltm_search<R:Rng+?Sized, Rep:Report+?Sized>(
    graph:&Graph,
    policy:ExpansionPolicy,
    params:&SearchParams,
    rng:&mut R,
    report:&mut Rep,
) -> SearchOutcome {
    run_ltm_search(graph, policy, params, rng, report).0
}

/// LTM search, also returning the long-term memory built
fn run_ltm_search<R:Rng+?Sized, Rep:Report+?Sized>(
    graph:&Graph,
    policy:ExpansionPolicy,
    params:&SearchParams,
    rng:&mut R,
    report:&mut Rep,
) -> (SearchOutcome, LongTermMemory) {
    let n = graph.nb_vertices();
    let mut ltm = LongTermMemory::new(n);
    if n == 0 { return (SearchOutcome::empty(), ltm); }
    let niterations = params.max_iter;
    let degree = graph.degrees();   // used by the static degree expansion
    let mut best = BestFound::default();
    let mut iteration = 0;
    while iteration < niterations {
        if params.verbose { println!("New plateau search"); }
        let mut state = PlateauState::new(n);
        // alternate between intensification and diversification
        let mut add:Vec<VertexId> = if rng.gen::<f64>() < 0.5 {
            if best.card > 0 { best.sol.iter().collect() } else { state.rmn.iter().collect() }
        } else {
            ltm.least_used(state.rmn.iter())
        };
        while !add.is_empty() {
            if params.verbose { println!("expanding... {}", state.card()); }
            iteration += expand_through(
                &mut add, &mut state, policy, graph, niterations.saturating_sub(iteration), &degree, rng
            );
            ltm.record(&state);
            best.update(&state, iteration, report);
            let maxiter = params.plateau_length.min(niterations.saturating_sub(iteration));
            let (usediter, next) = plateau(&mut state, graph, maxiter, rng);
            iteration += usediter;
            add = next;
            if params.verbose {
                println!("plateau phase... {}", state.card());
                println!("\t\titer:{}\t{}/{}", iteration, state.card(), best.card);
            }
        }
    }
    (checked_outcome(graph, &best.sol, best.card, iteration), ltm)
}


/** Plateau search, using a hybrid approach.

The stable set is partially kept after each plateau search: a vertex outside of it is chosen
and inserted, and its neighbors are removed from the stable set. This vertex is chosen (with
probability 1/2) either among the vertices of the best stable set, or among the least used ones.

Expansions use a policy chosen at random (among every policy) each time they are restarted.
*/
pub fn hybrid<R:Rng+?Sized, Rep:Report+?Sized>(
    graph:&Graph,
    params:&SearchParams,
    rng:&mut R,
    report:&mut Rep,
) -> SearchOutcome {
    run_hybrid(graph, params, rng, report).0
}

/** hybrid search, also returning the long-term memory built and the number of expansions
performed with each policy (in the order of ExpansionPolicy::ALL)
*/
fn run_hybrid<R:Rng+?Sized, Rep:Report+?Sized>(
    graph:&Graph,
    params:&SearchParams,
    rng:&mut R,
    report:&mut Rep,
) -> (SearchOutcome, LongTermMemory, [usize ; 3]) {
    let n = graph.nb_vertices();
    let mut ltm = LongTermMemory::new(n);
    let mut policy_uses = [0 ; 3];
    if n == 0 { return (SearchOutcome::empty(), ltm, policy_uses); }
    let niterations = params.max_iter;
    let degree = graph.degrees();   // used by the static degree expansion
    let mut best = BestFound::default();
    let mut iteration = 0;
    let mut state = PlateauState::new(n);
    while iteration < niterations {
        if state.rmn.is_empty() { break; } // every vertex is selected (no edge)
        if params.verbose { println!("New plateau search"); }
        let v = if rng.gen::<f64>() < 0.5 {
            // pick a currently unselected vertex from the best solution
            let cand:Vec<VertexId> = state.rmn.intersection(&best.sol).collect();
            if !cand.is_empty() {
                pick(&cand, rng)
            } else {
                pick(&state.rmn.iter().collect::<Vec<VertexId>>(), rng)
            }
        } else {
            pick(&ltm.least_used(state.rmn.iter()), rng)
        };

        // remove vertices of the stable set that would cause conflicts
        let conflicting:Vec<VertexId> = graph.neighbors(v).iter()
            .filter(|u| state.sol.contains(**u)).copied().collect();
        for i in conflicting {
            state.rm_node(graph, i);
            iteration += 1;
        }
        state.add_node(graph, v);
        iteration += 1;
        best.update(&state, iteration, report);

        let mut add = state.possible_add();
        while !add.is_empty() {
            let p = rng.gen_range(0..ExpansionPolicy::ALL.len());
            policy_uses[p] += 1;
            let policy = ExpansionPolicy::ALL[p];
            iteration += expand_through(
                &mut add, &mut state, policy, graph, niterations.saturating_sub(iteration), &degree, rng
            );
            ltm.record(&state);
            if params.verbose { println!("expanding... {}", state.card()); }
            best.update(&state, iteration, report);
            let maxiter = params.plateau_length.min(niterations.saturating_sub(iteration));
            let (usediter, next) = plateau(&mut state, graph, maxiter, rng);
            iteration += usediter;
            add = next;
            if params.verbose {
                println!("plateau phase... {}", state.card());
                println!("\t\titer:{}\t{}/{}", iteration, state.card(), best.card);
            }
        }
    }
    if params.verbose {
        println!("expansions per policy (rand, stat-deg, dyn-deg): {:?}", policy_uses);
    }
    (checked_outcome(graph, &best.sol, best.card, iteration), ltm, policy_uses)
}
