use bit_set::BitSet;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::SearchParams;
use crate::graph::{Graph, VertexId};
use crate::report::{Report, SearchOutcome};
use crate::search::evaluation::{diversify, evaluate};
use crate::search::oscillation::OscillationState;
use crate::search::tabu_search::checked_outcome;


/** vertices outside the current solution that have the smallest tabu value
(i.e. the ones that have been left alone for the longest time).
If every vertex is in the solution, considers all vertices.
*/
fn least_recently_moved(state:&OscillationState) -> Vec<VertexId> {
    let mut cand = Vec::new();
    let mut mintabu = usize::MAX;
    let outside:Vec<VertexId> = state.graph.vertices().filter(|j| !state.sol.contains(*j)).collect();
    let pool = if outside.is_empty() { state.graph.vertices().collect() } else { outside };
    for j in pool {
        if state.tabu[j] < mintabu {
            mintabu = state.tabu[j];
            cand.clear();
            cand.push(j);
        } else if state.tabu[j] == mintabu {
            cand.push(j);
        }
    }
    cand
}


/// best stable set found by the search, with the neighbor counts of every vertex
#[derive(Debug, Clone)]
struct BestSnapshot {
    sol: BitSet,
    card: usize,
    b: Vec<usize>,
}

impl BestSnapshot {
    fn of(state:&OscillationState) -> Self {
        Self { sol: state.sol.clone(), card: state.card, b: state.b.clone() }
    }

    /// records the current state if it is a larger stable set. Returns true if it did.
    fn update(&mut self, state:&OscillationState) -> bool {
        if state.infeas == 0 && state.card > self.card {
            *self = Self::of(state);
            true
        } else {
            false
        }
    }
}


/** restarts a stagnating search. With an even threshold `d`, switches back to the best
stable set (intensification). With an odd one, builds a random maximal stable set around a
vertex that has not been moved for the longest time, then relaxes the tabu list
(diversification).
*/
fn restart<R:Rng+?Sized>(
    state:&mut OscillationState,
    d:usize,
    best:&BestSnapshot,
    iteration:usize,
    rng:&mut R,
) {
    if d % 2 == 0 {
        if state.verbose { println!("*** intensifying: switching to best found solution ***"); }
        state.reset(best.sol.clone(), best.card, 0, best.b.clone());
    } else {
        if state.verbose { println!("*** diversifying: constructing maximal stable set from less used vertex ***"); }
        let cand = least_recently_moved(state);
        if let Some(v) = cand.choose(rng) {
            let sol = diversify(state.graph, *v, rng);
            let (card, infeas, b) = evaluate(state.graph, &sol);
            state.reset(sol, card, infeas, b);
        }
        state.relax_tabu(iteration);
    }
}


/** Tabu search with intensification and diversification.
Same moves as the strategic oscillation tabu search. When the search does not improve for
more than D iterations, alternates between:
 - intensification (D even): restart from the best solution found
 - diversification (D odd): restart from a random maximal stable set containing a vertex
   that has not been moved for a long time

D increases each time one of them is triggered. Each new best solution relaxes the tabu list.

Panics if the initial solution is not a stable set.
*/
pub fn ts_intens_divers<R:Rng+?Sized, Rep:Report+?Sized>(
    graph:&Graph,
    initial:&BitSet,
    params:&SearchParams,
    rng:&mut R,
    report:&mut Rep,
) -> SearchOutcome {
    let n = graph.nb_vertices();
    let mut state = OscillationState::new(graph, initial, params.verbose);
    assert_eq!(state.infeas, 0, "tabu search must start from a stable set");
    let mut best = BestSnapshot::of(&state);
    let mut d:usize = 1;
    let mut count:usize = 0;
    let mut lastcard = state.card;
    if params.verbose {
        println!("iter: 0 \tnon-improved: {}/{} \tcard: {} ({} conflicts) \tbest: {}",
            count, d, state.card, state.infeas, best.card);
    }
    let mut nb_iterations = 0;
    for it in 0..params.max_iter {
        let tabu_in = params.tabu_in(state.card);
        let tabu_out = params.tabu_out(n, state.card);
        let moved = if state.infeas == 0 {
            state.move_in(tabu_in, tabu_out, it, rng)
        } else {
            state.move_out(tabu_in, tabu_out, it, rng)
        };
        if moved.is_none() { break; } // every vertex is in the stable set
        nb_iterations += 1;
        if params.verbose {
            println!("iter: {} \tnon-improved: {}/{} \tcard: {} ({} conflicts) \tbest: {}",
                it+1, count, d, state.card, state.infeas, best.card);
        }

        if best.update(&state) {
            report.improvement(best.card, &format!("iter: {}", it));
            if params.verbose { println!("*** intensifying: clearing tabu list ***"); }
            state.relax_tabu(it);
            count = 0;
        } else if state.infeas == 0 && state.card > lastcard {
            count = 0;
        } else {
            count += 1;
        }

        if count > d {
            restart(&mut state, d, &best, it, rng);
            if best.update(&state) {
                report.improvement(best.card, &format!("iter: {}", it));
            }
            count = 0;
            d += 1;
        }

        if state.infeas == 0 {
            lastcard = state.card;
        }
    }
    checked_outcome(graph, &best.sol, best.card, nb_iterations)
}
