use bit_set::BitSet;
use rand::Rng;

use crate::config::SearchParams;
use crate::graph::Graph;
use crate::report::{Report, SearchOutcome};
use crate::search::evaluation::evaluate;
use crate::search::oscillation::OscillationState;


/** builds the outcome of a search from the best stable set. Re-evaluates it from scratch:
a difference with the incrementally maintained cardinality is a bookkeeping bug.
*/
pub fn checked_outcome(graph:&Graph, bestsol:&BitSet, bestcard:usize, nb_iterations:usize) -> SearchOutcome {
    let (xcard, xinfeas, _) = evaluate(graph, bestsol);
    assert_eq!(bestcard, xcard, "best cardinality does not match its solution");
    assert_eq!(xinfeas, 0, "best solution is not a stable set");
    SearchOutcome {
        solution: bestsol.iter().collect(),
        remainder: graph.vertices().filter(|v| !bestsol.contains(*v)).collect(),
        cardinality: bestcard,
        nb_iterations,
    }
}


/** Implements the strategic oscillation tabu search.
Starts from a stable set. While the current set is feasible, inserts a vertex (possibly
creating conflicts). While it is infeasible, removes a vertex. Both tabu tenures depend on the
current cardinality (tabu_in grows with it, tabu_out shrinks with it).

Panics if the initial solution is not a stable set.
*/
pub fn tabu_search<R:Rng+?Sized, Rep:Report+?Sized>(
    graph:&Graph,
    initial:&BitSet,
    params:&SearchParams,
    rng:&mut R,
    report:&mut Rep,
) -> SearchOutcome {
    let n = graph.nb_vertices();
    let mut state = OscillationState::new(graph, initial, params.verbose);
    assert_eq!(state.infeas, 0, "tabu search must start from a stable set");
    let mut bestsol = state.sol.clone();
    let mut bestcard = state.card;
    if params.verbose {
        println!("iter: 0 \tcard: {} ({} conflicts) \tbest: {}", state.card, state.infeas, bestcard);
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
        if state.infeas == 0 && state.card > bestcard {
            bestsol = state.sol.clone();
            bestcard = state.card;
            report.improvement(bestcard, &format!("iter: {}", it));
        }
        if params.verbose {
            println!("iter: {} \tcard: {} ({} conflicts) \tbest: {}", it+1, state.card, state.infeas, bestcard);
        }
    }
    checked_outcome(graph, &bestsol, bestcard, nb_iterations)
}


#[cfg(test)]
mod tests {
    use super::*;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::graph::tests::{complete, cycle};
    use crate::graph::checker;
    use crate::report::{ImprovementList, NoReport};
    use crate::search::evaluation::construct;

    #[test]
    fn test_cycle5() {
        let g = cycle(5);
        let params = SearchParams { max_iter: 100, ..SearchParams::default() };
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let initial = construct(&g, &mut rng);
            let res = tabu_search(&g, &initial, &params, &mut rng, &mut NoReport);
            assert_eq!(res.cardinality, 2);
            assert_eq!(checker(&g, &res.solution), Some(2));
            assert_eq!(res.nb_iterations, 100);
        }
    }

    #[test]
    fn test_from_empty_set_reports_monotonic_improvements() {
        let g = Graph::from_file("insts/petersen.col").unwrap();
        let params = SearchParams { max_iter: 2000, ..SearchParams::default() };
        let mut rng = StdRng::seed_from_u64(17);
        let mut list = ImprovementList::default();
        let res = tabu_search(&g, &BitSet::new(), &params, &mut rng, &mut list);
        let primal = list.primal_list();
        assert!(primal.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(primal.last().copied().unwrap_or(0), res.cardinality);
        assert_eq!(res.cardinality, 4);
        assert_eq!(res.solution.len() + res.remainder.len(), 10);
    }

    #[test]
    fn test_complete_graph() {
        let g = complete(6);
        let params = SearchParams { max_iter: 50, ..SearchParams::default() };
        let mut rng = StdRng::seed_from_u64(2);
        let res = tabu_search(&g, &BitSet::new(), &params, &mut rng, &mut NoReport);
        assert_eq!(res.cardinality, 1);
    }

    #[test]
    fn test_edgeless_graph_stops_when_everything_is_selected() {
        let g = Graph::new(vec![Vec::new() ; 4]);
        let params = SearchParams { max_iter: 100, ..SearchParams::default() };
        let mut rng = StdRng::seed_from_u64(2);
        let res = tabu_search(&g, &BitSet::new(), &params, &mut rng, &mut NoReport);
        assert_eq!(res.cardinality, 4);
        assert_eq!(res.nb_iterations, 4);
        assert!(res.remainder.is_empty());
    }

    #[test]
    fn test_empty_graph() {
        let g = Graph::new(Vec::new());
        let mut rng = StdRng::seed_from_u64(2);
        let res = tabu_search(&g, &BitSet::new(), &SearchParams::default(), &mut rng, &mut NoReport);
        assert_eq!(res, SearchOutcome::empty());
    }

    #[test]
    #[should_panic]
    fn test_infeasible_start() {
        let g = cycle(5);
        let initial:BitSet = [0,1].iter().copied().collect();
        let mut rng = StdRng::seed_from_u64(2);
        tabu_search(&g, &initial, &SearchParams::default(), &mut rng, &mut NoReport);
    }
}
