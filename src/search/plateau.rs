use rand::Rng;
use rand::seq::SliceRandom;

use crate::graph::{Graph, VertexId};
use crate::search::expansion::PlateauState;


/** Vertex v has been inserted in the stable set and created one conflict.
Removes the conflicting vertex (the one in the stable set adjacent to v) and returns the
vertices through which an expansion is now possible.
*/
pub fn node_replace(state:&mut PlateauState, graph:&Graph, v:VertexId) -> Vec<VertexId> {
    debug_assert_eq!(state.b[v], 1);
    let i = match graph.neighbors(v).iter().find(|u| state.sol.contains(**u)) {
        None => return Vec::new(),
        Some(i) => *i,
    };
    state.rm_node(graph, i);
    graph.neighbors(i).iter()
        .filter(|j| state.b[**j] == 0 && !state.sol.contains(**j))
        .copied()
        .collect()
}


/** Escapes a plateau: tentatively adds a vertex creating exactly one conflict, and removes the
conflicting vertex (the stable set size does not change). Stops as soon as the stable set can
be expanded, and returns the vertices usable for that, along with the number of iterations used
(each swap counts for 2). Returns an empty list if no vertex creates exactly one conflict or
if the budget is exhausted.
*/
pub fn plateau<R:Rng+?Sized>(
    state:&mut PlateauState, graph:&Graph, maxiter:usize, rng:&mut R
) -> (usize, Vec<VertexId>) {
    let mut iteration = 0;
    while iteration < maxiter {
        let one = state.one_edge();
        let v = match one.choose(rng) {
            None => return (iteration, Vec::new()),
            Some(v) => *v,
        };
        iteration += 2;
        state.add_node(graph, v);
        let expand_nodes = node_replace(state, graph, v);
        if !expand_nodes.is_empty() {
            return (iteration, expand_nodes);
        }
    }
    (iteration, Vec::new())
}


#[cfg(test)]
mod tests {
    use super::*;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::graph::tests::cycle;
    use crate::search::evaluation::evaluate;

    #[test]
    fn test_single_swap() {
        // edges 0-1, 0-2, 1-3 ; stable set {0, 3}: only 2 has exactly one conflict
        let g = Graph::from_edges(4, &[(0,1), (0,2), (1,3)]);
        let mut state = PlateauState::new(4);
        state.add_node(&g, 0);
        state.add_node(&g, 3);
        assert!(state.possible_add().is_empty());
        assert_eq!(state.one_edge(), vec![2]);
        let mut rng = StdRng::seed_from_u64(0);
        let (used, expand_nodes) = plateau(&mut state, &g, 2, &mut rng);
        assert_eq!(used, 2);
        // 2 entered, 0 left: nothing became free (1 still sees 3, 0 sees 2)
        assert_eq!(state.card(), 2);
        assert!(state.sol.contains(2) && state.sol.contains(3));
        assert!(expand_nodes.is_empty());
        let (_, infeas, b) = evaluate(&g, &state.sol);
        assert_eq!(infeas, 0);
        assert_eq!(b, state.b);
    }

    #[test]
    fn test_swap_reports_new_candidates() {
        // 0 - 1 - 2, stable set {1}: 0 and 2 have b == 1
        let g = Graph::from_edges(3, &[(0,1), (1,2)]);
        let mut state = PlateauState::new(3);
        state.add_node(&g, 1);
        let mut rng = StdRng::seed_from_u64(1);
        let (used, expand_nodes) = plateau(&mut state, &g, 10, &mut rng);
        assert_eq!(used, 2);
        assert_eq!(state.card(), 1);
        assert!(!state.sol.contains(1));
        // whichever end point entered, the other one became free
        assert_eq!(expand_nodes.len(), 1);
        assert!(!state.sol.contains(expand_nodes[0]));
        assert_eq!(state.b[expand_nodes[0]], 0);
    }

    #[test]
    fn test_exhausted_plateau() {
        let g = cycle(5);
        let mut state = PlateauState::new(5);
        state.add_node(&g, 0);
        state.add_node(&g, 2);
        // b = [0, 2, 0, 1, 1]: 3 and 4 have one conflict each
        let mut rng = StdRng::seed_from_u64(2);
        let (used, expand_nodes) = plateau(&mut state, &g, 0, &mut rng);
        assert_eq!((used, expand_nodes.len()), (0, 0));
        let mut complete_state = PlateauState::new(2);
        let k2 = Graph::from_edges(2, &[(0,1)]);
        complete_state.add_node(&k2, 0);
        // 1 sees 0 only: swapping is possible but never frees a vertex
        let (used, expand_nodes) = plateau(&mut complete_state, &k2, 5, &mut rng);
        assert_eq!(used, 6);
        assert!(expand_nodes.is_empty());
        assert_eq!(complete_state.card(), 1);
    }

    #[test]
    fn test_no_single_conflict_vertex() {
        let g = Graph::from_edges(3, &[(0,1), (0,2)]);
        let mut state = PlateauState::new(3);
        state.add_node(&g, 1);
        state.add_node(&g, 2);
        let mut rng = StdRng::seed_from_u64(2);
        assert_eq!(plateau(&mut state, &g, 100, &mut rng), (0, Vec::new()));
    }
}
