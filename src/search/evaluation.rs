use bit_set::BitSet;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::graph::{Graph, VertexId};


/** evaluates a solution from scratch. Returns:
 - the cardinality of the solution
 - the number of edges having both endpoints in the solution
 - b[v]: the number of neighbors of v inside the solution

Only used for initialization and sanity checks (moves update b incrementally).
*/
pub fn evaluate(graph:&Graph, sol:&BitSet) -> (usize, usize, Vec<usize>) {
    let mut b = vec![0 ; graph.nb_vertices()];
    let mut infeas = 0;
    for i in sol.iter() {
        for j in graph.neighbors(i) {
            b[*j] += 1;
            if sol.contains(*j) {
                infeas += 1;
            }
        }
    }
    assert!(infeas % 2 == 0, "each conflicting edge is seen from both endpoints");
    (sol.len(), infeas / 2, b)
}

/** builds a random maximal (not necessarily maximum) stable set.
Scans the vertices in a random order and inserts every vertex having no neighbor
in the solution.
*/
pub fn construct<R:Rng+?Sized>(graph:&Graph, rng:&mut R) -> BitSet {
    let mut sol = BitSet::with_capacity(graph.nb_vertices());
    let mut b = vec![0 ; graph.nb_vertices()];
    fill_randomly(graph, &mut sol, &mut b, rng);
    sol
}

/** builds a random maximal stable set containing v */
pub fn diversify<R:Rng+?Sized>(graph:&Graph, v:VertexId, rng:&mut R) -> BitSet {
    let mut sol = BitSet::with_capacity(graph.nb_vertices());
    let mut b = vec![0 ; graph.nb_vertices()];
    sol.insert(v);
    for j in graph.neighbors(v) {
        b[*j] += 1;
    }
    fill_randomly(graph, &mut sol, &mut b, rng);
    sol
}

/// inserts every addable vertex, in a random order
fn fill_randomly<R:Rng+?Sized>(graph:&Graph, sol:&mut BitSet, b:&mut [usize], rng:&mut R) {
    let mut indices:Vec<VertexId> = graph.vertices().collect();
    indices.shuffle(rng);
    for i in indices {
        if b[i] == 0 && !sol.contains(i) {
            sol.insert(i);
            for j in graph.neighbors(i) {
                b[*j] += 1;
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::graph::tests::{complete, cycle};

    fn to_bitset(vertices:&[VertexId]) -> BitSet {
        vertices.iter().copied().collect()
    }

    /// every vertex outside the solution sees a vertex inside
    fn is_maximal(graph:&Graph, sol:&BitSet) -> bool {
        graph.vertices().filter(|v| !sol.contains(*v))
            .all(|v| graph.neighbors(v).iter().any(|u| sol.contains(*u)))
    }

    #[test]
    fn test_evaluate_counts_inner_edges() {
        let g = complete(4);
        let (card, infeas, b) = evaluate(&g, &to_bitset(&[0,1,2]));
        assert_eq!(card, 3);
        assert_eq!(infeas, 3);
        assert_eq!(b, vec![2,2,2,3]);
        let (card, infeas, b) = evaluate(&g, &BitSet::new());
        assert_eq!((card, infeas), (0, 0));
        assert!(b.iter().all(|e| *e == 0));
    }

    #[test]
    fn test_evaluate_on_cycle() {
        let g = cycle(5);
        assert_eq!(evaluate(&g, &to_bitset(&[0,2])).1, 0);
        assert_eq!(evaluate(&g, &to_bitset(&[0,1,2,3])).1, 3);
        assert_eq!(evaluate(&g, &to_bitset(&[0,1,2,3,4])).1, 5);
    }

    #[test]
    fn test_construct_complete_graph_is_singleton() {
        let mut rng = StdRng::seed_from_u64(0);
        let g = complete(4);
        for _ in 0..20 {
            assert_eq!(construct(&g, &mut rng).len(), 1);
        }
    }

    #[test]
    fn test_construct_is_maximal_stable_set() {
        let mut rng = StdRng::seed_from_u64(42);
        let g = Graph::from_file("insts/petersen.col").unwrap();
        for _ in 0..50 {
            let sol = construct(&g, &mut rng);
            assert_eq!(evaluate(&g, &sol).1, 0);
            assert!(is_maximal(&g, &sol));
        }
    }

    #[test]
    fn test_diversify_contains_seed() {
        let mut rng = StdRng::seed_from_u64(7);
        let g = cycle(5);
        for v in g.vertices() {
            let sol = diversify(&g, v, &mut rng);
            assert!(sol.contains(v));
            assert_eq!(sol.len(), 2);
            assert_eq!(evaluate(&g, &sol).1, 0);
            assert!(is_maximal(&g, &sol));
        }
    }

    #[test]
    fn test_construct_empty_graph() {
        let mut rng = StdRng::seed_from_u64(1);
        let g = Graph::new(Vec::new());
        assert!(construct(&g, &mut rng).is_empty());
    }
}
