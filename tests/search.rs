use rand::SeedableRng;
use rand::rngs::StdRng;

use stable_search::config::SearchParams;
use stable_search::graph::{Graph, checker};
use stable_search::report::{ImprovementList, NoReport};
use stable_search::search::evaluation::{construct, evaluate};
use stable_search::search::expansion::{ExpansionPolicy, PlateauState};
use stable_search::search::intens_divers::ts_intens_divers;
use stable_search::search::ltm::{hybrid, ltm_search};
use stable_search::search::tabu_search::tabu_search;


#[test]
fn test_tabu_search_cycle5_from_file() {
    let g = Graph::from_file("insts/cycle5.col").unwrap();
    let params = SearchParams { max_iter: 100, ..SearchParams::default() };
    let mut rng = StdRng::seed_from_u64(2022);
    let initial = construct(&g, &mut rng);
    let res = tabu_search(&g, &initial, &params, &mut rng, &mut NoReport);
    assert_eq!(res.cardinality, 2);
    assert_eq!(checker(&g, &res.solution), Some(2));
}

#[test]
fn test_expand_rand_cycle5() {
    let g = Graph::from_file("insts/cycle5.col").unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    let mut state = PlateauState::new(g.nb_vertices());
    let mut add:Vec<usize> = g.vertices().collect();
    ExpansionPolicy::Random.expand(&mut add, &mut state, &g, 100, &g.degrees(), &mut rng);
    assert_eq!(state.card(), 2);
    let (card, infeas, b) = evaluate(&g, &state.sol);
    assert_eq!((card, infeas), (2, 0));
    assert_eq!(b, state.b);
}

#[test]
fn test_k4_stable_sets_and_cliques() {
    let g = Graph::from_file("insts/k4.col").unwrap();
    let mut rng = StdRng::seed_from_u64(3);
    assert_eq!(construct(&g, &mut rng).len(), 1);
    // the complement has no edge: the whole vertex set is a clique of K4
    let c = g.complement();
    let params = SearchParams { max_iter: 50, ..SearchParams::default() };
    let res = hybrid(&c, &params, &mut rng, &mut NoReport);
    assert_eq!(res.cardinality, 4);
}

#[test]
fn test_petersen_cliques_and_stable_sets() {
    let g = Graph::from_file("insts/petersen.col").unwrap();
    let params = SearchParams { max_iter: 3000, ..SearchParams::default() };
    let mut rng = StdRng::seed_from_u64(5);
    let mut list = ImprovementList::default();
    let res = ts_intens_divers(&g, &construct(&g, &mut rng), &params, &mut rng, &mut list);
    assert_eq!(res.cardinality, 4);
    // Petersen is triangle-free: its largest cliques are edges
    let c = g.complement();
    let res = ltm_search(&c, ExpansionPolicy::DynamicDegree, &params, &mut rng, &mut NoReport);
    assert_eq!(res.cardinality, 2);
    assert!(g.are_adjacent(res.solution[0], res.solution[1]));
}

#[test]
fn test_same_seed_same_result() {
    let g = Graph::from_file("insts/petersen.col").unwrap();
    let params = SearchParams { max_iter: 500, ..SearchParams::default() };
    let run = |seed:u64| {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut list = ImprovementList::default();
        let res = hybrid(&g, &params, &mut rng, &mut list);
        (res, list.improvements)
    };
    assert_eq!(run(77), run(77));
}
