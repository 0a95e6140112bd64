use std::time::Instant;

use clap::{App, load_yaml};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::json;

use stable_search::config::Algorithm;
use stable_search::error::{Error, Result};
use stable_search::search::expansion::ExpansionPolicy;
use stable_search::search::ltm::{hybrid, iterated_expansion, ltm_search, multistart_local_search};
use stable_search::util::{read_params, export_results};


/** searches a large stable set using plateau searches
(expansions + lateral swaps, possibly guided by a long-term memory). */
fn run() -> Result<()> {
    // parse arguments
    let yaml = load_yaml!("stable_plateau.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let algorithm = main_args.value_of("algorithm").unwrap_or("hybrid").parse::<Algorithm>()?;
    let policy = main_args.value_of("policy").unwrap_or("rand").parse::<ExpansionPolicy>()?;
    let run = read_params(&main_args)?;
    let mut rng = StdRng::seed_from_u64(run.seed);

    // solve it
    let t_start = Instant::now();
    let mut primal_list = Vec::new();
    let mut report = |card:usize, label:&str| {
        println!("new best stable set! ({}) \t{}", card, label);
        primal_list.push(card);
    };
    let (graph, params) = (&run.graph, &run.params);
    let outcome = match algorithm {
        Algorithm::Iterated => iterated_expansion(graph, policy, params, &mut rng, &mut report),
        Algorithm::Multistart => multistart_local_search(graph, policy, params, &mut rng, &mut report),
        Algorithm::Ltm => ltm_search(graph, policy, params, &mut rng, &mut report),
        Algorithm::Hybrid => hybrid(graph, params, &mut rng, &mut report),
        other => return Err(Error::UnknownName {
            kind: "algorithm",
            name: format!("{:?}", other),
            valid: "iterated, multistart, ltm, hybrid",
        }),
    };
    let duration = t_start.elapsed().as_secs_f32();
    println!("plateau search took {:.3} seconds. Nb vertices: {}", duration, outcome.cardinality);
    let stats = json!({
        "primal_list": primal_list,
        "time_searched": duration,
        "inst_name": run.inst_filename,
        "algorithm": algorithm,
        "policy": policy,
        "clique": run.clique,
        "seed": run.seed,
        "params": run.params,
        "nb_iterations": outcome.nb_iterations,
    });

    // export results
    export_results(&run.graph, &outcome, &stats, run.perf_file, run.sol_file)
}

pub fn main() {
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
