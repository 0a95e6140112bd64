use std::time::Instant;

use clap::{App, load_yaml};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::json;

use stable_search::config::Algorithm;
use stable_search::error::{Error, Result};
use stable_search::search::evaluation::construct;
use stable_search::search::intens_divers::ts_intens_divers;
use stable_search::search::tabu_search::tabu_search;
use stable_search::util::{read_params, export_results};


/** searches a large stable set using a strategic oscillation tabu search,
starting from a random maximal stable set. */
fn run() -> Result<()> {
    // parse arguments
    let yaml = load_yaml!("stable_tabu.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let algorithm = main_args.value_of("algorithm").unwrap_or("tabu").parse::<Algorithm>()?;
    let run = read_params(&main_args)?;
    let mut rng = StdRng::seed_from_u64(run.seed);

    // solve it
    let t_start = Instant::now();
    let initial = construct(&run.graph, &mut rng);
    println!("initial stable set: {}", initial.len());
    let mut primal_list = vec![initial.len()];
    let mut report = |card:usize, label:&str| {
        println!("new best stable set! ({}) \t{}", card, label);
        primal_list.push(card);
    };
    let outcome = match algorithm {
        Algorithm::Tabu => tabu_search(&run.graph, &initial, &run.params, &mut rng, &mut report),
        Algorithm::IntensDivers => ts_intens_divers(&run.graph, &initial, &run.params, &mut rng, &mut report),
        other => return Err(Error::UnknownName {
            kind: "algorithm",
            name: format!("{:?}", other),
            valid: "tabu, intens-divers",
        }),
    };
    let duration = t_start.elapsed().as_secs_f32();
    println!("tabu search took {:.3} seconds. Nb vertices: {}", duration, outcome.cardinality);
    let stats = json!({
        "primal_list": primal_list,
        "time_searched": duration,
        "inst_name": run.inst_filename,
        "algorithm": algorithm,
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
