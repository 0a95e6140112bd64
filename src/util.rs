use std::str::FromStr;

use clap::ArgMatches;
use serde_json::Value;

use crate::{
    config::SearchParams,
    error::{Error, Result},
    graph::{Graph, checker},
    report::SearchOutcome,
};

/** parameters read from the command line */
#[derive(Debug)]
pub struct RunParams {
    /// instance file name
    pub inst_filename: String,
    /// graph searched (complemented if a clique is searched)
    pub graph: Graph,
    /// search parameters
    pub params: SearchParams,
    /// random seed
    pub seed: u64,
    /// true if the search looks for a clique (the graph was complemented)
    pub clique: bool,
    /// file to write the solution in
    pub sol_file: Option<String>,
    /// file to write the statistics in
    pub perf_file: Option<String>,
}

/// parses an optional command line value
pub fn parse_arg<T:FromStr>(main_args:&ArgMatches, name:&'static str) -> Result<Option<T>> {
    match main_args.value_of(name) {
        None => Ok(None),
        Some(v) => v.parse::<T>().map(Some).map_err(|_| Error::InvalidArgument {
            name, value: v.to_string()
        })
    }
}

/** reads command line input: instance, search parameters (config file first, then the
command line overrides), seed, solution and statistics filenames */
pub fn read_params(main_args:&ArgMatches) -> Result<RunParams> {
    let inst_filename = main_args.value_of("instance").unwrap_or_default().to_string();
    let mut params = match main_args.value_of("config") {
        None => SearchParams::default(),
        Some(filename) => SearchParams::from_json_file(filename)?,
    };
    if let Some(max_iter) = parse_arg(main_args, "iterations")? { params.max_iter = max_iter; }
    if let Some(tenure) = parse_arg(main_args, "tenure")? { params.tenure = tenure; }
    if let Some(length) = parse_arg(main_args, "length")? { params.plateau_length = length; }
    if main_args.is_present("verbose") { params.verbose = true; }
    let seed = parse_arg(main_args, "seed")?.unwrap_or_else(rand::random::<u64>);
    // read value of the solution filename
    let sol_file = main_args.value_of("solution").map(|e| {
        println!("printing solutions in: {}", e);
        e.to_string()
    });
    // read value of the performance logs filename
    let perf_file = main_args.value_of("perf").map(|e| {
        println!("printing perfs in: {}\n", e);
        e.to_string()
    });
    // read instance file
    println!("reading instance: {}...", inst_filename);
    let mut graph = Graph::from_file(&inst_filename)?;
    graph.display_statistics();
    let clique = main_args.is_present("clique");
    if clique {
        println!("searching cliques: using the complement graph");
        graph = graph.complement();
    }
    println!("seed: {}", seed);
    println!("=======================");
    Ok(RunParams { inst_filename, graph, params, seed, clique, sol_file, perf_file })
}

/** writes a string encoding the solution (0-based vertex ids on one line) */
pub fn solution_to_string(solution:&[usize]) -> String {
    let ids:Vec<String> = solution.iter().map(|v| v.to_string()).collect();
    ids.join(" ") + "\n"
}

/// exports search results to files
pub fn export_results(
    graph:&Graph,
    outcome:&SearchOutcome,
    stats:&Value,
    perf_file:Option<String>,
    sol_file:Option<String>,
) -> Result<()> {
    // export statistics
    if let Some(filename) = perf_file {
        let content = serde_json::to_string(stats)?;
        std::fs::write(&filename, content).map_err(|e| Error::io(&filename, e))?;
    }
    // export solution
    if let Some(filename) = sol_file {
        if checker(graph, &outcome.solution) != Some(outcome.cardinality) {
            println!("invalid solution (size {})", outcome.cardinality);
        }
        std::fs::write(&filename, solution_to_string(&outcome.solution))
            .map_err(|e| Error::io(&filename, e))?;
    }
    Ok(())
}
