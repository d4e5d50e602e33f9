use std::fs;

use clap::ArgMatches;
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::{
    cover::{checker, CheckerResult, Cover},
    error::CoverError,
    format::{read_graph_file, write_cover_file},
    graph::Graph,
    search::arbitrary_edge::ArbitraryEdge,
    search::engine::{run_with_stats, RunStats, SelectionPolicy},
    search::max_degree::MaxDegreeVertex,
    search::random_endpoint::RandomEndpoint,
};

/// default instance file name
pub const DEFAULT_INSTANCE:&str = "graph.gr";

/// default solution file name
pub const DEFAULT_SOLUTION:&str = "vertex_cover.vc";

/** parameters shared by the solver programs */
#[derive(Debug)]
pub struct Params {
    /// instance file name
    pub inst_filename: String,
    /// graph read from the instance file
    pub graph: Graph,
    /// file in which the cover is written
    pub sol_file: String,
    /// optional file in which the statistics are written (json)
    pub perf_file: Option<String>,
    /// seed of the random number generator (if any)
    pub seed: Option<u64>,
    /// if true, check the cover before exporting it
    pub check: bool,
}

/** installs the logger (stderr, filtered by RUST_LOG, "info" by default).
Does nothing if a logger is already installed.
*/
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let res = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
    if let Err(e) = res {
        eprintln!("logging already configured: {}", e);
    }
}

/// parses an optional integer argument
pub fn parse_arg<T:std::str::FromStr>(main_args:&ArgMatches, name:&'static str) -> Result<Option<T>, CoverError> {
    match main_args.value_of(name) {
        None => Ok(None),
        Some(value) => value.parse::<T>().map(Some).map_err(|_|
            CoverError::InvalidArgument { name, value: value.to_string() }
        ),
    }
}

/** reads command line input and the instance */
pub fn read_params(main_args:&ArgMatches) -> Result<Params, CoverError> {
    let inst_filename = main_args.value_of("instance").unwrap_or(DEFAULT_INSTANCE);
    let sol_file = main_args.value_of("solution").unwrap_or(DEFAULT_SOLUTION);
    let perf_file = main_args.value_of("perf").map(|e| e.to_string());
    if let Some(e) = &perf_file {
        info!("printing perfs in: {}", e);
    }
    let seed = parse_arg::<u64>(main_args, "seed")?;
    info!("reading instance: {}...", inst_filename);
    let graph = read_graph_file(inst_filename)?;
    graph.display_statistics();
    Ok(Params {
        inst_filename: inst_filename.to_string(),
        graph,
        sol_file: sol_file.to_string(),
        perf_file,
        seed,
        check: main_args.is_present("check"),
    })
}

/// prints the cover and the summary counts on the standard output
pub fn report(label:&str, graph:&Graph, cover:&Cover) {
    println!("{}: {:?}", label, cover);
    println!();
    println!("Number of vertices in the graph: {}", graph.vertex_count());
    println!("Number of vertices in the cover: {}", cover.len());
    println!();
}

/** record exported for a run: instance name, objective list and the run statistics */
#[derive(Debug, Serialize)]
pub struct RunRecord<'a> {
    /// instance name
    pub inst_name: &'a str,
    /// objective values found (cover sizes)
    pub primal_list: Vec<usize>,
    /// statistics of the run
    #[serde(flatten)]
    pub stats: &'a RunStats,
}

/// statistics exported for a run
pub fn run_stats_json(inst_filename:&str, stats:&RunStats) -> Result<Value, CoverError> {
    let record = RunRecord {
        inst_name: inst_filename,
        primal_list: vec![stats.cover_size],
        stats,
    };
    Ok(serde_json::to_value(&record)?)
}

/// writes the statistics into a file
pub fn write_stats(filename:&str, stats:&Value) -> Result<(), CoverError> {
    fs::write(filename, serde_json::to_string(stats)?)?;
    Ok(())
}

/** exports search results to files.
If check_result is set, an invalid cover is not written and an error is returned.
*/
pub fn export_results(
    graph:&Graph,
    cover:&Cover,
    stats:&Value,
    perf_file:Option<&str>,
    sol_file:&str,
    check_result:bool,
) -> Result<(), CoverError> {
    if let Some(filename) = perf_file {
        write_stats(filename, stats)?;
    }
    if check_result {
        match checker(graph, cover) {
            CheckerResult::Ok(_) => {},
            res => {
                warn!("invalid cover (reason: {:?}), not written", res);
                return Err(CoverError::InvalidCover(format!("{:?}", res)));
            }
        }
    }
    write_cover_file(sol_file, cover, graph.vertex_count())?;
    info!("cover written in: {}", sol_file);
    Ok(())
}

/** runs the policy on the instance, prints the report and exports the results */
pub fn solve_and_export<P:SelectionPolicy + ?Sized>(params:&Params, policy:&mut P, label:&str) -> Result<Cover, CoverError> {
    let (cover, stats) = run_with_stats(&params.graph, policy);
    info!("{} took {:.3} seconds. Cover size: {}", stats.policy, stats.time_searched, stats.cover_size);
    report(label, &params.graph, &cover);
    export_results(
        &params.graph,
        &cover,
        &run_stats_json(&params.inst_filename, &stats)?,
        params.perf_file.as_deref(),
        &params.sol_file,
        params.check,
    )?;
    Ok(cover)
}

/** runs the three policies on the same graph, in order: arbitrary edge, max degree, random endpoint */
pub fn compare_policies(graph:&Graph, seed:Option<u64>) -> Vec<(Cover, RunStats)> {
    let random_endpoint = match seed {
        None => RandomEndpoint::new(),
        Some(s) => RandomEndpoint::with_seed(s),
    };
    let mut policies:Vec<Box<dyn SelectionPolicy>> = vec![
        Box::new(ArbitraryEdge),
        Box::new(MaxDegreeVertex::new()),
        Box::new(random_endpoint),
    ];
    policies.iter_mut().map(|p| run_with_stats(graph, p.as_mut())).collect()
}
