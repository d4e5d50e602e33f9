use clap::{App, load_yaml};
use serde_json::Value;
use tracing::info;

use vc_greedy::cover::{checker, CheckerResult};
use vc_greedy::error::CoverError;
use vc_greedy::format::read_graph_file;
use vc_greedy::generator::gnp;
use vc_greedy::util::{
    DEFAULT_INSTANCE, compare_policies, init_logging, parse_arg, run_stats_json, write_stats
};


/** compares the three greedy strategies on a single instance */
pub fn main() -> Result<(), CoverError> {
    init_logging();
    // parse arguments
    let yaml = load_yaml!("compare_covers.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let seed = parse_arg::<u64>(&main_args, "seed")?;
    let gnp_n = parse_arg::<usize>(&main_args, "gnp-n")?;
    let gnp_p = parse_arg::<f64>(&main_args, "gnp-p")?;
    // read or generate the instance
    let (inst_name, graph) = match (gnp_n, gnp_p) {
        (Some(n), Some(p)) => {
            info!("generating G({}, {})...", n, p);
            (format!("gnp_{}_{}", n, p), gnp(n, p, seed.unwrap_or(0)))
        },
        _ => {
            let inst_filename = main_args.value_of("instance").unwrap_or(DEFAULT_INSTANCE);
            info!("reading instance: {}...", inst_filename);
            (inst_filename.to_string(), read_graph_file(inst_filename)?)
        }
    };
    graph.display_statistics();
    // run the strategies
    let results = compare_policies(&graph, seed);
    println!("{:>20}{:>12}{:>12}{:>12}{:>8}", "strategy", "cover size", "iterations", "time (s)", "valid");
    for (cover, stats) in &results {
        let valid = checker(&graph, cover) == CheckerResult::Ok(cover.len());
        println!(
            "{:>20}{:>12}{:>12}{:>12.3}{:>8}",
            stats.policy, stats.cover_size, stats.nb_iterations, stats.time_searched, valid
        );
    }
    println!("Number of vertices in the graph: {}", graph.vertex_count());
    // export statistics
    if let Some(filename) = main_args.value_of("perf") {
        let stats = results.iter()
            .map(|(_, s)| run_stats_json(&inst_name, s))
            .collect::<Result<Vec<Value>, CoverError>>()?;
        write_stats(filename, &Value::Array(stats))?;
        info!("statistics written in: {}", filename);
    }
    Ok(())
}
