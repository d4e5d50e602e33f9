use clap::{App, load_yaml};
use tracing::warn;

use vc_greedy::cover::{checker, CheckerResult};
use vc_greedy::error::CoverError;
use vc_greedy::format::{read_cover_file, read_graph_file};
use vc_greedy::util::{DEFAULT_INSTANCE, DEFAULT_SOLUTION, init_logging};

/** checks a vertex cover file against a graph file */
pub fn main() -> Result<(), CoverError> {
    init_logging();
    // parse arguments
    let yaml = load_yaml!("cover_checker.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let inst_filename = main_args.value_of("instance").unwrap_or(DEFAULT_INSTANCE);
    let sol_filename = main_args.value_of("solution").unwrap_or(DEFAULT_SOLUTION);
    // read files
    let graph = read_graph_file(inst_filename)?;
    let (nb_vertices, cover) = read_cover_file(sol_filename)?;
    if nb_vertices != graph.vertex_count() {
        warn!("cover declares {} vertices, the graph has {}", nb_vertices, graph.vertex_count());
    }
    // call checker
    match checker(&graph, &cover) {
        CheckerResult::Ok(n) => {
            println!("{}", n);
        },
        CheckerResult::UncoveredEdge(u, v) => {
            println!("ERROR: edge {} {} not covered", u, v);
        },
        CheckerResult::UnknownVertex(v) => {
            println!("ERROR: vertex {} not in the graph", v);
        },
    };
    Ok(())
}
