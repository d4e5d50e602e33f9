use clap::{App, load_yaml};

use vc_greedy::error::CoverError;
use vc_greedy::search::arbitrary_edge::ArbitraryEdge;
use vc_greedy::util::{init_logging, read_params, solve_and_export};


/** solves a vertex cover instance by taking both endpoints of uncovered edges */
pub fn main() -> Result<(), CoverError> {
    init_logging();
    // parse arguments
    let yaml = load_yaml!("arbitrary_edge.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let params = read_params(&main_args)?;
    // solve it and export results
    solve_and_export(&params, &mut ArbitraryEdge, "Approximate vertex cover")?;
    Ok(())
}
