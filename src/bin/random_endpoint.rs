use clap::{App, load_yaml};
use tracing::info;

use vc_greedy::error::CoverError;
use vc_greedy::search::random_endpoint::RandomEndpoint;
use vc_greedy::util::{init_logging, read_params, solve_and_export};


/** solves a vertex cover instance by taking a random endpoint of uncovered edges */
pub fn main() -> Result<(), CoverError> {
    init_logging();
    // parse arguments
    let yaml = load_yaml!("random_endpoint.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let params = read_params(&main_args)?;
    let mut policy = match params.seed {
        None => RandomEndpoint::new(),
        Some(seed) => {
            info!("seed: {}", seed);
            RandomEndpoint::with_seed(seed)
        }
    };
    // solve it and export results
    solve_and_export(&params, &mut policy, "Randomized approximate vertex cover")?;
    Ok(())
}
