use std::env;
use std::time::Instant;

use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use fleetgen::cache::SessionCache;
use fleetgen::config;
use fleetgen::pages::Dashboard;
use fleetgen::report;

fn main() {
    let args: Vec<String> = env::args().collect();

    let config = match config::load(args) {
        Ok(config) => config,
        Err(err) => {
            if !err.is_empty() {
                println!("ERROR - {}", err);
            }
            return;
        }
    };

    let start = Instant::now();

    let mut rng: StdRng = match config.seed {
        Some(seed) => {
            info!("Seeding RNG with {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let mut cache = SessionCache::new();
    let (vehicles, drivers) = cache.tables(&mut rng, config.num_vehicles, config.num_drivers);

    let data = Dashboard {
        vehicles,
        drivers,
        search: config.search.as_deref(),
        status_filter: config.status_filter,
    };

    let mut out = match report::open_sink(&config) {
        Ok(out) => out,
        Err(err) => {
            error!("{}", err);
            return;
        }
    };

    if let Err(err) = report::write_report(&mut out, &config, &data) {
        error!("{}", err);
        return;
    }

    info!("Report complete, elapsed: {:.3} s", start.elapsed().as_secs_f64());
}
