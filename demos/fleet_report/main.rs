use std::io;

use fleetgen::fleet::generate_vehicles;
use fleetgen::pages::{render_page, Dashboard, Page};
use fleetgen::roster::generate_drivers;

/// A script that generates a small fleet and roster, then renders the
/// overview page to stdout.
///
/// # Example
///
/// cargo run --example fleet_report
///
fn main() {
    let mut rng = rand::thread_rng();

    let vehicles = generate_vehicles(&mut rng, 10);
    let drivers = generate_drivers(&mut rng, 10);

    let data = Dashboard {
        vehicles: &vehicles,
        drivers: &drivers,
        search: None,
        status_filter: None,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for page in [Page::Overview, Page::Maintenance].iter() {
        if let Err(err) = render_page(*page, &mut out, &data) {
            println!("ERROR - {}", err);
            return;
        }
        println!();
    }
}
