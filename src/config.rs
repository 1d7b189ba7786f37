use getopts::Options;
use log::{info, warn, LevelFilter};

use crate::fleet::{VehicleStatus, DEFAULT_VEHICLE_COUNT};
use crate::logger::init_logger;
use crate::pages::Page;
use crate::roster::DEFAULT_DRIVER_COUNT;

const LOG_FILE_DEFAULT: &str = "fleetgen.log";

#[derive(Clone, Copy, PartialEq)]
pub enum OutputMode {
    Stdout,
    File,
}

#[derive(Clone, Copy, PartialEq)]
pub enum LogType {
    Console,
    File,
}

pub struct Config {
    pub page: Option<Page>,
    pub num_vehicles: u64,
    pub num_drivers: u64,
    pub seed: Option<u64>,
    pub search: Option<String>,
    pub status_filter: Option<VehicleStatus>,
    pub json: bool,
    pub log_type: LogType,
    pub output_mode: OutputMode,
    pub output_file: Option<String>,
}

/// Prints the command line usage options
fn print_usage(program: &str, opts: Options) {
    let brief = format!("Usage: {} [options]", program);
    print!("{}\n", opts.usage(&brief));
}

pub fn load(args: Vec<String>) -> Result<Config, String> {
    let program = args[0].clone();

    let mut opts = Options::new();
    opts.optflag("h", "help", "print this help menu");
    opts.optopt("p", "page", "render a single page: overview, vehicles, drivers, co2, maintenance, cost, compliance (default: all)", "PAGE");
    opts.optopt("n", "vehicles", "specify number of vehicle records to generate", "NUM_VEHICLES");
    opts.optopt("m", "drivers", "specify number of driver records to generate", "NUM_DRIVERS");
    opts.optopt("s", "seed", "seed the random generator for a reproducible run", "SEED");
    opts.optopt("o", "output", "specify the desired output (default: stdout)", "OUTPUT");
    opts.optopt("f", "output_file", "specify the file to output to, when in file output mode", "OUTPUT_FILE");
    opts.optopt("l", "log_file", "specify a file to write the log to, or 'stdout'", "LOG_FILE_PATH");
    opts.optflag("j", "json", "dump the generated tables as JSON instead of a report");
    opts.optopt("", "search", "filter the vehicle table by id substring", "TEXT");
    opts.optopt("", "status", "filter the vehicle table by status: active, idle, maintenance", "STATUS");

    let matches = match opts.parse(&args[1..]) {
        Ok(m) => m,
        Err(error) => {
            print_usage(&program, opts);
            return Err(format!("{}", error));
        }
    };

    // Setup logging
    let log_type = if matches.opt_present("l") {
        let value = matches.opt_str("l").unwrap().trim().to_string();
        if value == "stdout" {
            init_logger(LevelFilter::Info, None)
                .map_err(|_| "Failed to initialize logger!".to_string())?;
            LogType::Console
        } else {
            init_logger(LevelFilter::Info, Some(value))
                .map_err(|_| "Failed to initialize logger!".to_string())?;
            LogType::File
        }
    } else {
        init_logger(LevelFilter::Info, Some(LOG_FILE_DEFAULT.to_string()))
            .map_err(|_| "Failed to initialize logger!".to_string())?;
        LogType::File
    };

    info!("Logging initialized, processing command line options.");

    // Get help
    if matches.opt_present("h") {
        print_usage(&program, opts);
        return Err("".to_string());
    }

    // Page to render; absent means every page
    let page = if matches.opt_present("p") {
        let page_opt = matches.opt_str("p").unwrap().trim().to_string();
        info!("Received option: page = {}", page_opt);
        Some(Page::parse(&page_opt)?)
    } else {
        None
    };

    // Setup number of vehicle records to produce
    let num_vehicles = if matches.opt_present("n") {
        let vehicles_opt = matches.opt_str("n").unwrap().trim().to_string();
        info!("Received option: vehicles = {}", vehicles_opt);
        match vehicles_opt.parse::<u64>() {
            Err(err) => {
                warn!("{}, using default value {}", err, DEFAULT_VEHICLE_COUNT);
                DEFAULT_VEHICLE_COUNT
            }
            Ok(n) => n,
        }
    } else {
        DEFAULT_VEHICLE_COUNT
    };

    // Setup number of driver records to produce
    let num_drivers = if matches.opt_present("m") {
        let drivers_opt = matches.opt_str("m").unwrap().trim().to_string();
        info!("Received option: drivers = {}", drivers_opt);
        match drivers_opt.parse::<u64>() {
            Err(err) => {
                warn!("{}, using default value {}", err, DEFAULT_DRIVER_COUNT);
                DEFAULT_DRIVER_COUNT
            }
            Ok(m) => m,
        }
    } else {
        DEFAULT_DRIVER_COUNT
    };

    // Optional RNG seed for reproducible tables
    let seed = if matches.opt_present("s") {
        let seed_opt = matches.opt_str("s").unwrap().trim().to_string();
        info!("Received option: seed = {}", seed_opt);
        match seed_opt.parse::<u64>() {
            Err(err) => {
                warn!("{}, seeding from entropy instead", err);
                None
            }
            Ok(seed) => Some(seed),
        }
    } else {
        None
    };

    // Set the output mode
    let output_mode = if matches.opt_present("o") {
        let output_opt = matches.opt_str("o").unwrap().trim().to_string();
        info!("Received option: output mode = {}", output_opt);
        match output_opt.as_ref() {
            "stdout" => {
                if log_type == LogType::Console {
                    return Err("To use stdout as the output destination, you must enable logging to file with the '-l' option.".to_string());
                }
                OutputMode::Stdout
            }
            "file" => OutputMode::File,
            other => {
                return Err(format!("Unsupported output requested: {}", other));
            }
        }
    } else {
        if log_type == LogType::Console {
            return Err("To use stdout as the output destination, you must enable logging to file with the '-l' option.".to_string());
        }
        OutputMode::Stdout
    };

    let output_file = if output_mode == OutputMode::File {
        if matches.opt_present("f") {
            Some(matches.opt_str("f").unwrap().trim().to_string())
        } else {
            Some("report.txt".to_string())
        }
    } else {
        None
    };

    // Display-time filters over the vehicle table
    let search = matches.opt_str("search").map(|s| s.trim().to_string());
    let status_filter = match matches.opt_str("status") {
        Some(value) => Some(VehicleStatus::parse(value.trim())?),
        None => None,
    };

    let json = matches.opt_present("j");

    Ok(Config {
        page,
        num_vehicles,
        num_drivers,
        seed,
        search,
        status_filter,
        json,
        log_type,
        output_mode,
        output_file,
    })
}
