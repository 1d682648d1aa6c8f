use ordered_float::OrderedFloat;
use sssp_check::config::{CheckConfig, WeightKind};
use sssp_check::report::{run_check, RunReport};
use sssp_check::{Weight, WeightedDigraph};
use std::env;
use std::process;

fn check<W: Weight>(config: &CheckConfig) -> sssp_check::Result<RunReport> {
    let graph = WeightedDigraph::<W>::from_file(&config.graph_path)?;
    run_check(&graph, config)
}

fn main() {
    // Initialize logging
    env_logger::init();

    let config = match CheckConfig::from_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            eprintln!("{}", CheckConfig::USAGE);
            process::exit(2);
        }
    };

    let report = match config.weights {
        WeightKind::Integer => check::<i64>(&config),
        WeightKind::Float => check::<OrderedFloat<f64>>(&config),
    };
    let report = match report {
        Ok(report) => report,
        Err(err) => {
            eprintln!("{}: {}", config.graph_path.display(), err);
            process::exit(2);
        }
    };

    if config.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(err) => {
                eprintln!("could not serialize report: {}", err);
                process::exit(2);
            }
        }
    } else {
        print!("{}", report);
    }

    if !report.all_valid() {
        process::exit(1);
    }
}
