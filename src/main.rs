//! powerplan entry point: CLI wiring and config-driven dispatch.

use std::path::Path;
use std::process;

use powerplan::config::ScenarioConfig;
use powerplan::dispatch::DispatchSummary;
use powerplan::io::export::export_csv;
use powerplan::telemetry::init_tracing;

/// Parsed CLI arguments.
struct CliArgs {
    scenario_path: Option<String>,
    preset: Option<String>,
    no_co2: bool,
    out: Option<String>,
    #[cfg(feature = "api")]
    serve: bool,
    #[cfg(feature = "api")]
    port: Option<u16>,
}

fn print_help() {
    eprintln!("powerplan: merit-order production plan for a power plant fleet");
    eprintln!();
    eprintln!("Usage: powerplan [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --scenario <path>        Load scenario from TOML config file");
    eprintln!("  --preset <name>          Use a built-in preset (baseline, calm, peak)");
    eprintln!("  --no-co2                 Leave CO2 cost out of gas marginal cost");
    eprintln!("  --out <path>             Export the plan to CSV");
    #[cfg(feature = "api")]
    {
        eprintln!("  --serve                  Start the REST API server");
        eprintln!("  --port <u16>             API server port (default: from scenario, 8888)");
    }
    eprintln!("  --help                   Show this help message");
    eprintln!();
    eprintln!("If no --scenario or --preset is given, the baseline preset is used.");
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        scenario_path: None,
        preset: None,
        no_co2: false,
        out: None,
        #[cfg(feature = "api")]
        serve: false,
        #[cfg(feature = "api")]
        port: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--scenario" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --scenario requires a path argument");
                    process::exit(1);
                }
                cli.scenario_path = Some(args[i].clone());
            }
            "--preset" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --preset requires a name argument");
                    process::exit(1);
                }
                cli.preset = Some(args[i].clone());
            }
            "--no-co2" => {
                cli.no_co2 = true;
            }
            "--out" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --out requires a path argument");
                    process::exit(1);
                }
                cli.out = Some(args[i].clone());
            }
            #[cfg(feature = "api")]
            "--serve" => {
                cli.serve = true;
            }
            #[cfg(feature = "api")]
            "--port" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --port requires a u16 argument");
                    process::exit(1);
                }
                if let Ok(p) = args[i].parse::<u16>() {
                    cli.port = Some(p);
                } else {
                    eprintln!("error: --port value \"{}\" is not a valid u16", args[i]);
                    process::exit(1);
                }
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    if cli.scenario_path.is_some() && cli.preset.is_some() {
        eprintln!("error: --scenario and --preset are mutually exclusive");
        process::exit(1);
    }

    cli
}

fn main() {
    let cli = parse_args();

    // Load config: --scenario takes priority, then --preset, then baseline default
    let mut scenario = if let Some(ref path) = cli.scenario_path {
        match ScenarioConfig::from_toml_file(Path::new(path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else if let Some(ref name) = cli.preset {
        match ScenarioConfig::from_preset(name) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        ScenarioConfig::baseline()
    };

    if cli.no_co2 {
        scenario.dispatch.include_co2 = false;
    }

    init_tracing(&scenario.server.log_filter, scenario.server.log_json);

    #[cfg(feature = "api")]
    if cli.serve {
        serve(&scenario, cli.port);
        return;
    }

    let errors = scenario.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    let request = scenario.request();
    let include_co2 = scenario.dispatch.include_co2;
    let allocation = match request.allocate(include_co2) {
        Ok(allocation) => allocation,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };
    let summary = match DispatchSummary::from_allocation(
        &allocation,
        &request.fuels,
        &request.plants,
        include_co2,
    ) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    println!("{allocation}");
    println!("\n{summary}");

    if let Some(ref path) = cli.out {
        if let Err(e) = export_csv(&summary, Path::new(path)) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Plan written to {path}");
    }
}

/// Runs the HTTP service until Ctrl-C.
#[cfg(feature = "api")]
fn serve(scenario: &ScenarioConfig, port: Option<u16>) {
    use std::net::SocketAddr;
    use std::sync::Arc;

    let state = Arc::new(powerplan::api::AppState {
        include_co2: scenario.dispatch.include_co2,
    });
    let addr = SocketAddr::from(([0, 0, 0, 0], port.unwrap_or(scenario.server.port)));
    let rt = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("error: failed to create tokio runtime: {e}");
        process::exit(1);
    });
    if let Err(e) = rt.block_on(powerplan::api::serve(state, addr)) {
        eprintln!("error: server failed on {addr}: {e}");
        process::exit(1);
    }
}
