//! Stacks & Queues - Main entry point
//!
//! Runs the exercise demo or a single exercise from the command line.

use std::path::Path;
use tracing::{debug, error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stacks_and_queues::cli::{Cli, Commands};
use stacks_and_queues::config_file::check_rotation_steps;
use stacks_and_queues::logic::reversal::reverse_or_placeholder;
use stacks_and_queues::{DemoConfig, Direction, check_brackets, demo, rotate};

/// Initialize logging; results go to stdout, logs to stderr
fn init_logger() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Main application entry point
fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();
    info!("Stacks & Queues starting up");

    let cli = Cli::parse_args();
    debug!("CLI arguments parsed");

    match cli.command {
        Some(Commands::Demo {
            config,
            save_config,
            json,
        }) => {
            run_demo(config.as_deref(), save_config.as_deref(), json)?;
        }
        Some(Commands::Rotate {
            direction,
            steps,
            items,
        }) => {
            let direction = Direction::parse_arg(&direction).unwrap_or_else(|e| {
                eprintln!("✗ {}", e);
                std::process::exit(1);
            });
            if let Err(e) = check_rotation_steps(steps) {
                eprintln!("✗ {}", e);
                std::process::exit(1);
            }
            info!("Rotating {} items {} by {}", items.len(), direction, steps);
            println!("{:?}", rotate(&items, steps, direction));
        }
        Some(Commands::Reverse { text }) => {
            println!("{}", reverse_or_placeholder(&text));
        }
        Some(Commands::Balanced { text }) => {
            println!("{}", check_brackets(&text));
        }
        Some(Commands::Validate { config }) => {
            info!("Validating configuration file: {:?}", config);
            match DemoConfig::load_from_file(&config) {
                Ok(config) => match config.validate() {
                    Ok(_) => {
                        info!("Configuration validation successful");
                        println!("✓ Configuration file is valid");
                    }
                    Err(e) => {
                        error!("Configuration validation failed: {}", e);
                        eprintln!("✗ Configuration validation failed: {}", e);
                        std::process::exit(1);
                    }
                },
                Err(e) => {
                    error!("Failed to load configuration file: {:#}", e);
                    eprintln!("✗ Failed to load configuration file: {:#}", e);
                    std::process::exit(1);
                }
            }
        }
        None => {
            info!("No command specified, running the default demo");
            run_demo(None, None, false)?;
        }
    }

    Ok(())
}

/// Run the demo over the built-in inputs or a configuration file
fn run_demo(
    config_path: Option<&Path>,
    save_path: Option<&Path>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = match config_path {
        Some(path) => {
            info!("Loading demo configuration from: {:?}", path);
            let config = DemoConfig::load_from_file(path)?;
            config.validate()?;
            config
        }
        None => DemoConfig::walkthrough(),
    };

    if let Some(path) = save_path {
        config.save_to_file(path)?;
        info!("Saved demo configuration to: {:?}", path);
    }

    let report = demo::run(&config);
    if json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report);
    }

    Ok(())
}
