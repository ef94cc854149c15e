use clap::Parser;
use std::path::Path;

use springboot_typegen::interface::cli::{Cli, Commands};
use springboot_typegen::interface::{generate_from_config, print_run_summary, GenerateConfig};

fn main() {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Generate { config_file, .. } => {
            let cli_config = GenerateConfig::from(&cli.command);

            let config = if let Some(path) = config_file {
                match GenerateConfig::from_file(path) {
                    Ok(mut file_config) => {
                        // CLI arguments override what the file sets
                        file_config.merge(&cli_config);
                        file_config
                    }
                    Err(e) => {
                        eprintln!("Error: failed to load {}: {}", path.display(), e);
                        std::process::exit(1);
                    }
                }
            } else {
                cli_config
            };

            run_generate(&config);
        }
        Commands::Init {
            output_path, force, ..
        } => {
            let config = GenerateConfig::from(&cli.command);
            run_init(&config, output_path, *force);
        }
    }
}

fn run_generate(config: &GenerateConfig) {
    match generate_from_config(config) {
        Ok(summary) => {
            print_run_summary(&summary);
            if summary.has_failures() {
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_init(config: &GenerateConfig, output_path: &Path, force: bool) {
    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    if output_path.exists() && !force {
        eprintln!(
            "Error: {} already exists, use --force to overwrite",
            output_path.display()
        );
        std::process::exit(1);
    }

    match config.save_to_file(output_path) {
        Ok(()) => {
            println!("✓ Wrote configuration to {}", output_path.display());
            println!("  Run `springboot-typegen generate -c {}` to use it", output_path.display());
        }
        Err(e) => {
            eprintln!("Error: failed to write {}: {}", output_path.display(), e);
            std::process::exit(1);
        }
    }
}
