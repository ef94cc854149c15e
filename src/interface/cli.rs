use crate::interface::config::GenerateConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "springboot-typegen")]
#[command(about = "Generate Spring Boot binding classes for Camel components", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate configuration and auto-configuration classes from component metadata
    Generate {
        /// Path to the component project root (default: .)
        #[arg(short = 'p', long = "project-path", default_value = ".")]
        project_path: PathBuf,

        /// Directory generated Java sources are written to (default: src/main/java)
        #[arg(short = 's', long = "source-dir", default_value = "src/main/java")]
        source_dir: PathBuf,

        /// Directory the spring.factories manifest is written to (default: src/main/resources)
        #[arg(short = 'r', long = "resources-dir", default_value = "src/main/resources")]
        resources_dir: PathBuf,

        /// Build output directory holding component metadata JSON (default: target/classes)
        #[arg(short = 'b', long = "build-dir", default_value = "target/classes")]
        build_dir: PathBuf,

        /// Resource root scanned for component markers (repeatable; default: resources dir)
        #[arg(long = "resource-root")]
        resource_roots: Vec<PathBuf>,

        /// Verbose output
        #[arg(long, action = clap::ArgAction::SetTrue)]
        verbose: bool,

        /// Configuration file path
        #[arg(short = 'c', long = "config")]
        config_file: Option<PathBuf>,
    },
    /// Write a configuration file with the defaults for this project
    Init {
        /// Path to the component project root (default: .)
        #[arg(short = 'p', long = "project-path", default_value = ".")]
        project_path: PathBuf,

        /// Output path for the configuration file (default: springboot-typegen.json)
        #[arg(short = 'o', long = "output", default_value = "springboot-typegen.json")]
        output_path: PathBuf,

        /// Verbose output
        #[arg(long, action = clap::ArgAction::SetTrue)]
        verbose: bool,

        /// Force overwrite existing configuration
        #[arg(long, action = clap::ArgAction::SetTrue)]
        force: bool,
    },
}

impl From<&Commands> for GenerateConfig {
    fn from(cmd: &Commands) -> Self {
        match cmd {
            Commands::Generate {
                project_path,
                source_dir,
                resources_dir,
                build_dir,
                resource_roots,
                verbose,
                ..
            } => GenerateConfig {
                project_path: project_path.to_string_lossy().to_string(),
                source_dir: source_dir.to_string_lossy().to_string(),
                resources_dir: resources_dir.to_string_lossy().to_string(),
                build_dir: build_dir.to_string_lossy().to_string(),
                resource_roots: if resource_roots.is_empty() {
                    None
                } else {
                    Some(
                        resource_roots
                            .iter()
                            .map(|p| p.to_string_lossy().to_string())
                            .collect(),
                    )
                },
                verbose: Some(*verbose),
            },
            Commands::Init {
                project_path,
                verbose,
                ..
            } => GenerateConfig {
                project_path: project_path.to_string_lossy().to_string(),
                verbose: Some(*verbose),
                ..Default::default()
            },
        }
    }
}
