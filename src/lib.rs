//! # Spring Boot TypeGen
//!
//! Automatically generate Spring Boot binding classes from Apache Camel
//! component metadata.
//!
//! This library scans a component project for Camel registration markers and
//! metadata JSON, then generates the `@ConfigurationProperties` configuration
//! class, the conditional auto-configuration class, and the `spring.factories`
//! manifest that Spring Boot needs to pick the component up.
//!
//! ## Features
//!
//! - 🔍 **Automatic Discovery**: Finds components through their `META-INF` service markers
//! - 📝 **Configuration Properties**: Typed `@ConfigurationProperties` classes per component
//! - 🚀 **Auto-configuration**: Conditional `@Configuration` factories wired into the Camel context
//! - 🧾 **Manifest Registration**: Maintains `spring.factories` entries for every generated class
//! - ♻️ **Idempotent Writes**: Unchanged files are left untouched, keeping incremental builds quiet
//!
//! ## Quick Start
//!
//! ### As a CLI Tool
//!
//! ```bash
//! # Install globally
//! cargo install springboot-typegen
//!
//! # Generate Spring Boot bindings
//! springboot-typegen generate --project-path ./camel-ahc
//! ```
//!
//! ### Programmatic Usage
//!
//! ```rust,no_run
//! use springboot_typegen::{GenerateConfig, generate_from_config};
//!
//! let config = GenerateConfig {
//!     project_path: "./camel-ahc".to_string(),
//!     verbose: Some(true),
//!     ..Default::default()
//! };
//!
//! let summary = generate_from_config(&config)?;
//! println!("{} files written", summary.files_written());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Example
//!
//! Given this component metadata in `target/classes`:
//!
//! ```json
//! {
//!   "component": {
//!     "kind": "component",
//!     "scheme": "ahc",
//!     "javaType": "org.apache.camel.component.ahc.AhcComponent",
//!     "description": "To call external HTTP services using Async Http Client."
//!   },
//!   "componentProperties": {
//!     "binding": {
//!       "name": "binding",
//!       "javaType": "org.apache.camel.component.ahc.AhcBinding",
//!       "description": "To use a custom AhcBinding to control how to bind between AHC and Camel."
//!     }
//!   }
//! }
//! ```
//!
//! Generates this Java:
//!
//! ```java
//! @ConfigurationProperties(prefix = "camel.component.ahc")
//! public class AhcComponentConfiguration {
//!
//!     /**
//!      * To use a custom AhcBinding to control how to bind between AHC and Camel.
//!      */
//!     private AhcBinding binding;
//!
//!     public AhcBinding getBinding() {
//!         return binding;
//!     }
//!
//!     public void setBinding(AhcBinding binding) {
//!         this.binding = binding;
//!     }
//! }
//! ```
//!
//! along with the matching `AhcComponentAutoConfiguration` class and a
//! `spring.factories` entry registering it.
//!
//! ## Configuration
//!
//! Configure via `springboot-typegen.json`:
//!
//! ```json
//! {
//!   "project_path": ".",
//!   "source_dir": "src/main/java",
//!   "resources_dir": "src/main/resources",
//!   "build_dir": "target/classes"
//! }
//! ```

// Core library modules for the CLI tool
pub mod analysis;
mod error;
pub mod generator;
pub mod generators;
pub mod interface;
pub mod models;
pub mod naming;

pub use error::{Error, Result};
pub use models::*;

// Convenience re-exports for common use cases
pub use generator::{BindingsGenerator, ComponentFailure, RunSummary};
pub use interface::config::{ConfigError, GenerateConfig};
pub use interface::generate_from_config;
pub use interface::output::{Logger, ProgressReporter};
pub use naming::{derive_names, DerivedNames};
