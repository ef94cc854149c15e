use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GenerateConfig {
    /// Path to the project root
    #[serde(default = "default_project_path")]
    pub project_path: String,

    /// Directory generated Java sources are written to, relative to the
    /// project root unless absolute
    #[serde(default = "default_source_dir")]
    pub source_dir: String,

    /// Directory the discovery manifest is written to, relative to the
    /// project root unless absolute
    #[serde(default = "default_resources_dir")]
    pub resources_dir: String,

    /// Build output directory holding the component metadata documents
    #[serde(default = "default_build_dir")]
    pub build_dir: String,

    /// Resource roots scanned for component registration markers. Defaults
    /// to the resources directory when not set.
    #[serde(default)]
    pub resource_roots: Option<Vec<String>>,

    /// Enable verbose output
    #[serde(default)]
    pub verbose: Option<bool>,
}

fn default_project_path() -> String {
    ".".to_string()
}

fn default_source_dir() -> String {
    "src/main/java".to_string()
}

fn default_resources_dir() -> String {
    "src/main/resources".to_string()
}

fn default_build_dir() -> String {
    "target/classes".to_string()
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            project_path: default_project_path(),
            source_dir: default_source_dir(),
            resources_dir: default_resources_dir(),
            build_dir: default_build_dir(),
            resource_roots: None,
            verbose: Some(false),
        }
    }
}

impl GenerateConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let project_path = Path::new(&self.project_path);
        if !project_path.exists() {
            return Err(ConfigError::InvalidConfig(format!(
                "Project path does not exist: {}",
                self.project_path
            )));
        }
        Ok(())
    }

    /// Merge with another configuration, with other taking precedence
    pub fn merge(&mut self, other: &GenerateConfig) {
        if other.project_path != default_project_path() {
            self.project_path = other.project_path.clone();
        }
        if other.source_dir != default_source_dir() {
            self.source_dir = other.source_dir.clone();
        }
        if other.resources_dir != default_resources_dir() {
            self.resources_dir = other.resources_dir.clone();
        }
        if other.build_dir != default_build_dir() {
            self.build_dir = other.build_dir.clone();
        }
        if other.resource_roots.is_some() {
            self.resource_roots = other.resource_roots.clone();
        }
        if other.verbose.is_some() {
            self.verbose = other.verbose;
        }
    }

    /// Get effective verbose setting
    pub fn is_verbose(&self) -> bool {
        self.verbose.unwrap_or(false)
    }

    /// Resource roots to scan, falling back to the resources directory.
    pub fn effective_resource_roots(&self) -> Vec<String> {
        match &self.resource_roots {
            Some(roots) if !roots.is_empty() => roots.clone(),
            _ => vec![self.resources_dir.clone()],
        }
    }

    pub fn source_path(&self) -> PathBuf {
        self.resolve(&self.source_dir)
    }

    pub fn resources_path(&self) -> PathBuf {
        self.resolve(&self.resources_dir)
    }

    pub fn build_path(&self) -> PathBuf {
        self.resolve(&self.build_dir)
    }

    fn resolve(&self, dir: &str) -> PathBuf {
        let path = Path::new(dir);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            Path::new(&self.project_path).join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = GenerateConfig::default();
        assert_eq!(config.project_path, ".");
        assert_eq!(config.source_dir, "src/main/java");
        assert_eq!(config.resources_dir, "src/main/resources");
        assert_eq!(config.build_dir, "target/classes");
        assert!(!config.is_verbose());
        assert_eq!(
            config.effective_resource_roots(),
            vec!["src/main/resources".to_string()]
        );
    }

    #[test]
    fn test_config_validation() {
        let config = GenerateConfig {
            project_path: "./does-not-exist-anywhere".to_string(),
            ..Default::default()
        };

        let result = config.validate();
        assert!(result.is_err());
        if let Err(ConfigError::InvalidConfig(message)) = result {
            assert!(message.contains("does-not-exist-anywhere"));
        } else {
            panic!("Expected InvalidConfig error");
        }
    }

    #[test]
    fn test_config_merge() {
        let mut base = GenerateConfig::default();
        let override_config = GenerateConfig {
            build_dir: "out/classes".to_string(),
            verbose: Some(true),
            ..Default::default()
        };

        base.merge(&override_config);
        assert_eq!(base.build_dir, "out/classes");
        assert!(base.is_verbose());
        assert_eq!(base.source_dir, "src/main/java"); // Should remain default
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = tempfile::TempDir::new().unwrap();

        let config = GenerateConfig {
            project_path: temp_dir.path().to_string_lossy().to_string(),
            build_dir: "build/meta".to_string(),
            verbose: Some(true),
            ..Default::default()
        };

        let temp_file = NamedTempFile::new().unwrap();
        config.save_to_file(temp_file.path()).unwrap();

        let loaded_config = GenerateConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(loaded_config.build_dir, "build/meta");
        assert!(loaded_config.is_verbose());
    }

    #[test]
    fn test_paths_resolve_against_project_root() {
        let config = GenerateConfig {
            project_path: "/work/project".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.source_path(),
            PathBuf::from("/work/project/src/main/java")
        );
        assert_eq!(
            config.build_path(),
            PathBuf::from("/work/project/target/classes")
        );

        let absolute = GenerateConfig {
            project_path: "/work/project".to_string(),
            build_dir: "/elsewhere/classes".to_string(),
            ..Default::default()
        };
        assert_eq!(absolute.build_path(), PathBuf::from("/elsewhere/classes"));
    }

    #[test]
    fn test_explicit_resource_roots_replace_the_default() {
        let config = GenerateConfig {
            resource_roots: Some(vec!["res/main".to_string(), "res/extra".to_string()]),
            ..Default::default()
        };
        assert_eq!(
            config.effective_resource_roots(),
            vec!["res/main".to_string(), "res/extra".to_string()]
        );
    }
}
