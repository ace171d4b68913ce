// File: src/config.rs
// Purpose: Route manifest configuration from rhtmx.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::manifest::{ManifestBuilder, DEFAULT_MAX_DEPTH_WARNING};
use crate::scanner::{default_exclude_dirs, default_extensions, ScanOptions};

/// Manifest configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub routing: RoutingConfig,
}

/// Routing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Directory holding route files (default: "app")
    #[serde(default = "default_routes_dir")]
    pub routes_dir: String,

    /// Extensions recognized as route files, without the dot
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Directory names never descended into
    #[serde(default = "default_exclude_dirs")]
    pub exclude_dirs: Vec<String>,

    /// Whether `_private` directories are skipped (default: true)
    #[serde(default = "default_true")]
    pub skip_private_dirs: bool,

    /// Routes nested deeper than this draw a warning
    #[serde(default = "default_max_depth_warning")]
    pub max_depth_warning: usize,
}

// Default values
fn default_routes_dir() -> String {
    "app".to_string()
}

fn default_true() -> bool {
    true
}

fn default_max_depth_warning() -> usize {
    DEFAULT_MAX_DEPTH_WARNING
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            routes_dir: default_routes_dir(),
            extensions: default_extensions(),
            exclude_dirs: default_exclude_dirs(),
            skip_private_dirs: true,
            max_depth_warning: default_max_depth_warning(),
        }
    }
}

impl RoutingConfig {
    pub fn to_scan_options(&self) -> ScanOptions {
        ScanOptions {
            extensions: self.extensions.clone(),
            exclude_dirs: self.exclude_dirs.clone(),
            skip_private_dirs: self.skip_private_dirs,
        }
    }

    pub fn to_builder(&self) -> ManifestBuilder {
        ManifestBuilder::new().with_max_depth_warning(self.max_depth_warning)
    }

    /// Route directory resolved against a project root
    pub fn routes_path(&self, project_root: impl AsRef<Path>) -> std::path::PathBuf {
        project_root.as_ref().join(&self.routes_dir)
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing or empty file means defaults
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./rhtmx.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("rhtmx.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.routing.routes_dir, "app");
        assert_eq!(config.routing.extensions, vec!["ts", "tsx", "js", "jsx"]);
        assert!(config.routing.exclude_dirs.contains(&"node_modules".to_string()));
        assert!(config.routing.skip_private_dirs);
        assert_eq!(config.routing.max_depth_warning, 12);
    }

    #[test]
    fn test_empty_config() {
        let config = toml::from_str::<Config>("").unwrap_or_default();
        assert_eq!(config.routing.routes_dir, "app");
        assert_eq!(config.routing.max_depth_warning, 12);
    }

    #[test]
    fn test_custom_routing() {
        let toml = r#"
            [routing]
            routes_dir = "src/app"
            extensions = ["tsx", "mdx"]
            skip_private_dirs = false
            max_depth_warning = 4
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.routing.routes_dir, "src/app");
        assert_eq!(config.routing.extensions, vec!["tsx", "mdx"]);
        assert!(!config.routing.skip_private_dirs);
        assert_eq!(config.routing.max_depth_warning, 4);
        // Unset fields keep their defaults
        assert!(config.routing.exclude_dirs.contains(&"dist".to_string()));
    }

    #[test]
    fn test_to_scan_options() {
        let mut routing = RoutingConfig::default();
        routing.exclude_dirs.push("vendor".to_string());
        routing.skip_private_dirs = false;

        let options = routing.to_scan_options();
        assert!(options.is_excluded_dir("vendor"));
        assert!(!options.is_excluded_dir("_components"));
        assert_eq!(options.extensions, routing.extensions);
    }

    #[test]
    fn test_load_missing_and_empty_file() {
        let dir = tempfile::tempdir().unwrap();

        let missing = Config::load(dir.path().join("rhtmx.toml")).unwrap();
        assert_eq!(missing.routing.routes_dir, "app");

        let path = dir.path().join("empty.toml");
        fs::write(&path, "  \n").unwrap();
        let empty = Config::load(&path).unwrap();
        assert_eq!(empty.routing.routes_dir, "app");
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rhtmx.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "[routing]\nroutes_dir = \"routes\"").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.routing.routes_dir, "routes");
        assert_eq!(config.routing.routes_path("/srv/site"), Path::new("/srv/site/routes"));
    }

    #[test]
    fn test_load_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rhtmx.toml");
        fs::write(&path, "[routing\nroutes_dir = ").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
