use std::path::{Path, PathBuf};
use std::fs;
use log::debug;

use crate::config::types::{SiteConfig, TocConfig, TocOverrides};
use crate::config::validation;
use crate::utils::error::{BoxResult, TocError};

/// Configuration file names to look for
const CONFIG_FILES: [&str; 3] = ["_config.yml", "_config.yaml", "_config.toml"];

/// Load table of contents configuration from config files
pub fn load_config<P: AsRef<Path>>(
    source_dir: P,
    config_files: Option<Vec<PathBuf>>
) -> BoxResult<TocConfig> {
    // Start with default configuration
    let mut config = TocConfig::default();

    let config_paths = match config_files {
        Some(paths) => paths,
        None => find_default_config_files(&source_dir)?,
    };

    if config_paths.is_empty() {
        debug!("No configuration files found, using defaults");
    } else {
        for path in config_paths {
            debug!("Loading configuration from {}", path.display());
            merge_config_file(&mut config, &path)?;
        }
    }

    validation::validate_config(&config)?;

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// Find default configuration files
fn find_default_config_files<P: AsRef<Path>>(source_dir: P) -> BoxResult<Vec<PathBuf>> {
    let mut config_paths = Vec::new();
    for &config_file in &CONFIG_FILES {
        let config_path = source_dir.as_ref().join(config_file);
        if config_path.exists() {
            config_paths.push(config_path);
        }
    }

    Ok(config_paths)
}

/// Merge a configuration file into the current configuration
fn merge_config_file(config: &mut TocConfig, config_path: &Path) -> BoxResult<()> {
    if !config_path.exists() {
        return Err(TocError::Config(format!(
            "Configuration file not found: {}", config_path.display()
        )).into());
    }

    let content = fs::read_to_string(config_path)
        .map_err(|e| TocError::Config(format!(
            "Failed to read configuration file {}: {}", config_path.display(), e
        )))?;

    // Parse based on file extension
    let overrides = if let Some(ext) = config_path.extension() {
        let ext_str = ext.to_string_lossy().to_lowercase();
        match ext_str.as_str() {
            "yml" | "yaml" => parse_yaml_config(&content, config_path)?,
            "toml" => parse_toml_config(&content, config_path)?,
            "json" => parse_json_config(&content, config_path)?,
            _ => {
                return Err(TocError::Config(format!(
                    "Unsupported configuration file format: {}", ext.to_string_lossy()
                )).into());
            }
        }
    } else {
        // Assume YAML if no extension
        parse_yaml_config(&content, config_path)?
    };

    debug!("Table of contents settings from {}: {:?}", config_path.display(), overrides);
    config.merge(&overrides);

    Ok(())
}

/// Parse a YAML configuration file
fn parse_yaml_config(content: &str, path: &Path) -> BoxResult<TocOverrides> {
    // An empty YAML file is a valid config with nothing set
    if content.trim().is_empty() {
        return Ok(TocOverrides::default());
    }

    serde_yaml::from_str::<SiteConfig>(content)
        .map(|site| site.toc)
        .map_err(|e| TocError::Config(format!(
            "Failed to parse YAML configuration ({}): {}", path.display(), e
        )).into())
}

/// Parse a TOML configuration file
fn parse_toml_config(content: &str, path: &Path) -> BoxResult<TocOverrides> {
    toml::from_str::<SiteConfig>(content)
        .map(|site| site.toc)
        .map_err(|e| TocError::Config(format!(
            "Failed to parse TOML configuration ({}): {}", path.display(), e
        )).into())
}

/// Parse a JSON configuration file
fn parse_json_config(content: &str, path: &Path) -> BoxResult<TocOverrides> {
    serde_json::from_str::<SiteConfig>(content)
        .map(|site| site.toc)
        .map_err(|e| TocError::Config(format!(
            "Failed to parse JSON configuration ({}): {}", path.display(), e
        )).into())
}
