mod render;
mod tree;
mod ids;
mod template;

use std::path::{Path, PathBuf};
use log::debug;

use crate::cli::types::TocArgs;
use crate::config::{self, TocConfig};
use crate::config::validation::validate_config;
use crate::utils::error::BoxResult;
use crate::utils::fs::write_file;

pub use render::handle_render_command;
pub use tree::handle_tree_command;
pub use ids::handle_ids_command;
pub use template::handle_template_command;

/// Load config files and apply the command line settings over them
fn resolve_config(source: Option<&PathBuf>, args: &TocArgs) -> BoxResult<TocConfig> {
    let source_dir = source.cloned().unwrap_or_else(|| PathBuf::from("."));
    let mut config = config::load_config(&source_dir, args.config.clone())?;

    config.merge(&args.overrides());
    validate_config(&config)?;

    debug!("Effective table of contents settings: {:?}", config);
    Ok(config)
}

/// Write to the output file if one was given, otherwise to stdout
fn emit(contents: &str, output: Option<&Path>) -> BoxResult<()> {
    match output {
        Some(path) => {
            write_file(path, contents)?;
            log::info!("Wrote {}", path.display());
        }
        None => println!("{}", contents),
    }
    Ok(())
}
