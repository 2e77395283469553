use std::path::PathBuf;
use log::debug;

use crate::cli::types::TocArgs;
use crate::input::load_toc;
use crate::utils::error::BoxResult;

use super::{emit, resolve_config};

/// Handle the render command
pub fn handle_render_command(
    file: &PathBuf,
    toc_args: &TocArgs,
    output: Option<&PathBuf>,
    source: Option<&PathBuf>,
) -> BoxResult<()> {
    let config = resolve_config(source, toc_args)?;
    let toc = load_toc(file)?;
    debug!("Built table of contents with {} top-level entries", toc.nodes.len());

    emit(&toc.render(&config), output.map(|p| p.as_path()))
}
