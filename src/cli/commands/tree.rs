use std::path::PathBuf;

use crate::input::load_toc;
use crate::utils::error::{BoxResult, TocError};

/// Handle the tree command
pub fn handle_tree_command(file: &PathBuf, pretty: bool) -> BoxResult<()> {
    let toc = load_toc(file)?;

    let json = if pretty {
        serde_json::to_string_pretty(&toc)
    } else {
        serde_json::to_string(&toc)
    }
    .map_err(|e| TocError::Generic(format!("Failed to serialize tree: {}", e)))?;

    println!("{}", json);
    Ok(())
}
