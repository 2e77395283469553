use std::path::PathBuf;

use crate::input::load_toc;
use crate::utils::error::BoxResult;

/// Handle the ids command
pub fn handle_ids_command(file: &PathBuf) -> BoxResult<()> {
    let toc = load_toc(file)?;
    for id in toc.identifiers() {
        println!("{}", id);
    }
    Ok(())
}
