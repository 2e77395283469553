use log::warn;

use crate::config::TocConfig;
use crate::utils::error::{BoxResult, TocError};

/// Validate the table of contents configuration
pub fn validate_config(config: &TocConfig) -> BoxResult<()> {
    if config.start_level == 0 {
        return Err(TocError::Config(
            "toc.start_level must be 1 or greater".to_string()
        ).into());
    }

    if config.end_level == 0 || config.end_level < -1 {
        return Err(TocError::Config(format!(
            "toc.end_level must be 1 or greater, or -1 for no limit (got {})", config.end_level
        )).into());
    }

    if let Some(stop) = config.stop_level() {
        if stop < config.start_level {
            warn!(
                "toc.end_level ({}) is below toc.start_level ({}), the table of contents will be empty",
                stop, config.start_level
            );
        }
    }

    Ok(())
}
