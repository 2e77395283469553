mod toc;

use liquid::ParserBuilder;
use crate::config::TocConfig;

/// Register custom filters for use in Liquid templates
pub fn register_filters(parser_builder: ParserBuilder, config: &TocConfig) -> ParserBuilder {
    parser_builder
        .filter(toc::TocFilterParser { config: config.clone() })
}

pub use toc::TocFilterParser;
