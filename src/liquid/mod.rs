mod filters;

use liquid::{Parser, ParserBuilder};

use crate::config::TocConfig;
use crate::utils::error::{BoxResult, TocError};

pub use filters::{register_filters, TocFilterParser};

/// Build a Liquid parser with the standard library and the `toc` filter
pub fn create_parser(config: &TocConfig) -> BoxResult<Parser> {
    let parser_builder = register_filters(ParserBuilder::with_stdlib(), config);

    parser_builder
        .build()
        .map_err(|e| TocError::Template(format!("Failed to build Liquid parser: {}", e)).into())
}

/// Render a Liquid template with `content` bound to the given HTML
pub fn render_template(template: &str, content: &str, config: &TocConfig) -> BoxResult<String> {
    let parser = create_parser(config)?;

    let template = parser
        .parse(template)
        .map_err(|e| TocError::Template(format!("Failed to parse template: {}", e)))?;

    let globals = liquid::object!({
        "content": content,
    });

    template
        .render(&globals)
        .map_err(|e| TocError::Template(format!("Failed to render template: {}", e)).into())
}
