mod engine;

pub use engine::{create_comrak_options, render_markdown};

/// Render a markdown document to HTML with heading ids
pub fn markdown_to_html(markdown: &str) -> String {
    let options = create_comrak_options();
    render_markdown(markdown, &options)
}
