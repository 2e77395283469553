use std::path::PathBuf;

use crate::cli::types::TocArgs;
use crate::input::load_html;
use crate::liquid::render_template;
use crate::utils::error::BoxResult;
use crate::utils::fs::read_file;

use super::{emit, resolve_config};

/// Handle the template command
pub fn handle_template_command(
    template: &PathBuf,
    file: &PathBuf,
    toc_args: &TocArgs,
    output: Option<&PathBuf>,
    source: Option<&PathBuf>,
) -> BoxResult<()> {
    let config = resolve_config(source, toc_args)?;
    let template = read_file(template)?;
    let content = load_html(file)?;

    let rendered = render_template(&template, &content, &config)?;
    emit(&rendered, output.map(|p| p.as_path()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_template_from_markdown() {
        let dir = TempDir::new().unwrap();
        let layout = dir.path().join("page.liquid");
        let page = dir.path().join("page.md");
        let out = dir.path().join("page.html");
        std::fs::write(&layout, "{{ content | toc }}").unwrap();
        std::fs::write(&page, "# Title\n\n## Part One\n\n## Part Two\n").unwrap();

        handle_template_command(&layout, &page, &TocArgs::default(), Some(&out), Some(&dir.path().to_path_buf())).unwrap();

        let rendered = std::fs::read_to_string(&out).unwrap();
        assert_eq!(rendered, "<nav id=\"TableOfContents\">\n  <ul>\n    <li><a href=\"#part-one\">Part One</a></li>\n    <li><a href=\"#part-two\">Part Two</a></li>\n  </ul>\n</nav>");
    }
}
