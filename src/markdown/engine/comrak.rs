use comrak::Options;

/// Create ComrakOptions with GitHub Flavored Markdown settings and heading ids
pub fn create_comrak_options<'a>() -> Options<'a> {
    let mut options = Options::default();

    // Extension options - GitHub Flavored Markdown
    options.extension.strikethrough = true;
    options.extension.tagfilter = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.footnotes = true;
    // Headings need ids for the table of contents to link to
    options.extension.header_ids = Some(String::new());

    // Render options
    options.render.hardbreaks = false;
    options.render.github_pre_lang = true;
    options.render.unsafe_ = true;

    options
}

/// Render markdown to HTML using Comrak
pub fn render_markdown(content: &str, options: &Options<'_>) -> String {
    comrak::markdown_to_html(content, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_get_ids() {
        let options = create_comrak_options();
        let markdown = "# Getting Started\n\nSome **bold** text.\n\n## Install\n";
        let html = render_markdown(markdown, &options);

        assert!(html.contains("id=\"getting-started\""));
        assert!(html.contains("id=\"install\""));
        assert!(html.contains("<strong>bold</strong>"));
    }
}
