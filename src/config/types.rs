use serde::Deserialize;

use crate::config::defaults;

/// Table of contents configuration, built from defaults, config files and
/// command line overrides
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocConfig {
    /// Shallowest depth to render (1 = top-level headings)
    pub start_level: usize,

    /// Deepest depth to render, `-1` for no limit
    pub end_level: i64,

    /// Render `<ol>` instead of `<ul>`
    pub ordered: bool,

    /// Markup written before the list; unset means the default `<nav>` opener
    pub prefix: Option<String>,

    /// Markup written after the list; unset means the default `</nav>`
    pub suffix: Option<String>,
}

impl Default for TocConfig {
    fn default() -> Self {
        TocConfig {
            start_level: defaults::default_start_level(),
            end_level: defaults::default_end_level(),
            ordered: defaults::default_ordered(),
            prefix: None,
            suffix: None,
        }
    }
}

impl TocConfig {
    /// The end level as a render bound, `None` when unlimited
    pub fn stop_level(&self) -> Option<usize> {
        usize::try_from(self.end_level).ok()
    }

    /// Apply every setting present in `overrides`
    pub fn merge(&mut self, overrides: &TocOverrides) {
        if let Some(start_level) = overrides.start_level {
            self.start_level = start_level;
        }
        if let Some(end_level) = overrides.end_level {
            self.end_level = end_level;
        }
        if let Some(ordered) = overrides.ordered {
            self.ordered = ordered;
        }
        if overrides.prefix.is_some() {
            self.prefix = overrides.prefix.clone();
        }
        if overrides.suffix.is_some() {
            self.suffix = overrides.suffix.clone();
        }
    }
}

/// Partial table of contents settings, as read from one config file or the
/// command line
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TocOverrides {
    #[serde(default, alias = "startLevel")]
    pub start_level: Option<usize>,

    #[serde(default, alias = "endLevel")]
    pub end_level: Option<i64>,

    #[serde(default)]
    pub ordered: Option<bool>,

    #[serde(default)]
    pub prefix: Option<String>,

    #[serde(default)]
    pub suffix: Option<String>,
}

/// The parts of a site config file this crate reads. Other keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteConfig {
    #[serde(default, alias = "tableOfContents")]
    pub toc: TocOverrides,
}
