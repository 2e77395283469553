use std::fmt;
use liquid_core::{Runtime, ValueView, Value, Result as LiquidResult};
use liquid_core::parser::{FilterArguments, ParseFilter, ParameterReflection};
use liquid_core::{FilterReflection};

use crate::config::TocConfig;
use crate::toc::build_toc_from_html;

/// Toc filter implementation that renders the table of contents of an HTML string
#[derive(Debug, Clone)]
pub struct TocFilter {
    config: TocConfig,
}

impl liquid_core::Filter for TocFilter {
    fn evaluate(&self, input: &dyn ValueView, _runtime: &dyn Runtime) -> LiquidResult<Value> {
        let html = input.to_kstr().to_string();
        let toc = build_toc_from_html(&html);
        Ok(Value::scalar(toc.render(&self.config)))
    }
}

impl fmt::Display for TocFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toc")
    }
}

/// Parse filter factory for toc
#[derive(Debug, Clone)]
pub struct TocFilterParser {
    pub config: TocConfig,
}

impl FilterReflection for TocFilterParser {
    fn name(&self) -> &str {
        "toc"
    }

    fn description(&self) -> &str {
        "Renders a table of contents for the headings in the input HTML"
    }

    fn positional_parameters(&self) -> &'static [ParameterReflection] {
        &[]
    }

    fn keyword_parameters(&self) -> &'static [ParameterReflection] {
        &[]
    }
}

impl ParseFilter for TocFilterParser {
    fn parse(&self, _args: FilterArguments) -> LiquidResult<Box<dyn liquid_core::Filter>> {
        Ok(Box::new(TocFilter {
            config: self.config.clone(),
        }))
    }

    fn reflection(&self) -> &dyn FilterReflection {
        self
    }
}
