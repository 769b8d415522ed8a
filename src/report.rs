pub mod human;
pub mod humanize;
pub mod tsv;

use std::str::FromStr;

use crate::calculation::usage::RepoUsage;
use crate::error::Error;
use crate::prelude::*;

/// How the report gets printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputKind {
    /// Readable summary per repository.
    #[default]
    Human,
    /// Tab separated values, for piping into other tools.
    Tsv,
}

impl OutputKind {
    /// Renders the whole report.
    pub fn render(&self, usage: &RepoUsage) -> AppResult<String> {
        match self {
            OutputKind::Human => Ok(human::render(usage)),
            OutputKind::Tsv => tsv::render(usage),
        }
    }

    /// The human output gets a title, TSV stays machine readable.
    pub fn banner(&self) -> Option<String> {
        match self {
            OutputKind::Human => Some(format!(
                "GitHub Actions Usage (v{})\n\n",
                env!("CARGO_PKG_VERSION")
            )),
            OutputKind::Tsv => None,
        }
    }
}

impl FromStr for OutputKind {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "human" => Ok(OutputKind::Human),
            "tsv" => Ok(OutputKind::Tsv),
            _ => Err(Error::UnknownFormat(name.to_owned())),
        }
    }
}
