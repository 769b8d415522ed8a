use clap::Parser;
use secrecy::SecretString;

use crate::config::auth;
use crate::io::github_client::DEFAULT_API_URL;
use crate::prelude::*;
use crate::report::OutputKind;

impl Cli {
    /// Convenience constructor to avoid redundant `Parser` imports in main.
    pub fn new() -> Self {
        Cli::parse()
    }

    /// Turns `--output` into a renderer.
    /// Runs before anything touches the network.
    pub fn try_output_kind(&self) -> AppResult<OutputKind> {
        let kind = self.output.parse::<OutputKind>()?;

        Ok(kind)
    }

    /// The flag (or `GH_TOKEN`) wins, then whatever else is lying around.
    pub fn resolve_token(&self) -> Option<SecretString> {
        auth::resolve_token(self.token.as_deref())
    }

    /// No targets means "the repository I'm standing in".
    pub fn wants_current_repository(&self) -> bool {
        self.targets.is_empty()
    }

    /// `--skip` is only for explicit targets. You asked for this repository, you get it.
    pub fn skips_empty(&self) -> bool {
        self.skip && !self.wants_current_repository()
    }
}

// Structs

#[derive(Parser, Debug)]
#[command(
    name = "actions-usage",
    version,
    about = "Gets the usage for all workflows in one or more GitHub repositories.",
    after_help = "If target is not specified, actions-usage will attempt to get usage for a git repo in the current working directory.\n\
Target can be one of:\n\
- username (e.g. octocat)\n\
- organization (e.g. rust-lang)\n\
- repository (e.g. rust-lang/rust)"
)]
pub struct Cli {
    /// Users, organizations, or `owner/repo` repositories.
    pub targets: Vec<String>,

    /// Output format: human or tsv (machine readable).
    #[arg(long, default_value = "human")]
    pub output: String,

    /// Skips displaying repositories with no workflows.
    /// Ignored for the current repository.
    #[arg(long, default_value_t = false)]
    pub skip: bool,

    /// Skip animations
    #[arg(long, default_value_t = false)]
    pub no_animate: bool,

    /// GitHub token. Falls back to GITHUB_TOKEN, then `gh auth token`.
    #[arg(long, env = "GH_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Root of the GitHub REST API.
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,
}
