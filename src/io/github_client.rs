pub mod client;
pub mod dtos;
pub mod transport;

#[cfg(test)]
pub mod fake;

pub use client::GitHubClient;
pub use dtos::{Repository, Usage, Workflow};
pub use transport::{Transport, UreqTransport};

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// The only host `get_current_repository` knows how to talk to.
pub const GITHUB_HOST: &str = "github.com";
