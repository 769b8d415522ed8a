use miette::Diagnostic;
use thiserror::Error;

// Codes follow the same layout as the modules.
// actions_usage::parse -> cli argument parsing/validation.
// actions_usage::target -> things the user asked for that don't exist.
// actions_usage::api -> http/GitHub errors.
// actions_usage::git -> working directory detection.

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    /// GitHub answered 404. Single-entity lookups turn this into `None`.
    #[error("Not found: GET {path}")]
    #[diagnostic(code(actions_usage::api::not_found))]
    NotFound { path: String },

    #[error("Unknown target: '{0}'")]
    #[diagnostic(
        code(actions_usage::target::unknown),
        help("Targets are a user login, an organization login, or a repository like 'owner/repo'.")
    )]
    UnknownTarget(String),

    #[error("Unexpected owner type for '{login}': '{kind}'")]
    #[diagnostic(
        code(actions_usage::target::owner_type),
        help("Only 'User' and 'Organization' owners can list repositories.")
    )]
    UnexpectedOwnerType { login: String, kind: String },

    #[error("Not sure how to handle host '{0}'")]
    #[diagnostic(
        code(actions_usage::git::host),
        help("Only repositories hosted on github.com are supported.")
    )]
    UnexpectedHost(String),

    #[error("No current repository: {0}")]
    #[diagnostic(
        code(actions_usage::git::no_repository),
        help("Run inside a git checkout with a GitHub remote, or pass a target.")
    )]
    NoCurrentRepository(String),

    #[error("GitHub API request failed: GET {path}")]
    #[diagnostic(code(actions_usage::api::request))]
    TransportFailure {
        path: String,
        #[source]
        source: ureq::Error,
    },

    #[error("Malformed response from GET {path}")]
    #[diagnostic(code(actions_usage::api::response))]
    MalformedResponse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Gave up on {path} after {limit} pages")]
    #[diagnostic(
        code(actions_usage::api::page_limit),
        help("The server kept returning non-empty pages.")
    )]
    PageLimitExceeded { path: String, limit: u32 },

    #[error("Unknown output format: '{0}'")]
    #[diagnostic(
        code(actions_usage::parse::output),
        help("Try '--output=human' or '--output=tsv'.")
    )]
    UnknownFormat(String),
}

/// Result for the GitHub-facing parts of the app.
pub type Result<T> = std::result::Result<T, Error>;
