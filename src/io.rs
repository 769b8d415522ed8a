pub mod git_remote;
pub mod github_client;
