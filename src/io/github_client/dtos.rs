#![allow(dead_code)] // Not every field is displayed, but they are all part of the record.

use serde::Deserialize;

// Only the fields we care about. serde ignores the rest of GitHub's payload.
//
// API Reference: https://docs.github.com/en/rest/actions/workflows

/// A GitHub repository.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Repository {
    pub id: u64,

    pub name: String,

    /// `owner/repo`. This is the identity of a repository in this app.
    pub full_name: String,

    /// Missing on some trimmed-down payloads.
    #[serde(default)]
    pub owner: Option<User>,
}

/// The owner of a repository, either a user or an organization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub id: u64,

    pub login: String,

    /// "User" or "Organization".
    #[serde(rename = "type")]
    pub kind: String,
}

/// A GitHub Actions workflow.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Workflow {
    pub id: u64,

    pub name: String,

    /// For example `.github/workflows/ci.yml`.
    pub path: String,

    /// For example "active" or "disabled_manually".
    pub state: String,
}

/// Envelope of `repos/{owner}/{repo}/actions/workflows`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WorkflowPage {
    pub total_count: u64,

    #[serde(default)]
    pub workflows: Vec<Workflow>,
}

/// Response of `repos/{owner}/{repo}/actions/workflows/{id}/timing`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub billable: Billable,
}

/// Billable time per runner OS. An OS that never ran is simply absent.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Billable {
    #[serde(rename = "UBUNTU", default)]
    pub ubuntu: Option<UsageDetails>,

    #[serde(rename = "MACOS", default)]
    pub macos: Option<UsageDetails>,

    #[serde(rename = "WINDOWS", default)]
    pub windows: Option<UsageDetails>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct UsageDetails {
    pub total_ms: u64,
}
