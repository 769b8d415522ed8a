//! GitHub token resolution.
//!
//! Tokens are tried in this order:
//!
//! 1. Explicit token (`--token` or `GH_TOKEN`)
//! 2. `GITHUB_TOKEN`
//! 3. `gh auth token` (GitHub CLI)
//! 4. Unauthenticated (returns `None`)

use std::env;
use std::process::Command;

use log::{debug, info};
use secrecy::SecretString;

const FALLBACK_TOKEN_VAR: &str = "GITHUB_TOKEN";

pub fn resolve_token(explicit: Option<&str>) -> Option<SecretString> {
    let fallback = env::var(FALLBACK_TOKEN_VAR).ok();

    let token = pick_token(explicit, fallback.as_deref()).or_else(gh_token);

    if token.is_none() {
        info!("No GitHub token found, requests will be unauthenticated");
    }

    token.map(SecretString::from)
}

// private

/// First non-blank candidate wins.
fn pick_token(explicit: Option<&str>, fallback: Option<&str>) -> Option<String> {
    [explicit, fallback]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|token| !token.is_empty())
        .map(str::to_owned)
}

/// Asks the GitHub CLI. Not having it installed, or not being logged in, is fine.
fn gh_token() -> Option<String> {
    let output = match Command::new("gh").args(["auth", "token"]).output() {
        Ok(output) => output,
        Err(e) => {
            debug!("Could not run `gh auth token`: {e}");
            return None;
        }
    };

    if !output.status.success() {
        debug!(
            "`gh auth token` exited with {:?}: {}",
            output.status.code(),
            String::from_utf8_lossy(&output.stderr).trim()
        );
        return None;
    }

    let token = String::from_utf8_lossy(&output.stdout).trim().to_owned();

    (!token.is_empty()).then_some(token)
}
