//! Figures out which GitHub repository the working directory is a checkout of.

use std::process::Command;

use log::{debug, info};

use crate::error::{Error, Result};

/// Remote names we trust more than others, best first.
const PREFERRED_REMOTES: [&str; 3] = ["upstream", "github", "origin"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteRepository {
    pub host: String,
    pub owner: String,
    pub name: String,
}

impl RemoteRepository {
    /// `owner/name`, the way GitHub spells it.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

/// Reads `git remote -v` in the working directory and picks one remote.
pub fn current_repository() -> Result<RemoteRepository> {
    let output = Command::new("git")
        .args(["remote", "-v"])
        .output()
        .map_err(|e| Error::NoCurrentRepository(format!("could not run git: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_owned();

        return Err(Error::NoCurrentRepository(stderr));
    }

    let listing = String::from_utf8_lossy(&output.stdout);

    let url = pick_remote(&listing)
        .ok_or_else(|| Error::NoCurrentRepository("no git remotes found".to_owned()))?;

    debug!("Using remote url {url}");

    let remote = parse_remote_url(url).ok_or_else(|| {
        Error::NoCurrentRepository(format!("can't make sense of remote url '{url}'"))
    })?;

    info!("Current repository is {} on {}", remote.full_name(), remote.host);

    Ok(remote)
}

/// Picks the fetch url of the most trusted remote in `git remote -v` output.
///
/// Each line looks like `origin\tgit@github.com:owner/repo.git (fetch)`.
fn pick_remote(listing: &str) -> Option<&str> {
    let remotes: Vec<(&str, &str)> = listing
        .lines()
        .filter(|line| line.ends_with("(fetch)"))
        .filter_map(|line| {
            let mut parts = line.split_whitespace();

            Some((parts.next()?, parts.next()?))
        })
        .collect();

    PREFERRED_REMOTES
        .iter()
        .find_map(|preferred| remotes.iter().find(|(name, _)| name == preferred))
        .or_else(|| remotes.first())
        .map(|(_, url)| *url)
}

/// Understands `https://host/owner/repo(.git)`, `ssh://[user@]host[:port]/owner/repo(.git)`
/// and the scp-like `user@host:owner/repo(.git)`.
pub fn parse_remote_url(url: &str) -> Option<RemoteRepository> {
    let url = url.trim();

    let (authority, path) = match url.split_once("://") {
        Some((_scheme, rest)) => rest.split_once('/')?,
        None => url.split_once(':')?,
    };

    // Drop credentials and port.
    let host = authority.rsplit('@').next()?;
    let host = host.split(':').next()?.to_ascii_lowercase();
    let host = host.strip_prefix("www.").map(str::to_owned).unwrap_or(host);

    let path = path.trim_matches('/');
    let path = path.strip_suffix(".git").unwrap_or(path);

    let mut segments = path.split('/');
    let owner = segments.next()?;
    let name = segments.next()?;

    if host.is_empty() || owner.is_empty() || name.is_empty() || segments.next().is_some() {
        return None;
    }

    Some(RemoteRepository {
        host,
        owner: owner.to_owned(),
        name: name.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote(host: &str, owner: &str, name: &str) -> RemoteRepository {
        RemoteRepository {
            host: host.to_owned(),
            owner: owner.to_owned(),
            name: name.to_owned(),
        }
    }

    #[test]
    fn parses_https_urls() {
        assert_eq!(
            parse_remote_url("https://github.com/octocat/hello-world.git"),
            Some(remote("github.com", "octocat", "hello-world"))
        );
        assert_eq!(
            parse_remote_url("https://token@www.GitHub.com/octocat/hello-world/"),
            Some(remote("github.com", "octocat", "hello-world"))
        );
    }

    #[test]
    fn parses_ssh_urls() {
        assert_eq!(
            parse_remote_url("ssh://git@github.com:22/rust-lang/rust.git"),
            Some(remote("github.com", "rust-lang", "rust"))
        );
    }

    #[test]
    fn parses_scp_like_urls() {
        assert_eq!(
            parse_remote_url("git@gitlab.example.com:team/project.git"),
            Some(remote("gitlab.example.com", "team", "project"))
        );
    }

    #[test]
    fn rejects_things_that_are_not_owner_and_repo() {
        assert_eq!(parse_remote_url("/srv/git/project.git"), None);
        assert_eq!(parse_remote_url("https://github.com/octocat"), None);
        assert_eq!(parse_remote_url("https://gitlab.com/group/sub/project.git"), None);
    }

    #[test]
    fn prefers_upstream_over_origin() {
        let listing = "origin\tgit@github.com:me/fork.git (fetch)\n\
                       origin\tgit@github.com:me/fork.git (push)\n\
                       upstream\thttps://github.com/them/project.git (fetch)\n\
                       upstream\thttps://github.com/them/project.git (push)\n";

        assert_eq!(
            pick_remote(listing),
            Some("https://github.com/them/project.git")
        );
    }

    #[test]
    fn falls_back_to_the_first_remote() {
        let listing = "mirror\thttps://github.com/a/b.git (fetch)\n\
                       backup\thttps://github.com/c/d.git (fetch)\n";

        assert_eq!(pick_remote(listing), Some("https://github.com/a/b.git"));
    }

    #[test]
    fn no_remotes_is_none() {
        assert_eq!(pick_remote(""), None);
    }

    #[test]
    fn full_name_joins_owner_and_name() {
        assert_eq!(remote("github.com", "a", "b").full_name(), "a/b");
    }
}
