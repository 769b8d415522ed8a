use std::collections::{BTreeMap, HashSet};

use log::info;

use crate::error::{Error, Result};
use crate::io::github_client::{GitHubClient, Repository, Transport};

/// Repositories to report on, grouped by owner login.
/// Each owner's list is in the order GitHub handed it out.
pub type RepoMap = BTreeMap<String, Vec<Repository>>;

/// Turns command line targets into repositories.
///
/// `owner/repo` is a single repository, anything else is a user or an organization
/// whose repositories are all included. A target GitHub doesn't know fails the lot.
pub fn resolve_targets<T: Transport>(client: &GitHubClient<T>, targets: &[String]) -> Result<RepoMap> {
    let mut repos = RepoMap::new();

    for target in targets {
        if target.contains('/') {
            map_repository(client, &mut repos, target)?;
        } else {
            map_owner(client, &mut repos, target)?;
        }
    }

    Ok(repos)
}

/// Flattens the owner groups, keeping the first sighting of each repository.
///
/// `octocat octocat/hello` names `octocat/hello` twice.
pub fn unique_repositories(repos: RepoMap) -> Vec<Repository> {
    let mut seen = HashSet::new();

    repos
        .into_values()
        .flatten()
        .filter(|repository| seen.insert(repository.full_name.to_owned()))
        .collect()
}

// private

fn map_repository<T: Transport>(
    client: &GitHubClient<T>,
    repos: &mut RepoMap,
    full_name: &str,
) -> Result<()> {
    let repository = client
        .get_repository(full_name)?
        .ok_or_else(|| Error::UnknownTarget(full_name.to_owned()))?;

    let owner = owner_login(&repository);

    repos.entry(owner).or_default().push(repository);

    Ok(())
}

fn map_owner<T: Transport>(client: &GitHubClient<T>, repos: &mut RepoMap, login: &str) -> Result<()> {
    let owner = client
        .get_user(login)?
        .ok_or_else(|| Error::UnknownTarget(login.to_owned()))?;

    let owned = client.get_all_repositories(&owner)?;

    info!("{} ({}) has {} repositories", owner.login, owner.kind, owned.len());

    repos.entry(owner.login).or_default().extend(owned);

    Ok(())
}

/// The owner record is optional on a repository, the full name never is.
fn owner_login(repository: &Repository) -> String {
    match &repository.owner {
        Some(owner) => owner.login.to_owned(),
        None => repository
            .full_name
            .split_once('/')
            .map(|(login, _)| login)
            .unwrap_or(&repository.full_name)
            .to_owned(),
    }
}
