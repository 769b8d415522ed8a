use log::{info, warn};

use crate::app::App;
use crate::calculation::targets::{resolve_targets, unique_repositories};
use crate::calculation::usage::{RepoUsage, collect_usage};
use crate::display::progress_text;
use crate::error::Error;
use crate::io::github_client::{GitHubClient, Repository, Transport};
use crate::prelude::*;

/// Works out what to report on and fetches all of it.
pub fn gather_usage<T: Transport>(ctx: &mut App, client: &GitHubClient<T>) -> AppResult<RepoUsage> {
    let repositories = if ctx.cli.wants_current_repository() {
        vec![current_repository(client)?]
    } else {
        unique_repositories(resolve_targets(client, &ctx.cli.targets)?)
    };

    let skip_empty = ctx.cli.skips_empty();

    info!("Reporting on {} repositories", repositories.len());

    let total = repositories.len();
    let mut done = 0;

    let usage = collect_usage(client, repositories, skip_empty, |repository| {
        ctx.display
            .update_text(progress_text(&repository.full_name, done, total));
        done += 1;
    })?;

    if usage.is_empty() {
        warn!("Nothing to report");
    }

    Ok(usage)
}

// private

fn current_repository<T: Transport>(client: &GitHubClient<T>) -> AppResult<Repository> {
    let repository = client.get_current_repository()?.ok_or_else(|| {
        Error::NoCurrentRepository("the git remote doesn't exist on GitHub".to_owned())
    })?;

    Ok(repository)
}
