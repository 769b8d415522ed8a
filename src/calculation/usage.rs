use std::collections::{BTreeMap, HashMap};

use log::debug;

use crate::error::Result;
use crate::io::github_client::{GitHubClient, Repository, Transport, Usage, Workflow};

/// Total billable milliseconds of every workflow in one repository, keyed by workflow id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkflowUsage {
    totals: BTreeMap<u64, (Workflow, u64)>,
}

impl WorkflowUsage {
    pub fn insert(&mut self, workflow: Workflow, total_ms: u64) {
        self.totals.insert(workflow.id, (workflow, total_ms));
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Sum over every workflow.
    pub fn total_ms(&self) -> u64 {
        self.totals.values().map(|(_, total_ms)| total_ms).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Workflow, u64)> {
        self.totals
            .values()
            .map(|(workflow, total_ms)| (workflow, *total_ms))
    }
}

impl FromIterator<(Workflow, u64)> for WorkflowUsage {
    fn from_iter<I: IntoIterator<Item = (Workflow, u64)>>(iter: I) -> Self {
        let mut usage = WorkflowUsage::default();

        for (workflow, total_ms) in iter {
            usage.insert(workflow, total_ms);
        }

        usage
    }
}

/// The whole report: workflow usage per repository, keyed by full name.
///
/// The repository records sit in a side table under the same key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RepoUsage {
    usage: BTreeMap<String, WorkflowUsage>,
    repositories: HashMap<String, Repository>,
}

impl RepoUsage {
    pub fn insert(&mut self, repository: Repository, workflow_usage: WorkflowUsage) {
        let key = repository.full_name.to_owned();

        self.usage.insert(key.clone(), workflow_usage);
        self.repositories.insert(key, repository);
    }

    pub fn len(&self) -> usize {
        self.usage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.usage.is_empty()
    }

    pub fn get(&self, full_name: &str) -> Option<&WorkflowUsage> {
        self.usage.get(full_name)
    }

    /// Repositories in full name order.
    pub fn iter(&self) -> impl Iterator<Item = (&Repository, &WorkflowUsage)> {
        self.usage.iter().filter_map(|(full_name, workflow_usage)| {
            self.repositories
                .get(full_name)
                .map(|repository| (repository, workflow_usage))
        })
    }
}

impl Usage {
    /// Milliseconds across every runner OS. Platforms that never ran count as zero.
    pub fn total_ms(&self) -> u64 {
        [
            &self.billable.windows,
            &self.billable.macos,
            &self.billable.ubuntu,
        ]
        .into_iter()
        .flatten()
        .map(|details| details.total_ms)
        .sum()
    }
}

/// Fetches every workflow of the repository and how long each one billed.
pub fn workflow_usage<T: Transport>(
    client: &GitHubClient<T>,
    repository: &Repository,
) -> Result<WorkflowUsage> {
    let workflows = client.get_workflows(repository)?;

    debug!("{}: {} workflows", repository.full_name, workflows.len());

    workflows
        .into_iter()
        .map(|workflow| -> Result<(Workflow, u64)> {
            let total_ms = client.get_workflow_usage(repository, &workflow)?.total_ms();

            Ok((workflow, total_ms))
        })
        .collect()
}

/// Builds the report for a list of repositories, one after the other.
///
/// `on_repository` is told about each repository before it's fetched.
/// With `skip_empty`, repositories without workflows are left out.
pub fn collect_usage<T, I, F>(
    client: &GitHubClient<T>,
    repositories: I,
    skip_empty: bool,
    mut on_repository: F,
) -> Result<RepoUsage>
where
    T: Transport,
    I: IntoIterator<Item = Repository>,
    F: FnMut(&Repository),
{
    let mut report = RepoUsage::default();

    for repository in repositories {
        on_repository(&repository);

        let usage = workflow_usage(client, &repository)?;

        if skip_empty && usage.is_empty() {
            debug!("Skipping {}, no workflows", repository.full_name);
            continue;
        }

        report.insert(repository, usage);
    }

    Ok(report)
}
