use log::{debug, trace};
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::io::git_remote::{self, RemoteRepository};

use super::dtos::{Repository, Usage, User, Workflow, WorkflowPage};
use super::{GITHUB_HOST, Transport};

/// Upper bound on pages for a single listing.
pub const MAX_PAGES: u32 = 1000;

/// One page of an index endpoint.
pub trait Page: DeserializeOwned {
    type Item;

    fn into_items(self) -> Vec<Self::Item>;
}

impl Page for WorkflowPage {
    type Item = Workflow;

    fn into_items(self) -> Vec<Workflow> {
        self.workflows
    }
}

impl<T: DeserializeOwned> Page for Vec<T> {
    type Item = T;

    fn into_items(self) -> Vec<T> {
        self
    }
}

/// GitHub client tailored to what actions-usage needs, nothing more.
pub struct GitHubClient<T> {
    transport: T,
    page_limit: u32,
}

impl<T: Transport> GitHubClient<T> {
    pub fn new(transport: T) -> Self {
        GitHubClient {
            transport,
            page_limit: MAX_PAGES,
        }
    }

    #[cfg(test)]
    pub fn with_page_limit(mut self, page_limit: u32) -> Self {
        self.page_limit = page_limit;
        self
    }

    #[cfg(test)]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Every workflow in the repository.
    pub fn get_workflows(&self, repository: &Repository) -> Result<Vec<Workflow>> {
        let path = format!("repos/{}/actions/workflows", repository.full_name);

        self.fetch_all_pages::<WorkflowPage>(&path)
    }

    /// Billable time of a workflow in the current billing cycle.
    pub fn get_workflow_usage(&self, repository: &Repository, workflow: &Workflow) -> Result<Usage> {
        let path = format!(
            "repos/{}/actions/workflows/{}/timing",
            repository.full_name, workflow.id
        );

        self.get(&path)
    }

    /// `None` when GitHub has never heard of it.
    pub fn get_repository(&self, full_name: &str) -> Result<Option<Repository>> {
        self.find(&format!("repos/{full_name}"))
    }

    /// `None` when GitHub has never heard of it.
    pub fn get_user(&self, login: &str) -> Result<Option<User>> {
        self.find(&format!("users/{login}"))
    }

    /// Every repository of a user or an organization.
    pub fn get_all_repositories(&self, owner: &User) -> Result<Vec<Repository>> {
        let path = repositories_path(owner)?;

        self.fetch_all_pages::<Vec<Repository>>(&path)
    }

    /// The repository the working directory is a checkout of.
    pub fn get_current_repository(&self) -> Result<Option<Repository>> {
        let remote = git_remote::current_repository()?;

        self.get_remote_repository(&remote)
    }

    pub fn get_remote_repository(&self, remote: &RemoteRepository) -> Result<Option<Repository>> {
        if remote.host != GITHUB_HOST {
            return Err(Error::UnexpectedHost(remote.host.to_owned()));
        }

        self.get_repository(&remote.full_name())
    }

    /// Walks `path?page=1`, `path?page=2`, ... and stops at the first empty page.
    pub fn fetch_all_pages<P: Page>(&self, path: &str) -> Result<Vec<P::Item>> {
        let mut items: Vec<P::Item> = vec![];

        for page_number in 1..=self.page_limit {
            let page_items = self
                .get::<P>(&format!("{path}?page={page_number}"))?
                .into_items();

            if page_items.is_empty() {
                debug!("{path}: {} items in {} pages", items.len(), page_number - 1);
                return Ok(items);
            }

            trace!("{path}: page {page_number} had {} items", page_items.len());

            items.extend(page_items);
        }

        Err(Error::PageLimitExceeded {
            path: path.to_owned(),
            limit: self.page_limit,
        })
    }

    // private

    fn get<D: DeserializeOwned>(&self, path: &str) -> Result<D> {
        let body = self.transport.get(path)?;

        serde_json::from_str(&body).map_err(|source| Error::MalformedResponse {
            path: path.to_owned(),
            source,
        })
    }

    /// Like `get`, but a 404 is an empty answer instead of an error.
    fn find<D: DeserializeOwned>(&self, path: &str) -> Result<Option<D>> {
        match self.get(path) {
            Ok(found) => Ok(Some(found)),
            Err(Error::NotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// Users and organizations list their repositories in different places.
pub fn repositories_path(owner: &User) -> Result<String> {
    match owner.kind.as_str() {
        "User" => Ok(format!("users/{}/repos", owner.login)),
        "Organization" => Ok(format!("orgs/{}/repos", owner.login)),
        other => Err(Error::UnexpectedOwnerType {
            login: owner.login.to_owned(),
            kind: other.to_owned(),
        }),
    }
}
