//! In-memory transport for tests. Serves canned bodies and records every path asked for.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::{Error, Result};

use super::Transport;

enum Canned {
    Body(String),
    Status(u16),
}

#[derive(Default)]
pub struct FakeTransport {
    responses: HashMap<String, Canned>,
    requests: RefCell<Vec<String>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        FakeTransport::default()
    }

    pub fn with_body(mut self, path: &str, body: &str) -> Self {
        self.responses
            .insert(path.to_owned(), Canned::Body(body.to_owned()));
        self
    }

    pub fn with_status(mut self, path: &str, status: u16) -> Self {
        self.responses
            .insert(path.to_owned(), Canned::Status(status));
        self
    }

    /// Every path requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl Transport for FakeTransport {
    fn get(&self, path: &str) -> Result<String> {
        self.requests.borrow_mut().push(path.to_owned());

        match self.responses.get(path) {
            Some(Canned::Body(body)) => Ok(body.clone()),
            Some(Canned::Status(404)) => Err(Error::NotFound {
                path: path.to_owned(),
            }),
            Some(Canned::Status(status)) => Err(Error::TransportFailure {
                path: path.to_owned(),
                source: ureq::Error::StatusCode(*status),
            }),
            None => panic!("unexpected request: GET {path}"),
        }
    }
}

/// JSON for a repository owned by `login`.
pub fn repository_json(id: u64, full_name: &str, owner_kind: &str) -> String {
    let (login, name) = full_name.split_once('/').unwrap();

    format!(
        r#"{{"id":{id},"name":"{name}","full_name":"{full_name}","private":false,
            "owner":{{"id":{id}0,"login":"{login}","type":"{owner_kind}"}}}}"#
    )
}

pub fn user_json(id: u64, login: &str, kind: &str) -> String {
    format!(r#"{{"id":{id},"login":"{login}","type":"{kind}","site_admin":false}}"#)
}

pub fn workflow_json(id: u64, name: &str, path: &str) -> String {
    format!(r#"{{"id":{id},"node_id":"W_{id}","name":"{name}","path":"{path}","state":"active"}}"#)
}

/// A workflow listing envelope around already-rendered workflows.
pub fn workflow_page_json(workflows: &[String]) -> String {
    format!(
        r#"{{"total_count":{},"workflows":[{}]}}"#,
        workflows.len(),
        workflows.join(",")
    )
}

pub const EMPTY_WORKFLOW_PAGE: &str = r#"{"total_count":0,"workflows":[]}"#;
