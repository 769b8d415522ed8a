use log::debug;
use secrecy::{ExposeSecret, SecretString};

use crate::error::{Error, Result};

const ACCEPT: &str = "application/vnd.github+json";
const API_VERSION: &str = "2022-11-28";
const USER_AGENT: &str = concat!("actions-usage/", env!("CARGO_PKG_VERSION"));

/// Something that can GET a path below the API root and hand back the JSON body.
///
/// A 404 must come back as [`Error::NotFound`] so lookups can tell "absent" from "broken".
pub trait Transport {
    fn get(&self, path: &str) -> Result<String>;
}

/// The real thing, blocking, one request at a time.
pub struct UreqTransport {
    agent: ureq::Agent,
    api_url: String,
    token: Option<SecretString>,
}

impl UreqTransport {
    pub fn new(api_url: &str, token: Option<SecretString>) -> Self {
        UreqTransport {
            agent: ureq::Agent::new_with_defaults(),
            api_url: api_url.trim_end_matches('/').to_owned(),
            token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }
}

impl Transport for UreqTransport {
    fn get(&self, path: &str) -> Result<String> {
        let url = self.url(path);

        debug!("GET {url}");

        let request = self
            .agent
            .get(&url)
            .header("Accept", ACCEPT)
            .header("X-GitHub-Api-Version", API_VERSION)
            .header("User-Agent", USER_AGENT);

        // optional auth.
        let request = match &self.token {
            Some(token) => request.header(
                "Authorization",
                format!("Bearer {}", token.expose_secret()),
            ),
            None => request,
        };

        let mut response = request.call().map_err(|source| classify(path, source))?;

        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|source| classify(path, source))?;

        Ok(body)
    }
}

// private

/// 404 is an answer, everything else is a failure.
fn classify(path: &str, source: ureq::Error) -> Error {
    match source {
        ureq::Error::StatusCode(404) => Error::NotFound {
            path: path.to_owned(),
        },
        source => Error::TransportFailure {
            path: path.to_owned(),
            source,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_status_becomes_not_found() {
        let err = classify("repos/ghost/nothing", ureq::Error::StatusCode(404));

        assert!(matches!(err, Error::NotFound { path } if path == "repos/ghost/nothing"));
    }

    #[test]
    fn other_statuses_are_failures() {
        for status in [401, 403, 500, 502] {
            let err = classify("users/octocat", ureq::Error::StatusCode(status));

            assert!(matches!(
                err,
                Error::TransportFailure {
                    source: ureq::Error::StatusCode(code),
                    ..
                } if code == status
            ));
        }
    }

    #[test]
    fn joins_paths_onto_the_api_root() {
        let transport = UreqTransport::new("https://ghe.example.com/api/v3/", None);

        assert_eq!(
            transport.url("/repos/octocat/hello"),
            "https://ghe.example.com/api/v3/repos/octocat/hello"
        );
        assert_eq!(
            transport.url("users/octocat"),
            "https://ghe.example.com/api/v3/users/octocat"
        );
    }
}
