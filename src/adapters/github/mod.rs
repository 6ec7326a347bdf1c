//! GitHub REST adapter
//!
//! Implements [`ChangeSource`] against the GitHub REST API using a blocking
//! HTTP client. Calls are made one at a time with the client's default
//! timeout; nothing is retried.
//!
//! - [`types`] - Response payloads

pub mod types;

use reqwest::Url;
use reqwest::blocking::{Client, Response};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;

use crate::core::models::Repository;
use crate::core::ports::{ChangeSource, UpstreamError};

use types::{ChangedFileEntry, Comparison, ErrorBody};

/// Public GitHub API root
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// REST API version requested on every call
const API_VERSION: &str = "2022-11-28";

/// Largest page size the pull request files endpoint accepts
const PER_PAGE: usize = 100;

/// The pull request files endpoint stops at 3000 files
const MAX_PAGES: usize = 30;

/// GitHub-backed changed-file source
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    api_url: Url,
}

impl GitHubClient {
    /// Create a client for `api_url` authenticating with `token`
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid, the token cannot be sent as a
    /// header, or the HTTP client cannot be built.
    pub fn new(api_url: &str, token: &str) -> Result<Self, UpstreamError> {
        let transport = |message: String| UpstreamError::Transport {
            url: api_url.to_string(),
            message,
        };

        let parsed = Url::parse(api_url).map_err(|e| transport(format!("invalid API URL: {e}")))?;
        if parsed.cannot_be_a_base() {
            return Err(transport("API URL cannot be used as a base".to_string()));
        }

        let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| transport("token contains characters not allowed in a header".into()))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert("x-github-api-version", HeaderValue::from_static(API_VERSION));

        let http = Client::builder()
            .default_headers(headers)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| transport(e.to_string()))?;

        Ok(Self {
            http,
            api_url: parsed,
        })
    }

    /// Build `<api_url>/<segments...>`, percent-encoding each segment
    fn endpoint<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Url {
        let mut url = self.api_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// `repos/{owner}/{name}` followed by `rest`
    fn repo_endpoint<'a>(&self, repo: &'a str, rest: &[&'a str]) -> Url {
        self.endpoint(["repos"].into_iter().chain(repo.split('/')).chain(rest.iter().copied()))
    }

    fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, UpstreamError> {
        log::debug!("GET {url}");
        let response = self.http.get(url.clone()).send().map_err(|e| {
            UpstreamError::Transport {
                url: url.to_string(),
                message: e.to_string(),
            }
        })?;

        let body = read_body(&url, response)?;
        serde_json::from_str(&body).map_err(|e| UpstreamError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}

/// Read a response body, turning non-success statuses into errors
fn read_body(url: &Url, response: Response) -> Result<String, UpstreamError> {
    let status = response.status();
    let body = response.text().map_err(|e| UpstreamError::Transport {
        url: url.to_string(),
        message: e.to_string(),
    })?;

    if status.is_success() {
        return Ok(body);
    }

    let message = serde_json::from_str::<ErrorBody>(&body).map_or_else(
        |_| status.canonical_reason().unwrap_or("request failed").to_string(),
        |err| err.message,
    );
    Err(UpstreamError::Status {
        url: url.to_string(),
        status: status.as_u16(),
        message,
    })
}

fn filenames(entries: Vec<ChangedFileEntry>) -> Vec<String> {
    entries.into_iter().map(|f| f.filename).collect()
}

impl ChangeSource for GitHubClient {
    fn repository(&self, repo: &str) -> Result<Repository, UpstreamError> {
        self.get_json(self.repo_endpoint(repo, &[]))
    }

    fn pull_request_files(&self, repo: &str, number: u64) -> Result<Vec<String>, UpstreamError> {
        let number = number.to_string();
        let mut files = Vec::new();

        for page in 1..=MAX_PAGES {
            let mut url = self.repo_endpoint(repo, &["pulls", number.as_str(), "files"]);
            url.query_pairs_mut()
                .append_pair("per_page", &PER_PAGE.to_string())
                .append_pair("page", &page.to_string());

            let entries: Vec<ChangedFileEntry> = self.get_json(url)?;
            let last = entries.len() < PER_PAGE;
            files.extend(filenames(entries));
            if last {
                break;
            }
        }

        log::debug!("Pull request #{number} changed {} file(s)", files.len());
        Ok(files)
    }

    fn compare_files(
        &self,
        repo: &str,
        base: &str,
        head: &str,
    ) -> Result<Vec<String>, UpstreamError> {
        let basehead = format!("{base}...{head}");
        let url = self.repo_endpoint(repo, &["compare", basehead.as_str()]);
        let comparison: Comparison = self.get_json(url)?;

        log::debug!(
            "Comparison {basehead} is {} with {} file(s)",
            comparison.status.as_deref().unwrap_or("unknown"),
            comparison.files.len()
        );
        Ok(filenames(comparison.files))
    }
}
