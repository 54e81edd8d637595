use std::fmt;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use readme_gen_badges::extract_repo_path;
use serde::Deserialize;
use serde_json::json;

use crate::error::{ExportError, ExportResult};

const API_BASE: &str = "https://api.github.com";
const README_FILENAME: &str = "README.md";
const COMMIT_MESSAGE_CREATE: &str = "Create README.md via README Generator";
const COMMIT_MESSAGE_UPDATE: &str = "Update README.md via README Generator";
const USER_AGENT: &str = "readme-gen";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExportAction {
    Created,
    Updated,
}

impl fmt::Display for ExportAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExportAction::Created => "created",
            ExportAction::Updated => "updated",
        })
    }
}

#[derive(Debug)]
pub struct ExportOutcome {
    pub action: ExportAction,
    pub repo_path: String,
    pub message: String,
}

/// Publishes rendered README documents through the GitHub contents API.
#[derive(Clone, Debug)]
pub struct GitHubExporter {
    api_base: String,
}

impl Default for GitHubExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl GitHubExporter {
    pub fn new() -> Self {
        Self {
            api_base: API_BASE.to_string(),
        }
    }

    /// Point the exporter at a different API root (GitHub Enterprise,
    /// local test servers).
    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }

    /// Writes `content` as `README.md` at the root of the repository named
    /// by `repository_url`, choosing update or create depending on whether
    /// the file already exists.
    pub fn export(
        &self,
        repository_url: &str,
        content: &str,
        token: &str,
    ) -> ExportResult<ExportOutcome> {
        let token = require_token(token)?;
        let repo_path = validated_repo_path(repository_url)?;
        tracing::info!("Exporting README.md to repository: {}", repo_path);

        let contents_url = format!(
            "{}/repos/{}/contents/{}",
            self.api_base, repo_path, README_FILENAME
        );

        let existing_sha = self.fetch_existing_sha(&contents_url, token)?;
        let action = match existing_sha {
            Some(_) => ExportAction::Updated,
            None => ExportAction::Created,
        };
        let commit_message = match action {
            ExportAction::Created => COMMIT_MESSAGE_CREATE,
            ExportAction::Updated => COMMIT_MESSAGE_UPDATE,
        };

        let payload = contents_payload(commit_message, content, existing_sha.as_deref());
        self.put_contents(&contents_url, token, &payload)?;

        let message = format!("README.md {action} successfully in {repo_path}");
        tracing::info!("{}", message);
        Ok(ExportOutcome {
            action,
            repo_path,
            message,
        })
    }

    /// Checks that `token` authenticates against the API.
    pub fn validate_token(&self, token: &str) -> ExportResult<()> {
        let token = require_token(token)?;
        let url = format!("{}/user", self.api_base);

        match authorized(ureq::get(&url), token).call() {
            Ok(_) => Ok(()),
            Err(ureq::Error::Status(401, _)) => Err(ExportError::InvalidToken),
            Err(ureq::Error::Status(status, response)) => Err(api_error(status, response)),
            Err(err) => Err(ExportError::Transport(Box::new(err))),
        }
    }

    fn fetch_existing_sha(&self, url: &str, token: &str) -> ExportResult<Option<String>> {
        match authorized(ureq::get(url), token).call() {
            Ok(response) => {
                let contents: ContentsResponse = response.into_json().map_err(|err| {
                    ExportError::Api {
                        status: 200,
                        message: format!("unexpected contents payload: {err}"),
                    }
                })?;
                Ok(Some(contents.sha))
            }
            Err(ureq::Error::Status(404, _)) => Ok(None),
            Err(ureq::Error::Status(401, _)) => Err(ExportError::InvalidToken),
            Err(ureq::Error::Status(status, response)) => Err(api_error(status, response)),
            Err(err) => Err(ExportError::Transport(Box::new(err))),
        }
    }

    fn put_contents(&self, url: &str, token: &str, payload: &serde_json::Value) -> ExportResult<()> {
        match authorized(ureq::put(url), token).send_json(payload) {
            Ok(_) => Ok(()),
            Err(ureq::Error::Status(401, _)) => Err(ExportError::InvalidToken),
            Err(ureq::Error::Status(status, response)) => Err(api_error(status, response)),
            Err(err) => Err(ExportError::Transport(Box::new(err))),
        }
    }
}

#[derive(Deserialize)]
struct ContentsResponse {
    sha: String,
}

fn authorized(request: ureq::Request, token: &str) -> ureq::Request {
    request
        .set("Authorization", &format!("Bearer {token}"))
        .set("Accept", "application/vnd.github+json")
        .set("User-Agent", USER_AGENT)
}

fn require_token(token: &str) -> ExportResult<&str> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return Err(ExportError::MissingToken);
    }
    Ok(trimmed)
}

/// Derives `owner/repo` from the URL and requires exactly that shape.
fn validated_repo_path(repository_url: &str) -> ExportResult<String> {
    let repo_path = extract_repo_path(repository_url);
    if repo_path.is_empty() {
        return Err(ExportError::InvalidRepository(
            "repository URL is required".to_string(),
        ));
    }

    let segments: Vec<&str> = repo_path.split('/').collect();
    if segments.len() != 2 || segments.iter().any(|segment| segment.is_empty()) {
        return Err(ExportError::InvalidRepository(format!(
            "expected github.com/owner/repo, got '{repository_url}'"
        )));
    }

    Ok(repo_path)
}

/// Request body for the contents API. The sha is present only when
/// updating an existing file.
fn contents_payload(
    commit_message: &str,
    content: &str,
    sha: Option<&str>,
) -> serde_json::Value {
    let mut payload = json!({
        "message": commit_message,
        "content": BASE64.encode(content),
    });
    if let Some(sha) = sha {
        payload["sha"] = json!(sha);
    }
    payload
}

fn api_error(status: u16, response: ureq::Response) -> ExportError {
    let message = response
        .into_string()
        .unwrap_or_else(|_| "unknown error".to_string());
    ExportError::Api { status, message }
}
