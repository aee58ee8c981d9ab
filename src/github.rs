use std::io::Read;

use log::debug;
use serde_json::json;

use crate::ssh::KeyUploader;
use crate::{KeyupError, Result};

/// Minimal GitHub REST client covering SSH key registration.
pub struct GitHubClient {
    client: reqwest::blocking::Client,
    token: String,
}

impl GitHubClient {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            token: token.into(),
        }
    }

    fn post_key(&self, api_root: &str, key: &str, title: &str) -> Result<()> {
        let url = format!("{api_root}/user/keys");
        debug!("POST {url}");

        let body = json!({
            "title": title,
            "key": key,
        });

        let response = self
            .client
            .post(&url)
            .header(reqwest::header::AUTHORIZATION, format!("Bearer {}", self.token))
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .header(reqwest::header::USER_AGENT, "keyup")
            .json(&body)
            .send()?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let text = response.text().unwrap_or_default();
            Err(KeyupError::Api(format!("POST {url} returned {status}: {text}")))
        }
    }
}

impl KeyUploader for GitHubClient {
    fn upload(&self, hostname: &str, key: &mut dyn Read, title: &str) -> Result<()> {
        let mut contents = String::new();
        key.read_to_string(&mut contents)?;

        self.post_key(&api_root(hostname), contents.trim(), title)
    }
}

/// REST API root for a GitHub hostname. Anything that is not github.com is
/// assumed to be a GitHub Enterprise Server instance.
pub fn api_root(hostname: &str) -> String {
    if hostname.eq_ignore_ascii_case("github.com") {
        "https://api.github.com".to_string()
    } else {
        format!("https://{hostname}/api/v3")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_root_distinguishes_dotcom_from_enterprise() {
        assert_eq!(api_root("github.com"), "https://api.github.com");
        assert_eq!(api_root("GitHub.com"), "https://api.github.com");
        assert_eq!(api_root("ghe.corp.example"), "https://ghe.corp.example/api/v3");
    }

    #[test]
    fn post_key_sends_title_and_key() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/user/keys")
            .match_header("authorization", "Bearer dummy_token")
            .match_header("accept", "application/vnd.github+json")
            .match_body(mockito::Matcher::Json(json!({
                "title": "my key",
                "key": "ssh-ed25519 AAAA user@host",
            })))
            .with_status(201)
            .create();

        let client = GitHubClient::new("dummy_token");
        client
            .post_key(&server.url(), "ssh-ed25519 AAAA user@host", "my key")
            .expect("upload should succeed");

        mock.assert();
    }

    #[test]
    fn post_key_surfaces_api_failures() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", "/user/keys")
            .with_status(422)
            .with_body(r#"{"message":"key is already in use"}"#)
            .create();

        let client = GitHubClient::new("dummy_token");
        let err = client
            .post_key(&server.url(), "ssh-ed25519 AAAA", "dup")
            .unwrap_err();

        match err {
            KeyupError::Api(msg) => assert!(msg.contains("already in use")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
