//! Leads API client
//!
//! API docs: https://proxycrawl.com/docs/leads-api
//!
//! One GET per call: `token` is passed through verbatim, `domain` is
//! percent-encoded. The response body is returned as an opaque string (JSON
//! per the upstream docs, not decoded here).

use crate::error::LeadsError;

/// Production Leads API endpoint
const BASE_URL: &str = "https://api.proxycrawl.com/leads";

/// Raw result of a single Leads API call
#[derive(Clone, Debug)]
pub struct LeadsResponse {
    /// Raw HTTP status code. 4xx/5xx are delivered here as-is; the client
    /// does not classify statuses.
    pub status: u16,
    /// Full response body as text, line breaks stripped
    pub body: String,
}

/// Client for the ProxyCrawl Leads API
///
/// Holds the account token and a reused HTTP client. Each call to [`get`]
/// performs one request and returns its result as a value, so a shared
/// `&LeadsClient` can be used from multiple tasks.
///
/// [`get`]: LeadsClient::get
#[derive(Debug)]
pub struct LeadsClient {
    client: reqwest::Client,
    token: String,
    base_url: String,
}

impl LeadsClient {
    /// Create a client for the production endpoint.
    ///
    /// Fails with [`LeadsError::InvalidToken`] if `token` is empty or
    /// whitespace-only.
    pub fn new(token: impl Into<String>) -> Result<Self, LeadsError> {
        Self::with_base_url(token, BASE_URL)
    }

    /// Create a client pointed at a non-default endpoint (tests, proxies).
    pub fn with_base_url(
        token: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, LeadsError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(LeadsError::InvalidToken);
        }

        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            client,
            token,
            base_url: base_url.into(),
        })
    }

    /// Authentication token this client was created with
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Fetch lead data for `domain`.
    ///
    /// Issues `GET <base>?token=<token>&domain=<encoded domain>` and returns
    /// the raw status code and body. The domain is UTF-8 percent-encoded
    /// (space becomes `%20`); the token is sent exactly as provided.
    ///
    /// Non-success HTTP statuses are not errors: the status and whatever
    /// body the server sent are returned for the caller to judge. Network
    /// and protocol failures surface as [`LeadsError::Transport`] with the
    /// underlying message; there is no retry.
    ///
    /// For compatibility with the original wrapper, line breaks in the body
    /// are stripped: a multi-line body comes back concatenated with no
    /// separator.
    pub async fn get(&self, domain: &str) -> Result<LeadsResponse, LeadsError> {
        if domain.trim().is_empty() {
            return Err(LeadsError::InvalidDomain);
        }

        let url = self.request_url(domain);
        let response = self.client.get(&url).send().await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(LeadsResponse {
            status,
            body: collapse_lines(&body),
        })
    }

    fn request_url(&self, domain: &str) -> String {
        format!(
            "{}?token={}&domain={}",
            self.base_url,
            self.token,
            urlencoding::encode(domain)
        )
    }
}

/// Drop line breaks, joining the lines with no separator
fn collapse_lines(text: &str) -> String {
    text.lines().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn rejects_blank_token(#[case] token: &str) {
        let err = LeadsClient::new(token).unwrap_err();
        assert_eq!(err, LeadsError::InvalidToken);
        assert_eq!(err.to_string(), "Token is required");
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    #[tokio::test]
    async fn rejects_blank_domain(#[case] domain: &str) {
        let client = LeadsClient::new("T1").unwrap();
        let err = client.get(domain).await.unwrap_err();
        assert_eq!(err, LeadsError::InvalidDomain);
        assert_eq!(err.to_string(), "Domain is required");
    }

    #[test]
    fn builds_expected_url() {
        let client = LeadsClient::new("T1").unwrap();
        assert_eq!(
            client.request_url("example.com"),
            "https://api.proxycrawl.com/leads?token=T1&domain=example.com"
        );
    }

    #[test]
    fn encodes_domain_but_not_token() {
        let client = LeadsClient::new("a&b=c").unwrap();
        let url = client.request_url("exa mple.com");
        assert_eq!(
            url,
            "https://api.proxycrawl.com/leads?token=a&b=c&domain=exa%20mple.com"
        );
    }

    #[test]
    fn token_accessor_returns_stored_token() {
        let client = LeadsClient::new("T1").unwrap();
        assert_eq!(client.token(), "T1");
    }

    #[test]
    fn collapse_lines_strips_all_line_breaks() {
        assert_eq!(collapse_lines("{\"a\":1}"), "{\"a\":1}");
        assert_eq!(collapse_lines("{\"a\":\n1}"), "{\"a\":1}");
        assert_eq!(collapse_lines("line1\r\nline2\n"), "line1line2");
        assert_eq!(collapse_lines(""), "");
    }
}
