use reqwest::header::USER_AGENT;
use serde::de::DeserializeOwned;

use vklad_core::VkladError;

/// Thin HTTP wrapper around the MOEX ISS JSON API.
///
/// Owns the base URL and the User-Agent header; callers pass a relative
/// path with query parameters already attached. ISS serves browser clients
/// only, so the default User-Agent mimics one.
#[derive(Debug, Clone)]
pub(crate) struct IssClient {
    http: reqwest::Client,
    base_url: String,
    user_agent: String,
}

impl IssClient {
    pub(crate) fn new(http: reqwest::Client, base_url: String, user_agent: String) -> Self {
        Self {
            http,
            base_url,
            user_agent,
        }
    }

    /// GET `{base_url}/{path_and_query}` and decode the JSON body.
    ///
    /// Transport failures and non-2xx statuses map to `Network`; a body
    /// that is not valid JSON for `T` maps to `Format`.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path_and_query: &str,
    ) -> Result<T, VkladError> {
        let url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path_and_query
        );

        let response = self
            .http
            .get(&url)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await
            .map_err(|err| VkladError::network(format!("request to {url} failed: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(VkladError::network(format!(
                "{url} returned status {status}"
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|err| VkladError::format(format!("failed to decode {url}: {err}")))
    }
}
