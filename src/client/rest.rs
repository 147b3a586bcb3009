use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{MintError, Result};

/// Error body returned by the node on a rejected request.
#[derive(Debug, Deserialize)]
struct NodeErrorBody {
    reason: String,
    #[serde(default)]
    detail: Option<String>,
}

/// Thin HTTP layer over the node REST API.
///
/// Carries the api-key header on every request and a 30-second timeout;
/// anything past that surfaces as a transport error.
#[derive(Clone)]
pub struct RestTransport {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RestTransport {
    pub fn new(base_url: String, api_key: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    pub async fn get(&self, path: &str) -> Result<Value> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .header("api_key", &self.api_key)
            .send()
            .await?;
        Self::decode(response).await
    }

    pub async fn post<B>(&self, path: &str, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .header("api_key", &self.api_key)
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn decode(response: reqwest::Response) -> Result<Value> {
        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<NodeErrorBody>().await {
                Ok(body) => match body.detail {
                    Some(detail) => format!("{} ({detail})", body.reason),
                    None => body.reason,
                },
                Err(_) => status
                    .canonical_reason()
                    .unwrap_or("request rejected")
                    .to_string(),
            };
            return Err(MintError::Node {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json().await?)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
