use crate::error::{ClientError, ClientResult};
use crate::normalize;

use async_trait::async_trait;
use cb_board::{CaseGateway, GatewayError, GatewayResult, StatusChange, UpdateAck};
use cb_core::{Actor, CaseRecord};
use reqwest::Client as ReqwestClient;
use serde::Serialize;
use serde_json::Value;

/// HTTP client for the case-list / status-update REST API
pub struct BoardClient {
    pub base_url: String,
    client: ReqwestClient,
}

impl BoardClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8080")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    /// Fetch all cases, tolerating the three historical list shapes
    pub async fn list_cases(&self) -> ClientResult<Vec<CaseRecord>> {
        let url = format!("{}/api/v1/cases", self.base_url);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body: Value = response.json().await?;

        if !status.is_success() {
            return Err(ClientError::api_error(
                status.as_u16(),
                error_message(&body),
            ));
        }

        Ok(normalize::case_list(body))
    }

    /// Persist a status change for one case
    ///
    /// Only an explicit `"success": true` in the response body counts as a
    /// confirmed write; the caller treats everything else as a failure.
    pub async fn update_case_status(&self, change: &StatusChange) -> ClientResult<UpdateAck> {
        #[derive(Serialize)]
        struct UpdateRequest<'a> {
            status: &'a str,
            actor: &'a Actor,
        }

        let body = UpdateRequest {
            status: change.new_status.as_str(),
            actor: &change.actor,
        };
        let url = format!("{}/api/v1/cases/{}/status", self.base_url, change.card_id);
        let response = self.client.put(&url).json(&body).send().await?;
        let status = response.status();
        let body: Value = response.json().await?;

        if !status.is_success() {
            return Err(ClientError::api_error(
                status.as_u16(),
                error_message(&body),
            ));
        }

        Ok(UpdateAck {
            success: body
                .get("success")
                .and_then(Value::as_bool)
                .unwrap_or(false),
            message: body
                .get("message")
                .and_then(Value::as_str)
                .map(String::from),
        })
    }
}

fn error_message(body: &Value) -> String {
    body.get("message")
        .or_else(|| body.get("error"))
        .and_then(Value::as_str)
        .unwrap_or("Unknown error")
        .to_string()
}

#[async_trait]
impl CaseGateway for BoardClient {
    async fn list_cases(&self) -> GatewayResult<Vec<CaseRecord>> {
        BoardClient::list_cases(self)
            .await
            .map_err(|e| GatewayError::remote(e.to_string()))
    }

    async fn update_case_status(&self, change: &StatusChange) -> GatewayResult<UpdateAck> {
        BoardClient::update_case_status(self, change)
            .await
            .map_err(|e| GatewayError::remote(e.to_string()))
    }
}
