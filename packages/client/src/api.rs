//! HTTP calls to the room endpoints.

use reqwest::StatusCode;

use crate::error::ClientError;

/// Thin wrapper over the server's room API
pub struct RoomApi {
    base_url: String,
    http: reqwest::Client,
}

impl RoomApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    /// `POST /room`, returning the new room id
    pub async fn create_room(&self) -> Result<String, ClientError> {
        let response = self
            .http
            .post(format!("{}/room", self.base_url))
            .send()
            .await?;

        if response.status() != StatusCode::CREATED {
            return Err(ClientError::UnexpectedStatus {
                action: "room creation",
                status: response.status(),
            });
        }
        Ok(response.text().await?.trim().to_string())
    }

    /// `GET /room/{id}`, true when the room exists
    pub async fn room_exists(&self, room_id: &str) -> Result<bool, ClientError> {
        let response = self
            .http
            .get(format!("{}/room/{}", self.base_url, room_id))
            .send()
            .await?;

        match response.status() {
            StatusCode::NO_CONTENT => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            status => Err(ClientError::UnexpectedStatus {
                action: "room lookup",
                status,
            }),
        }
    }
}
