use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error, info, instrument};

use super::api::{AuthApi, DirectoryApi, MapApi, RegistrationApi};
use super::errors::{ClientError, ClientResult};
use super::types::{
    ApiMessageResponse, Community, LoginRequest, RegionOption, RegisterRequest, UsersPageResponse,
};
use crate::services::config::AppConfig;

/// HTTP client for the iTribe REST backend
#[derive(Clone)]
pub struct ITribeClient {
    pub(crate) http_client: Client,
    config: AppConfig,
}

impl ITribeClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            http_client: Client::new(),
            config: config.clone(),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<ApiMessageResponse> {
        let request = self
            .http_client
            .post(self.config.endpoint(path))
            .header("Content-Type", "application/json")
            .json(body);
        self.send(path, request).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> ClientResult<T> {
        debug!("GET {}", self.config.endpoint(path));
        let request = self.http_client.get(self.config.endpoint(path)).query(query);
        self.send(path, request).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        path: &str,
        request: RequestBuilder,
    ) -> ClientResult<T> {
        let response = request.send().await.map_err(|e| ClientError::Network {
            message: format!("Failed to call {}: {}", path, e),
        })?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| ClientError::Network {
            message: format!("Failed to read response body: {}", e),
        })?;

        parse_json_response(status, &text)
    }
}

/// Interpret a backend reply: 2xx must carry the expected JSON, anything else
/// is a rejection that may still carry a `message` worth showing to the user.
pub fn parse_json_response<T: DeserializeOwned>(status: u16, body: &str) -> ClientResult<T> {
    if (200..300).contains(&status) {
        return Ok(serde_json::from_str::<T>(body)?);
    }

    let message = serde_json::from_str::<ApiMessageResponse>(body)
        .ok()
        .and_then(|response| response.message);
    error!("Request failed with status {}: {:?}", status, message);

    Err(ClientError::Rejected { status, message })
}

pub fn parse_message_response(status: u16, body: &str) -> ClientResult<ApiMessageResponse> {
    parse_json_response(status, body)
}

#[async_trait(?Send)]
impl RegistrationApi for ITribeClient {
    #[instrument(skip(self, request), fields(username = %request.username), err)]
    async fn register(&self, request: &RegisterRequest) -> ClientResult<ApiMessageResponse> {
        info!("Submitting registration to {}", self.config.endpoint("register"));
        self.post_json("register", request).await
    }
}

#[async_trait(?Send)]
impl AuthApi for ITribeClient {
    #[instrument(skip(self, request), fields(email = %request.email), err)]
    async fn login(&self, request: &LoginRequest) -> ClientResult<ApiMessageResponse> {
        info!("Creating session at {}", self.config.endpoint("login"));
        self.post_json("login", request).await
    }
}

#[async_trait(?Send)]
impl DirectoryApi for ITribeClient {
    #[instrument(skip(self), err)]
    async fn users_page(&self, page: u32) -> ClientResult<UsersPageResponse> {
        let page = page.to_string();
        self.get_json("users", &[("page", page.as_str())]).await
    }
}

#[async_trait(?Send)]
impl MapApi for ITribeClient {
    #[instrument(skip(self), err)]
    async fn countries(&self) -> ClientResult<Vec<RegionOption>> {
        self.get_json("countries", &[]).await
    }

    #[instrument(skip(self), err)]
    async fn provinces(&self, country_id: &str) -> ClientResult<Vec<RegionOption>> {
        self.get_json(&format!("provinces/{}", country_id), &[]).await
    }

    #[instrument(skip(self), err)]
    async fn districts(&self, province_id: &str) -> ClientResult<Vec<RegionOption>> {
        self.get_json(&format!("districts/{}", province_id), &[]).await
    }

    #[instrument(skip(self), err)]
    async fn search_villages(
        &self,
        term: &str,
        district_id: Option<&str>,
    ) -> ClientResult<Vec<RegionOption>> {
        self.get_json(
            "villages/search",
            &[("term", term), ("district", district_id.unwrap_or(""))],
        )
        .await
    }

    #[instrument(skip(self), err)]
    async fn communities(&self) -> ClientResult<Vec<Community>> {
        self.get_json("villages-info", &[]).await
    }
}
