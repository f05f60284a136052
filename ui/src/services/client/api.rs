//! Seams between the app state and the REST backend.
//!
//! Components talk to these traits so the wizard, login, directory and map
//! flows can be driven against an in-memory backend in tests.

use async_trait::async_trait;

use super::errors::ClientResult;
use super::types::{
    ApiMessageResponse, Community, LoginRequest, RegionOption, RegisterRequest, UsersPageResponse,
};

#[async_trait(?Send)]
pub trait RegistrationApi {
    /// Submit a completed registration draft
    async fn register(&self, request: &RegisterRequest) -> ClientResult<ApiMessageResponse>;
}

#[async_trait(?Send)]
pub trait AuthApi {
    /// Authenticate with email and password
    async fn login(&self, request: &LoginRequest) -> ClientResult<ApiMessageResponse>;
}

#[async_trait(?Send)]
pub trait DirectoryApi {
    /// One page of the member directory, counted from zero
    async fn users_page(&self, page: u32) -> ClientResult<UsersPageResponse>;
}

#[async_trait(?Send)]
pub trait MapApi {
    async fn countries(&self) -> ClientResult<Vec<RegionOption>>;

    async fn provinces(&self, country_id: &str) -> ClientResult<Vec<RegionOption>>;

    async fn districts(&self, province_id: &str) -> ClientResult<Vec<RegionOption>>;

    /// Villages whose name matches `term`, narrowed to a district when one is picked
    async fn search_villages(
        &self,
        term: &str,
        district_id: Option<&str>,
    ) -> ClientResult<Vec<RegionOption>>;

    /// Every community with its map coordinates
    async fn communities(&self) -> ClientResult<Vec<Community>>;
}
