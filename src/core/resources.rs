//! Resource shortcuts: each is one verb against a configured path.

use super::client::HttpClient;
use crate::domain::model::Resource;
use crate::utils::error::RequestError;
use serde::Serialize;
use serde_json::Value;
use std::fmt::Display;

impl HttpClient {
    fn resource_path(&self, resource: Resource) -> &str {
        self.config().endpoint(resource)
    }

    pub async fn get_members(&self) -> Result<Value, RequestError> {
        self.get(self.resource_path(Resource::Members)).await
    }

    pub async fn get_member(&self, id: impl Display) -> Result<Value, RequestError> {
        let endpoint = format!("{}/{}", self.resource_path(Resource::Members), id);
        self.get(&endpoint).await
    }

    pub async fn create_member<B: Serialize + ?Sized>(&self, data: &B) -> Result<Value, RequestError> {
        self.post(self.resource_path(Resource::Members), data).await
    }

    pub async fn get_classes(&self) -> Result<Value, RequestError> {
        self.get(self.resource_path(Resource::Classes)).await
    }

    pub async fn create_class<B: Serialize + ?Sized>(&self, data: &B) -> Result<Value, RequestError> {
        self.post(self.resource_path(Resource::Classes), data).await
    }

    pub async fn get_plans(&self) -> Result<Value, RequestError> {
        self.get(self.resource_path(Resource::Plans)).await
    }

    pub async fn create_plan<B: Serialize + ?Sized>(&self, data: &B) -> Result<Value, RequestError> {
        self.post(self.resource_path(Resource::Plans), data).await
    }

    pub async fn get_checkins(&self) -> Result<Value, RequestError> {
        self.get(self.resource_path(Resource::Checkins)).await
    }
}
