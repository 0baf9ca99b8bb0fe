//! Generic REST calls for CRM collections.
//!
//! Every entity lives under `/api/<collection>`; the collection name comes
//! from `CrmEntity::collection_name`.

use contracts::domain::common::CrmEntity;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::api_utils::{api_url, collection_path, item_path};
use crate::shared::error::ApiError;

async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_response_body(status, &body))
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

fn encode<B: Serialize>(builder: gloo_net::http::RequestBuilder, body: &B) -> Result<Request, ApiError> {
    builder
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))
}

/// Fetch the whole collection
pub async fn fetch_all<E: CrmEntity>() -> Result<Vec<E>, ApiError> {
    let url = api_url(&collection_path(E::collection_name()));
    let response = Request::get(&url).send().await?;
    decode(ensure_ok(response).await?).await
}

/// Create a record; the backend answers with the stored entity
pub async fn create<E: CrmEntity>(payload: &E::Payload) -> Result<E, ApiError> {
    let url = api_url(&collection_path(E::collection_name()));
    let response = encode(Request::post(&url), payload)?.send().await?;
    decode(ensure_ok(response).await?).await
}

pub async fn update<E: CrmEntity>(id: &str, payload: &E::Payload) -> Result<E, ApiError> {
    let url = api_url(&item_path(E::collection_name(), id));
    let response = encode(Request::put(&url), payload)?.send().await?;
    decode(ensure_ok(response).await?).await
}

pub async fn delete<E: CrmEntity>(id: &str) -> Result<(), ApiError> {
    let url = api_url(&item_path(E::collection_name(), id));
    let response = Request::delete(&url).send().await?;
    ensure_ok(response).await?;
    Ok(())
}

/// POST with a JSON body and a JSON answer
pub async fn post_json<B: Serialize, R: DeserializeOwned>(path: &str, body: &B) -> Result<R, ApiError> {
    let response = encode(Request::post(&api_url(path)), body)?.send().await?;
    decode(ensure_ok(response).await?).await
}

/// POST with a JSON body whose answer is ignored
pub async fn post_no_content<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let response = encode(Request::post(&api_url(path)), body)?.send().await?;
    ensure_ok(response).await?;
    Ok(())
}
