//! Generic CRUD over any [`Resource`] collection. Mutations are admin-only
//! and refuse to run without a stored session.

use super::{
    resource::{Publishable, Resource},
    types::{Project, ProjectStatus},
};
use crate::api::{ApiClient, ApiError, ApiResponse, path_segment};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::{debug, instrument};

/// # Errors
/// Returns the request error.
#[instrument(skip_all, fields(collection = R::COLLECTION))]
pub async fn list<R: Resource>(api: &ApiClient) -> Result<Vec<R>, ApiError> {
    list_at(api, R::COLLECTION).await
}

/// Fetches a listing from an arbitrary path under the API root.
///
/// # Errors
/// Returns the request error.
pub async fn list_at<R: Resource>(api: &ApiClient, path: &str) -> Result<Vec<R>, ApiError> {
    let items: Vec<R> = api.get(path).await?.into_data()?;
    debug!("fetched {} {} record(s)", items.len(), R::NAME);
    Ok(items)
}

/// # Errors
/// Returns a validation error for a malformed id, or the request error.
#[instrument(skip_all, fields(collection = R::COLLECTION))]
pub async fn get<R: Resource>(api: &ApiClient, id: &str) -> Result<R, ApiError> {
    let id = path_segment(id)?;
    api.get(&R::item_path(id)).await?.into_data()
}

/// # Errors
/// Returns `ApiError::Unauthorized` without a session, or the request error.
#[instrument(skip_all, fields(collection = R::COLLECTION))]
pub async fn create<R: Resource>(api: &ApiClient, draft: &R::Draft) -> Result<R, ApiError> {
    api.require_session()?;
    api.post(R::COLLECTION, draft).await?.into_data()
}

/// Sends a full draft or a partial JSON document; the server merges it.
///
/// # Errors
/// Returns `ApiError::Unauthorized` without a session, a validation error for
/// a malformed id, or the request error.
#[instrument(skip_all, fields(collection = R::COLLECTION))]
pub async fn update<R, B>(api: &ApiClient, id: &str, changes: &B) -> Result<R, ApiError>
where
    R: Resource,
    B: Serialize + ?Sized,
{
    api.require_session()?;
    let id = path_segment(id)?;
    api.put(&R::item_path(id), changes).await?.into_data()
}

/// # Errors
/// Returns `ApiError::Unauthorized` without a session, a validation error for
/// a malformed id, or the request error.
#[instrument(skip_all, fields(collection = R::COLLECTION))]
pub async fn delete<R: Resource>(api: &ApiClient, id: &str) -> Result<(), ApiError> {
    api.require_session()?;
    let id = path_segment(id)?;
    let _: ApiResponse<Value> = api.delete(&R::item_path(id)).await?;
    Ok(())
}

/// Public listing; anything the server returns unpublished is dropped.
///
/// # Errors
/// Returns the request error.
#[instrument(skip_all, fields(collection = R::COLLECTION))]
pub async fn list_published<R: Publishable>(api: &ApiClient) -> Result<Vec<R>, ApiError> {
    let items: Vec<R> = list_at(api, R::PUBLISHED_PATH).await?;
    Ok(items.into_iter().filter(R::is_published).collect())
}

/// Flips a single boolean field such as `published` or `approved`.
///
/// # Errors
/// See [`update`].
pub async fn set_flag<R: Resource>(
    api: &ApiClient,
    id: &str,
    flag: &str,
    value: bool,
) -> Result<R, ApiError> {
    update::<R, _>(api, id, &json!({ flag: value })).await
}

/// # Errors
/// See [`update`].
pub async fn set_published<R: Publishable>(
    api: &ApiClient,
    id: &str,
    published: bool,
) -> Result<R, ApiError> {
    set_flag::<R>(api, id, "published", published).await
}

/// # Errors
/// Returns the request error.
pub async fn active_projects(api: &ApiClient) -> Result<Vec<Project>, ApiError> {
    projects_with_status(api, "/projects/active", ProjectStatus::Active).await
}

/// # Errors
/// Returns the request error.
pub async fn completed_projects(api: &ApiClient) -> Result<Vec<Project>, ApiError> {
    projects_with_status(api, "/projects/completed", ProjectStatus::Completed).await
}

async fn projects_with_status(
    api: &ApiClient,
    path: &str,
    status: ProjectStatus,
) -> Result<Vec<Project>, ApiError> {
    let projects: Vec<Project> = list_at(api, path).await?;
    Ok(projects
        .into_iter()
        .filter(|project| project.status == status)
        .collect())
}
