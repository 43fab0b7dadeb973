//! Post endpoints

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::db::PostRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{CreatePostRequest, Envelope, Pagination, PaginationParams, Payload};

/// GET /post?limit=&offset= - list posts, most recent first
///
/// Query parsing never fails the request: repeated keys keep their first
/// value and an undecodable query string means default pagination.
async fn list_posts(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Envelope>, ApiError> {
    let pairs = match query {
        Ok(Query(pairs)) => pairs,
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "ignoring unparsable query");
            Vec::new()
        }
    };
    let page = Pagination::from(PaginationParams::from_pairs(pairs));
    let posts = PostRepo::new(state.store.as_ref())
        .list(page)
        .await
        .map_err(ApiError::storage("fetch posts"))?;

    Ok(Json(Envelope::success(
        "posts fetched",
        Payload::Posts(posts),
    )))
}

/// POST /post - create a post
///
/// Any body that does not decode into a create request is a 400, checked
/// before the store is touched.
async fn create_post(
    State(state): State<AppState>,
    body: Result<Json<CreatePostRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Envelope>), ApiError> {
    let Json(req) = body.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;

    let created = PostRepo::new(state.store.as_ref())
        .create(req.message)
        .await
        .map_err(ApiError::storage("create post"))?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::success("post created", Payload::Created(created))),
    ))
}

/// Post routes
pub fn router() -> Router<AppState> {
    Router::new().route("/post", get(list_posts).post(create_post))
}
