//! Post handlers
//!
//! Post CRUD is admin-only. Comments, replies, and shares are open;
//! reactions require an authenticated user. Every mutation returns the
//! updated post aggregate.

use axum::{
    extract::{Path, State},
    Json,
};
use blog_service::{
    AddCommentRequest, AddReplyRequest, CreatePostRequest, PostResponse, PostService,
    ReactionRequest, UpdatePostRequest,
};
use uuid::Uuid;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List all posts, newest first
///
/// GET /posts
pub async fn list_posts(State(state): State<AppState>) -> ApiResult<Json<Vec<PostResponse>>> {
    let service = PostService::new(state.service_context());
    let posts = service.list_posts().await?;
    Ok(Json(posts.iter().map(PostResponse::from).collect()))
}

/// Create a new post
///
/// POST /posts
pub async fn create_post(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreatePostRequest>,
) -> ApiResult<Created<Json<PostResponse>>> {
    auth.require_admin()?;

    let service = PostService::new(state.service_context());
    let post = service.create_post(request).await?;
    Ok(Created(Json(PostResponse::from(&post))))
}

/// Partially update a post
///
/// PATCH /posts/:post_id
pub async fn update_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(post_id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<UpdatePostRequest>,
) -> ApiResult<Json<PostResponse>> {
    auth.require_admin()?;

    let service = PostService::new(state.service_context());
    let post = service.update_post(post_id, request).await?;
    Ok(Json(PostResponse::from(&post)))
}

/// Delete a post and its comment tree
///
/// DELETE /posts/:post_id
pub async fn delete_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(post_id): Path<Uuid>,
) -> ApiResult<NoContent> {
    auth.require_admin()?;

    let service = PostService::new(state.service_context());
    service.delete_post(post_id).await?;
    Ok(NoContent)
}

/// Add a top-level comment to a post
///
/// POST /posts/:post_id/comments
pub async fn add_comment(
    State(state): State<AppState>,
    Path(post_id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<AddCommentRequest>,
) -> ApiResult<Created<Json<PostResponse>>> {
    let service = PostService::new(state.service_context());
    let post = service.add_comment(post_id, request).await?;
    Ok(Created(Json(PostResponse::from(&post))))
}

/// Add a reply under a comment (or another reply)
///
/// POST /posts/:post_id/comments/:comment_id/replies
pub async fn add_reply(
    State(state): State<AppState>,
    Path((post_id, comment_id)): Path<(Uuid, Uuid)>,
    ValidatedJson(request): ValidatedJson<AddReplyRequest>,
) -> ApiResult<Created<Json<PostResponse>>> {
    let service = PostService::new(state.service_context());
    let post = service.add_reply(post_id, comment_id, request).await?;
    Ok(Created(Json(PostResponse::from(&post))))
}

/// Toggle a reaction on a post
///
/// POST /posts/:post_id/reactions
pub async fn react_to_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(post_id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<ReactionRequest>,
) -> ApiResult<Json<PostResponse>> {
    let service = PostService::new(state.service_context());
    let post = service
        .react_to_post(post_id, auth.user_id, &request.kind)
        .await?;
    Ok(Json(PostResponse::from(&post)))
}

/// Toggle a reaction on a comment
///
/// POST /posts/:post_id/comments/:comment_id/reactions
pub async fn react_to_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((post_id, comment_id)): Path<(Uuid, Uuid)>,
    ValidatedJson(request): ValidatedJson<ReactionRequest>,
) -> ApiResult<Json<PostResponse>> {
    let service = PostService::new(state.service_context());
    let post = service
        .react_to_comment(post_id, comment_id, auth.user_id, &request.kind)
        .await?;
    Ok(Json(PostResponse::from(&post)))
}

/// Toggle a reaction on a reply
///
/// POST /posts/:post_id/comments/:comment_id/replies/:reply_id/reactions
pub async fn react_to_reply(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((post_id, comment_id, reply_id)): Path<(Uuid, Uuid, Uuid)>,
    ValidatedJson(request): ValidatedJson<ReactionRequest>,
) -> ApiResult<Json<PostResponse>> {
    let service = PostService::new(state.service_context());
    let post = service
        .react_to_reply(post_id, comment_id, reply_id, auth.user_id, &request.kind)
        .await?;
    Ok(Json(PostResponse::from(&post)))
}

/// Record one share on a post
///
/// POST /posts/:post_id/share
pub async fn share_post(
    State(state): State<AppState>,
    Path(post_id): Path<Uuid>,
) -> ApiResult<Json<PostResponse>> {
    let service = PostService::new(state.service_context());
    let post = service.share_post(post_id).await?;
    Ok(Json(PostResponse::from(&post)))
}
