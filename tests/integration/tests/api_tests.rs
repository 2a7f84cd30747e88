//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance with migrations applied
//! - Environment variables: DATABASE_URL, JWT_SECRET, API_PORT
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

/// Get a token for the shared admin account
///
/// The first caller bootstraps the account; later callers log in.
async fn admin_token(server: &TestServer) -> String {
    let reg = RegisterRequest::shared_admin();
    let response = server.post("/api/v1/auth/register", &reg).await.unwrap();

    if response.status() == StatusCode::CREATED {
        let auth: AuthResponse = response.json().await.unwrap();
        return auth.token;
    }

    let login = LoginRequest::from_register(&reg);
    let response = server.post("/api/v1/auth/login", &login).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    auth.token
}

/// Register a fresh regular user and return their token
async fn user_token(server: &TestServer) -> String {
    let reg = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &reg).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    auth.token
}

/// Create a post as the shared admin and return it
async fn create_test_post(server: &TestServer, token: &str) -> PostResponse {
    let request = CreatePostRequest::unique();
    let response = server
        .post_auth("/api/v1/posts", token, &request)
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(auth.user.username, request.username);
    assert_eq!(auth.user.role, "user");
    assert_eq!(auth.token_type, "Bearer");
    assert!(!auth.token.is_empty());
    assert!(auth.expires_in > 0);
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    // First registration
    server.post("/api/v1/auth/register", &request).await.unwrap();

    // Second registration with same email
    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_register_admin_requires_admin_caller() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Make sure an admin already exists
    let admin = admin_token(&server).await;

    // An anonymous caller cannot request the admin role anymore
    let mut request = RegisterRequest::unique();
    request.role = Some("admin".to_string());
    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // An admin caller can
    let mut request = RegisterRequest::unique();
    request.role = Some("admin".to_string());
    let response = server
        .post_auth("/api/v1/auth/register", &admin, &request)
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(auth.user.role, "admin");
}

#[tokio::test]
async fn test_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Register first
    let register_req = RegisterRequest::unique();
    server.post("/api/v1/auth/register", &register_req).await.unwrap();

    // Login
    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.user.username, register_req.username);
    assert!(!auth.token.is_empty());
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login_req = LoginRequest {
        email: "nonexistent@example.com".to_string(),
        password: "wrongpass123".to_string(),
    };

    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_get_current_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &register_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server.get_auth("/api/v1/auth/me", &auth.token).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(user.id, auth.user.id);
    assert_eq!(user.username, register_req.username);
}

#[tokio::test]
async fn test_get_current_user_unauthorized() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/auth/me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_bootstrap_status() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Ensure the admin exists first
    admin_token(&server).await;

    let response = server.get("/api/v1/auth/bootstrap-status").await.unwrap();
    let status: BootstrapStatusResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(status.admin_exists);
}

#[tokio::test]
async fn test_password_reset_request_is_silent_for_unknown_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let body = serde_json::json!({ "email": "nobody@example.com" });
    let response = server
        .post("/api/v1/auth/password-reset/request", &body)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_password_reset_confirm_rejects_bad_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let body = serde_json::json!({
        "token": "deadbeef",
        "password": "NewPassword123",
    });
    let response = server
        .post("/api/v1/auth/password-reset/confirm", &body)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Post Tests
// ============================================================================

#[tokio::test]
async fn test_create_post() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = admin_token(&server).await;

    let request = CreatePostRequest::unique();
    let response = server.post_auth("/api/v1/posts", &admin, &request).await.unwrap();
    let post: PostResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(post.title, request.title);
    assert_eq!(post.category, request.category);
    assert!(post.comments.is_empty());
    assert!(post.reactions.is_empty());
    assert_eq!(post.shares, 0);
}

#[tokio::test]
async fn test_create_post_requires_admin() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = user_token(&server).await;

    let request = CreatePostRequest::unique();
    let response = server.post_auth("/api/v1/posts", &token, &request).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // No token at all is unauthorized
    let response = server.post("/api/v1/posts", &request).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_list_posts() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = admin_token(&server).await;
    let created = create_test_post(&server, &admin).await;

    let response = server.get("/api/v1/posts").await.unwrap();
    let posts: Vec<PostResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(posts.iter().any(|p| p.id == created.id));
}

#[tokio::test]
async fn test_update_post() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = admin_token(&server).await;
    let post = create_test_post(&server, &admin).await;

    let update = UpdatePostRequest {
        title: Some("Updated title".to_string()),
        ..Default::default()
    };
    let response = server
        .patch_auth(&format!("/api/v1/posts/{}", post.id), &admin, &update)
        .await
        .unwrap();
    let updated: PostResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(updated.title, "Updated title");
    // Unset fields are untouched
    assert_eq!(updated.content, post.content);
}

#[tokio::test]
async fn test_delete_post() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = admin_token(&server).await;
    let post = create_test_post(&server, &admin).await;

    let response = server
        .delete_auth(&format!("/api/v1/posts/{}", post.id), &admin)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Deleting again reports not found
    let response = server
        .delete_auth(&format!("/api/v1/posts/{}", post.id), &admin)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Comment Tests
// ============================================================================

#[tokio::test]
async fn test_add_comment_and_reply() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = admin_token(&server).await;
    let post = create_test_post(&server, &admin).await;

    // Comments are open, no token needed
    let comment_req = AddCommentRequest::simple("First!");
    let response = server
        .post(&format!("/api/v1/posts/{}/comments", post.id), &comment_req)
        .await
        .unwrap();
    let post: PostResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(post.comments.len(), 1);
    let comment_id = post.comments[0].id.clone();

    // Reply under the comment
    let reply_req = AddCommentRequest::simple("Replying to first");
    let response = server
        .post(
            &format!("/api/v1/posts/{}/comments/{}/replies", post.id, comment_id),
            &reply_req,
        )
        .await
        .unwrap();
    let post: PostResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(post.comments[0].replies.len(), 1);
    let reply_id = post.comments[0].replies[0].id.clone();

    // Reply to the reply nests one level deeper
    let nested_req = AddCommentRequest::simple("Deeper still");
    let response = server
        .post(
            &format!("/api/v1/posts/{}/comments/{}/replies", post.id, reply_id),
            &nested_req,
        )
        .await
        .unwrap();
    let post: PostResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(post.comments[0].replies[0].replies.len(), 1);
    assert_eq!(post.comments[0].replies[0].replies[0].text, "Deeper still");
}

#[tokio::test]
async fn test_reply_to_missing_comment() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = admin_token(&server).await;
    let post = create_test_post(&server, &admin).await;

    let reply_req = AddCommentRequest::simple("Orphan reply");
    let missing = uuid::Uuid::new_v4();
    let response = server
        .post(
            &format!("/api/v1/posts/{}/comments/{}/replies", post.id, missing),
            &reply_req,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Reaction Tests
// ============================================================================

#[tokio::test]
async fn test_react_to_post_toggles() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = admin_token(&server).await;
    let token = user_token(&server).await;
    let post = create_test_post(&server, &admin).await;

    let path = format!("/api/v1/posts/{}/reactions", post.id);

    // First reaction sets the count
    let response = server.post_auth(&path, &token, &ReactionRequest::like()).await.unwrap();
    let post: PostResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(post.reactions.get("like"), Some(&1));
    assert_eq!(post.reacted_by.len(), 1);

    // Same kind again removes it
    let response = server
        .post_auth(
            &format!("/api/v1/posts/{}/reactions", post.id),
            &token,
            &ReactionRequest::like(),
        )
        .await
        .unwrap();
    let post: PostResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(post.reactions.get("like").is_none());
    assert!(post.reacted_by.is_empty());
}

#[tokio::test]
async fn test_react_switches_kind() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = admin_token(&server).await;
    let token = user_token(&server).await;
    let post = create_test_post(&server, &admin).await;

    let path = format!("/api/v1/posts/{}/reactions", post.id);

    server.post_auth(&path, &token, &ReactionRequest::like()).await.unwrap();
    let love = ReactionRequest {
        kind: "love".to_string(),
    };
    let response = server.post_auth(&path, &token, &love).await.unwrap();
    let post: PostResponse = assert_json(response, StatusCode::OK).await.unwrap();

    // The old kind is released, the new one held
    assert!(post.reactions.get("like").is_none());
    assert_eq!(post.reactions.get("love"), Some(&1));
}

#[tokio::test]
async fn test_react_to_comment_and_reply() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = admin_token(&server).await;
    let token = user_token(&server).await;
    let post = create_test_post(&server, &admin).await;

    // Build one comment with one reply
    let response = server
        .post(
            &format!("/api/v1/posts/{}/comments", post.id),
            &AddCommentRequest::simple("React to me"),
        )
        .await
        .unwrap();
    let post: PostResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let comment_id = post.comments[0].id.clone();

    let response = server
        .post(
            &format!("/api/v1/posts/{}/comments/{}/replies", post.id, comment_id),
            &AddCommentRequest::simple("And to me"),
        )
        .await
        .unwrap();
    let post: PostResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let reply_id = post.comments[0].replies[0].id.clone();

    // React to the comment
    let response = server
        .post_auth(
            &format!("/api/v1/posts/{}/comments/{}/reactions", post.id, comment_id),
            &token,
            &ReactionRequest::like(),
        )
        .await
        .unwrap();
    let post: PostResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(post.comments[0].reactions.get("like"), Some(&1));

    // React to the reply
    let response = server
        .post_auth(
            &format!(
                "/api/v1/posts/{}/comments/{}/replies/{}/reactions",
                post.id, comment_id, reply_id
            ),
            &token,
            &ReactionRequest::like(),
        )
        .await
        .unwrap();
    let post: PostResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(post.comments[0].replies[0].reactions.get("like"), Some(&1));
}

#[tokio::test]
async fn test_react_requires_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = admin_token(&server).await;
    let post = create_test_post(&server, &admin).await;

    let response = server
        .post(
            &format!("/api/v1/posts/{}/reactions", post.id),
            &ReactionRequest::like(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_react_empty_kind_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = admin_token(&server).await;
    let token = user_token(&server).await;
    let post = create_test_post(&server, &admin).await;

    let empty = ReactionRequest {
        kind: String::new(),
    };
    let response = server
        .post_auth(&format!("/api/v1/posts/{}/reactions", post.id), &token, &empty)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Share Tests
// ============================================================================

#[tokio::test]
async fn test_share_post_increments() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = admin_token(&server).await;
    let post = create_test_post(&server, &admin).await;

    let path = format!("/api/v1/posts/{}/share", post.id);

    let response = server.post_empty(&path).await.unwrap();
    let post: PostResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(post.shares, 1);

    let response = server
        .post_empty(&format!("/api/v1/posts/{}/share", post.id))
        .await
        .unwrap();
    let post: PostResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(post.shares, 2);
}

// ============================================================================
// Admin Tests
// ============================================================================

#[tokio::test]
async fn test_admin_sends_password_reset() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = admin_token(&server).await;

    // Register a user to reset
    let reg = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &reg).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth_empty(
            &format!("/api/v1/admin/users/{}/password-reset", auth.user.id),
            &admin,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_admin_password_reset_requires_admin() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = user_token(&server).await;

    let response = server
        .post_auth_empty(
            &format!("/api/v1/admin/users/{}/password-reset", uuid::Uuid::new_v4()),
            &token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_admin_password_reset_unknown_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = admin_token(&server).await;

    let response = server
        .post_auth_empty(
            &format!("/api/v1/admin/users/{}/password-reset", uuid::Uuid::new_v4()),
            &admin,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}
