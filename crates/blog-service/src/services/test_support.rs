//! In-memory fakes for service unit tests

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use blog_common::auth::JwtService;
use blog_core::{
    DomainError, Mailer, Post, PostRepository, RepoResult, User, UserRepository,
};
use blog_db::PgPool;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::context::{ServiceContext, ServiceContextBuilder};

/// In-memory post store, whole-aggregate semantics like the real repository
#[derive(Default)]
pub struct InMemoryPostRepo {
    posts: Mutex<BTreeMap<Uuid, Post>>,
}

#[async_trait]
impl PostRepository for InMemoryPostRepo {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Post>> {
        Ok(self.posts.lock().unwrap().get(&id).cloned())
    }

    async fn find_all(&self) -> RepoResult<Vec<Post>> {
        let posts = self.posts.lock().unwrap();
        let mut all: Vec<Post> = posts.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn save(&self, post: &Post) -> RepoResult<()> {
        self.posts.lock().unwrap().insert(post.id, post.clone());
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        self.posts
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or(DomainError::PostNotFound(id))
    }
}

#[derive(Clone)]
struct StoredUser {
    user: User,
    password_hash: String,
    reset_token_hash: Option<String>,
    reset_token_expires_at: Option<DateTime<Utc>>,
}

/// In-memory user store with credential columns
#[derive(Default)]
pub struct InMemoryUserRepo {
    users: Mutex<BTreeMap<Uuid, StoredUser>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>> {
        Ok(self.users.lock().unwrap().get(&id).map(|s| s.user.clone()))
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|s| s.user.email == email)
            .map(|s| s.user.clone()))
    }

    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .any(|s| s.user.email == email))
    }

    async fn username_exists(&self, username: &str) -> RepoResult<bool> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .any(|s| s.user.username == username))
    }

    async fn admin_exists(&self) -> RepoResult<bool> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .any(|s| s.user.is_admin()))
    }

    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()> {
        let mut users = self.users.lock().unwrap();
        if users.values().any(|s| s.user.email == user.email) {
            return Err(DomainError::EmailAlreadyExists);
        }
        users.insert(
            user.id,
            StoredUser {
                user: user.clone(),
                password_hash: password_hash.to_string(),
                reset_token_hash: None,
                reset_token_expires_at: None,
            },
        );
        Ok(())
    }

    async fn get_password_hash(&self, id: Uuid) -> RepoResult<Option<String>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .get(&id)
            .map(|s| s.password_hash.clone()))
    }

    async fn update_password(&self, id: Uuid, password_hash: &str) -> RepoResult<()> {
        let mut users = self.users.lock().unwrap();
        let stored = users.get_mut(&id).ok_or(DomainError::UserNotFound(id))?;
        stored.password_hash = password_hash.to_string();
        Ok(())
    }

    async fn set_reset_token(
        &self,
        id: Uuid,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> RepoResult<()> {
        let mut users = self.users.lock().unwrap();
        let stored = users.get_mut(&id).ok_or(DomainError::UserNotFound(id))?;
        stored.reset_token_hash = Some(token_hash.to_string());
        stored.reset_token_expires_at = Some(expires_at);
        Ok(())
    }

    async fn find_by_reset_token(&self, token_hash: &str) -> RepoResult<Option<User>> {
        let now = Utc::now();
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|s| {
                s.reset_token_hash.as_deref() == Some(token_hash)
                    && matches!(s.reset_token_expires_at, Some(exp) if exp > now)
            })
            .map(|s| s.user.clone()))
    }

    async fn clear_reset_token(&self, id: Uuid) -> RepoResult<()> {
        let mut users = self.users.lock().unwrap();
        let stored = users.get_mut(&id).ok_or(DomainError::UserNotFound(id))?;
        stored.reset_token_hash = None;
        stored.reset_token_expires_at = None;
        Ok(())
    }
}

/// Mailer that records every message instead of sending
#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<(String, String, String)>>,
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<(), DomainError> {
        self.sent.lock().unwrap().push((
            to.to_string(),
            subject.to_string(),
            html_body.to_string(),
        ));
        Ok(())
    }
}

/// Build a context over fresh in-memory stores
pub fn test_context() -> ServiceContext {
    test_context_with_mailer().0
}

/// Build a context and keep a handle on the recording mailer
pub fn test_context_with_mailer() -> (ServiceContext, Arc<RecordingMailer>) {
    let mailer = Arc::new(RecordingMailer::default());
    // connect_lazy never touches the network; the pool exists only to
    // satisfy the context shape
    let pool = PgPool::connect_lazy("postgres://localhost/unused").unwrap();

    let ctx = ServiceContextBuilder::new()
        .pool(pool)
        .post_repo(Arc::new(InMemoryPostRepo::default()))
        .user_repo(Arc::new(InMemoryUserRepo::default()))
        .mailer(mailer.clone())
        .jwt_service(Arc::new(JwtService::new("test-secret-for-services", 3600)))
        .frontend_url("http://localhost:3000")
        .build()
        .unwrap();

    (ctx, mailer)
}
