//! Post service
//!
//! All mutations follow the same shape: load the aggregate, locate the
//! target node, mutate in memory, persist the whole aggregate once.

use blog_core::{Comment, Post, Reactable};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{AddCommentRequest, AddReplyRequest, CreatePostRequest, UpdatePostRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    /// Create a new PostService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all posts, newest first
    #[instrument(skip(self))]
    pub async fn list_posts(&self) -> ServiceResult<Vec<Post>> {
        Ok(self.ctx.post_repo().find_all().await?)
    }

    /// Create a new post with an empty comment tree
    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create_post(&self, request: CreatePostRequest) -> ServiceResult<Post> {
        let post = Post::new(
            self.ctx.generate_id(),
            request.title,
            request.content,
            request.author,
            request.category,
        );

        self.ctx.post_repo().save(&post).await?;
        info!(post_id = %post.id, "Post created");

        Ok(post)
    }

    /// Partially update a post's own fields
    #[instrument(skip(self, request))]
    pub async fn update_post(&self, post_id: Uuid, request: UpdatePostRequest) -> ServiceResult<Post> {
        let mut post = self.load_post(post_id).await?;

        if let Some(title) = request.title {
            post.title = title;
        }
        if let Some(content) = request.content {
            post.content = content;
        }
        if let Some(author) = request.author {
            post.author = author;
        }
        if let Some(category) = request.category {
            post.category = Some(category);
        }
        post.touch();

        self.ctx.post_repo().save(&post).await?;
        info!(post_id = %post.id, "Post updated");

        Ok(post)
    }

    /// Delete a post and its owned comment tree
    #[instrument(skip(self))]
    pub async fn delete_post(&self, post_id: Uuid) -> ServiceResult<()> {
        self.ctx.post_repo().delete(post_id).await?;
        info!(post_id = %post_id, "Post deleted");
        Ok(())
    }

    /// Append a top-level comment
    #[instrument(skip(self, request))]
    pub async fn add_comment(
        &self,
        post_id: Uuid,
        request: AddCommentRequest,
    ) -> ServiceResult<Post> {
        let mut post = self.load_post(post_id).await?;

        let comment = Comment::new(self.ctx.generate_id(), request.author, request.text);
        let comment_id = comment.id;
        post.add_comment(comment);
        post.touch();

        self.ctx.post_repo().save(&post).await?;
        info!(post_id = %post_id, comment_id = %comment_id, "Comment added");

        Ok(post)
    }

    /// Append a reply under any comment or reply in the tree
    #[instrument(skip(self, request))]
    pub async fn add_reply(
        &self,
        post_id: Uuid,
        parent_id: Uuid,
        request: AddReplyRequest,
    ) -> ServiceResult<Post> {
        let mut post = self.load_post(post_id).await?;

        let reply = Comment::new(self.ctx.generate_id(), request.author, request.text);
        let reply_id = reply.id;
        post.add_reply(parent_id, reply)?;
        post.touch();

        self.ctx.post_repo().save(&post).await?;
        info!(post_id = %post_id, parent_id = %parent_id, reply_id = %reply_id, "Reply added");

        Ok(post)
    }

    /// Toggle a reaction on the post itself
    #[instrument(skip(self))]
    pub async fn react_to_post(
        &self,
        post_id: Uuid,
        user_id: Uuid,
        kind: &str,
    ) -> ServiceResult<Post> {
        validate_kind(kind)?;
        let mut post = self.load_post(post_id).await?;

        post.react(kind, user_id);
        post.touch();

        self.ctx.post_repo().save(&post).await?;
        info!(post_id = %post_id, user_id = %user_id, kind, "Post reaction toggled");

        Ok(post)
    }

    /// Toggle a reaction on a comment anywhere in the tree
    #[instrument(skip(self))]
    pub async fn react_to_comment(
        &self,
        post_id: Uuid,
        comment_id: Uuid,
        user_id: Uuid,
        kind: &str,
    ) -> ServiceResult<Post> {
        validate_kind(kind)?;
        let mut post = self.load_post(post_id).await?;

        post.react_to_comment(comment_id, kind, user_id)?;
        post.touch();

        self.ctx.post_repo().save(&post).await?;
        info!(post_id = %post_id, comment_id = %comment_id, kind, "Comment reaction toggled");

        Ok(post)
    }

    /// Toggle a reaction on a reply addressed by its two-level path
    #[instrument(skip(self))]
    pub async fn react_to_reply(
        &self,
        post_id: Uuid,
        comment_id: Uuid,
        reply_id: Uuid,
        user_id: Uuid,
        kind: &str,
    ) -> ServiceResult<Post> {
        validate_kind(kind)?;
        let mut post = self.load_post(post_id).await?;

        post.react_to_reply(comment_id, reply_id, kind, user_id)?;
        post.touch();

        self.ctx.post_repo().save(&post).await?;
        info!(post_id = %post_id, reply_id = %reply_id, kind, "Reply reaction toggled");

        Ok(post)
    }

    /// Record one share on the post
    #[instrument(skip(self))]
    pub async fn share_post(&self, post_id: Uuid) -> ServiceResult<Post> {
        let mut post = self.load_post(post_id).await?;

        post.record_share();
        post.touch();

        self.ctx.post_repo().save(&post).await?;
        info!(post_id = %post_id, shares = post.shares, "Post shared");

        Ok(post)
    }

    async fn load_post(&self, post_id: Uuid) -> ServiceResult<Post> {
        self.ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", post_id.to_string()))
    }
}

fn validate_kind(kind: &str) -> ServiceResult<()> {
    if kind.trim().is_empty() {
        return Err(ServiceError::validation("Reaction kind must not be empty"));
    }
    Ok(())
}
