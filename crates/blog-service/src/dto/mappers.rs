//! Entity -> response DTO mappers

use blog_core::{Comment, Post, User};

use super::responses::{CommentResponse, CurrentUserResponse, PostResponse};

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id,
            author: comment.author.clone(),
            text: comment.text.clone(),
            reactions: comment.reactions.reactions.clone(),
            reacted_by: comment.reactions.reacted_by.clone(),
            replies: comment.replies.iter().map(CommentResponse::from).collect(),
            created_at: comment.created_at,
        }
    }
}

impl From<&Post> for PostResponse {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            content: post.content.clone(),
            author: post.author.clone(),
            category: post.category.clone(),
            comments: post.comments.iter().map(CommentResponse::from).collect(),
            reactions: post.reactions.reactions.clone(),
            reacted_by: post.reactions.reacted_by.clone(),
            shares: post.shares,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

impl From<&User> for CurrentUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role,
            created_at: user.created_at,
        }
    }
}
