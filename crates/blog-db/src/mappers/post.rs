//! Post entity <-> model mapper

use blog_core::{Post, ReactionState};
use sqlx::types::Json;

use crate::models::PostModel;

/// Convert PostModel to Post entity
impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: model.id,
            title: model.title,
            content: model.content,
            author: model.author,
            category: model.category,
            created_at: model.created_at,
            updated_at: model.updated_at,
            comments: model.comments.0,
            reactions: ReactionState {
                reactions: model.reactions.0,
                reacted_by: model.reacted_by.0,
            },
            shares: model.shares,
        }
    }
}

/// Borrowed column values for persisting a Post aggregate
///
/// The JSONB columns wrap references so the save path never clones the
/// comment tree.
pub struct PostColumns<'a> {
    pub comments: Json<&'a [blog_core::Comment]>,
    pub reactions: Json<&'a std::collections::BTreeMap<String, i64>>,
    pub reacted_by: Json<&'a std::collections::BTreeMap<uuid::Uuid, String>>,
}

impl<'a> PostColumns<'a> {
    #[must_use]
    pub fn new(post: &'a Post) -> Self {
        Self {
            comments: Json(post.comments.as_slice()),
            reactions: Json(&post.reactions.reactions),
            reacted_by: Json(&post.reactions.reacted_by),
        }
    }
}
