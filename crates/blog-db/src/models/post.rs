//! Post database model
//!
//! One row per aggregate. The comment tree and both reaction maps are JSONB
//! columns; SQLx decodes them through `Json<T>` wrappers.

use std::collections::BTreeMap;

use blog_core::Comment;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the posts table
#[derive(Debug, Clone, FromRow)]
pub struct PostModel {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: String,
    pub category: Option<String>,
    pub comments: Json<Vec<Comment>>,
    pub reactions: Json<BTreeMap<String, i64>>,
    pub reacted_by: Json<BTreeMap<Uuid, String>>,
    pub shares: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
