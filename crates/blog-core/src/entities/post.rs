//! Post entity - the root aggregate
//!
//! A post exclusively owns its entire comment tree and all reaction state;
//! the aggregate is loaded and persisted as one unit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::comment::{find_comment, find_comment_mut, Comment};
use super::reaction::{Reactable, ReactionState};
use crate::error::DomainError;

/// Post entity (root aggregate)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: String,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Top-level comments, insertion order = display order
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(flatten)]
    pub reactions: ReactionState,
    /// Monotonically non-decreasing share counter
    #[serde(default)]
    pub shares: i64,
}

impl Post {
    /// Create a new Post with an empty comment tree and reaction maps
    pub fn new(
        id: Uuid,
        title: String,
        content: String,
        author: String,
        category: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            title,
            content,
            author,
            category,
            created_at: now,
            updated_at: now,
            comments: Vec::new(),
            reactions: ReactionState::new(),
            shares: 0,
        }
    }

    /// Append a top-level comment
    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }

    /// Append a reply under the comment or reply identified by `parent_id`
    ///
    /// The parent may sit anywhere in the tree; fails with `CommentNotFound`
    /// if no node matches.
    pub fn add_reply(&mut self, parent_id: Uuid, reply: Comment) -> Result<(), DomainError> {
        let parent = find_comment_mut(&mut self.comments, parent_id)
            .ok_or(DomainError::CommentNotFound(parent_id))?;
        parent.add_reply(reply);
        Ok(())
    }

    /// Find a comment or reply anywhere in the tree
    pub fn find_comment(&self, id: Uuid) -> Option<&Comment> {
        find_comment(&self.comments, id)
    }

    /// Apply a reaction to the comment or reply identified by `comment_id`
    pub fn react_to_comment(
        &mut self,
        comment_id: Uuid,
        kind: &str,
        user_id: Uuid,
    ) -> Result<(), DomainError> {
        let comment = find_comment_mut(&mut self.comments, comment_id)
            .ok_or(DomainError::CommentNotFound(comment_id))?;
        comment.react(kind, user_id);
        Ok(())
    }

    /// Apply a reaction to a reply addressed by its explicit two-level path
    ///
    /// The top-level comment is resolved first, then the reply is searched
    /// within that comment's subtree only. The two lookups fail separately
    /// so callers can tell which level of the path was wrong.
    pub fn react_to_reply(
        &mut self,
        comment_id: Uuid,
        reply_id: Uuid,
        kind: &str,
        user_id: Uuid,
    ) -> Result<(), DomainError> {
        let comment = find_comment_mut(&mut self.comments, comment_id)
            .ok_or(DomainError::CommentNotFound(comment_id))?;
        let reply = find_comment_mut(&mut comment.replies, reply_id)
            .ok_or(DomainError::ReplyNotFound(reply_id))?;
        reply.react(kind, user_id);
        Ok(())
    }

    /// Record one share
    ///
    /// Every call counts; there is no per-user share ledger.
    pub fn record_share(&mut self) {
        self.shares += 1;
    }

    /// Mark the aggregate as modified
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Total number of comments and replies in the tree
    pub fn comment_count(&self) -> usize {
        self.comments
            .iter()
            .map(|c| 1 + c.reply_count())
            .sum()
    }
}

impl Reactable for Post {
    fn reaction_state(&self) -> &ReactionState {
        &self.reactions
    }

    fn reaction_state_mut(&mut self) -> &mut ReactionState {
        &mut self.reactions
    }
}
