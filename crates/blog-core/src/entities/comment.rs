//! Comment entity - a recursive tree node
//!
//! Comments and replies share one shape: a reply is a comment owned by
//! another comment's `replies` list. Nesting depth is unbounded in the
//! data model even though the UI conventionally stops at one level.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::reaction::{Reactable, ReactionState};

/// Comment entity (also used for replies)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub author: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub reactions: ReactionState,
    /// Insertion order is display order
    #[serde(default)]
    pub replies: Vec<Comment>,
}

impl Comment {
    /// Create a new Comment with empty replies and reaction maps
    pub fn new(id: Uuid, author: String, text: String) -> Self {
        Self {
            id,
            author,
            text,
            created_at: Utc::now(),
            reactions: ReactionState::new(),
            replies: Vec::new(),
        }
    }

    /// Append a reply to this comment
    pub fn add_reply(&mut self, reply: Comment) {
        self.replies.push(reply);
    }

    /// Check if this comment has replies
    #[inline]
    pub fn has_replies(&self) -> bool {
        !self.replies.is_empty()
    }

    /// Total number of nodes in this subtree, excluding the comment itself
    pub fn reply_count(&self) -> usize {
        self.replies
            .iter()
            .map(|r| 1 + r.reply_count())
            .sum()
    }
}

impl Reactable for Comment {
    fn reaction_state(&self) -> &ReactionState {
        &self.reactions
    }

    fn reaction_state_mut(&mut self) -> &mut ReactionState {
        &mut self.reactions
    }
}

/// Find a comment or reply by id anywhere in the given subtrees
///
/// Pre-order depth-first traversal, first match wins: each node is checked
/// before its replies are searched exhaustively, and only then does the
/// search advance to the next sibling.
pub fn find_comment(comments: &[Comment], id: Uuid) -> Option<&Comment> {
    for comment in comments {
        if comment.id == id {
            return Some(comment);
        }
        if let Some(found) = find_comment(&comment.replies, id) {
            return Some(found);
        }
    }
    None
}

/// Mutable variant of [`find_comment`], same traversal order
///
/// The returned reference borrows from the owning post; it is valid for the
/// current request only and must not outlive the loaded aggregate.
pub fn find_comment_mut(comments: &mut [Comment], id: Uuid) -> Option<&mut Comment> {
    for comment in comments {
        if comment.id == id {
            return Some(comment);
        }
        if let Some(found) = find_comment_mut(&mut comment.replies, id) {
            return Some(found);
        }
    }
    None
}
