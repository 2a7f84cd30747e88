//! Domain entities - core business objects

mod comment;
mod post;
mod reaction;
mod user;

pub use comment::{find_comment, find_comment_mut, Comment};
pub use post::Post;
pub use reaction::{Reactable, ReactionState};
pub use user::{Role, User};
