//! Entity <-> model mappers

mod post;
mod user;

pub use post::PostColumns;
