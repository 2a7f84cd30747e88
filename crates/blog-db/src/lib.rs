//! # blog-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the repository traits
//! defined in `blog-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//!
//! Posts are stored as whole aggregates: the comment tree and reaction maps
//! live in JSONB columns next to the scalar post fields, and every save
//! overwrites the full row.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use blog_db::pool::{create_pool, PoolConfig};
//! use blog_db::repositories::PgPostRepository;
//! use blog_core::PostRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PoolConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let post_repo = PgPostRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, PgPool, PoolConfig};
pub use repositories::{PgPostRepository, PgUserRepository};
