//! Database layer: pool and user directory queries for PostgreSQL.

mod pool;
mod repositories;

pub use pool::{create_pool, DbPool};
pub use repositories::*;
