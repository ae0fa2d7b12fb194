pub mod db;
mod media;
pub mod models;
mod overrides;
mod tables;

pub use db::{Database, DatabaseError};
pub use tables::*;
