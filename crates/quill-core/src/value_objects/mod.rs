//! Value objects - identifiers and pure content functions

pub mod content;
pub mod slug;
mod snowflake;

pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
