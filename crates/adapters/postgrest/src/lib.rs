//! procura-adapter-postgrest - 托管数据库 (PostgREST) 适配器

mod client;
mod config;
mod error;

pub use client::*;
pub use config::*;
pub use error::*;
