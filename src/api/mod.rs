//! Host-agent API access: transport, wire types, and the demo backend.

pub mod client;
pub mod demo;
pub mod types;

pub use client::{ApiClient, ApiError, HostApi};
