//! Client for the course/quiz HTTP API.

mod client;
mod endpoints;

pub use client::{check_status, ApiClient, HEALTH_PATH};
