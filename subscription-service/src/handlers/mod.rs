//! HTTP handlers for subscription-service.

pub mod health;
pub mod subscription;
