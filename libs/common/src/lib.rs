//! Common library for the members-only articles service
//!
//! This crate provides shared functionality for the service, including
//! database connectivity and error handling.

pub mod database;
pub mod error;
