//! Receipt points service
//!
//! Accepts purchase receipts over HTTP, keeps them in memory and scores each one with loyalty
//! points. The scoring rules live in [`domain::points`]; everything else is plumbing between the
//! HTTP adapter, the command layer and the receipt store.

pub mod adapters;
pub mod commands;
pub mod config;
pub mod domain;
pub mod logging;
pub mod ports;
