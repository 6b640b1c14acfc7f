//! Nimbus Bridge Library
//!
//! Bootstrap layer for hosting a Nimbus device-cloud account inside a
//! smart-home platform: validate the configuration, authenticate,
//! enumerate devices, and dispatch the enabled device-category
//! subsystems.

pub mod account;
pub mod config;
pub mod context;
pub mod errors;
pub mod host;
pub mod logs;
pub mod setup;
pub mod utils;
