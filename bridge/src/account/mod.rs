//! Nimbus account module

pub mod client;
pub mod devices;
pub mod session;
