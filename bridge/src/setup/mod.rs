//! Account setup sequence

pub mod bootstrap;
pub mod dispatch;
pub mod lifecycle;
pub mod run;

/// Integration identity used in diagnostics
pub const INTEGRATION: &str = "nimbus";
