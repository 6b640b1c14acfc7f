//! Unit test harness

mod test_config;
mod test_context;
mod test_lifecycle;
