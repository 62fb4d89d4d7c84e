//! Common test utilities for ambassador-auth-core integration tests

pub mod mock_repos;

#[allow(unused_imports)]
pub use mock_repos::{test_config, MockUserRepository, ADMIN, EDITOR, VIEWER};
