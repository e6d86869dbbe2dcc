//! Common test utilities for integration tests.
//!
//! This module provides helpers for creating temporary Git repositories
//! with libgit2 (no `git` binary needed) and a scripted selector.
//!
//! Note: Each integration test file compiles as a separate crate,
//! so not all helpers are used in every test file. We suppress
//! dead_code warnings at the module level.

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod selector;
pub mod test_repo;

pub use selector::ScriptedSelector;
pub use test_repo::TestRepo;
