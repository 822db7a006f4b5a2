//! Integration tests for the binrain public API.

mod engine_test;
mod helpers;
