//! Integration tests for request-guard

mod value_tests;
