//! Integration tests for the search and load pipeline

mod fixtures;
mod loader_tests;
mod search_tests;
