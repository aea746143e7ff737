// ABOUTME: Shared helpers for integration tests
// ABOUTME: Re-exports HTTP testing utilities for route tests

pub mod axum_test;
