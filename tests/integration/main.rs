//! Integration test harness
//!
//! These tests use wiremock to stand up mock HTTP servers and exercise the
//! fetcher, walker, and driver end-to-end.

mod crawl_tests;
