//! Test module organization.
//!
//! This module organizes all integration tests for the analyzer.

/// Analysis configuration loading tests.
mod config_tests;

/// Branch accuracy and cache hit-rate tests.
mod derived_tests;



/// Results directory discovery tests.
mod loader_tests;
