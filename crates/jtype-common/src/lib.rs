//! Common types and utilities for the jtype crates.
//!
//! This crate provides foundational pieces shared by everything that reads or
//! produces a Java type graph:
//! - String interning (`Atom`, `Interner`) for fully-qualified and simple names
//! - Centralized limits and thresholds
//! - Tracing subscriber setup for tests and embedding tools

// String interning for name deduplication
pub mod interner;
pub use interner::{Atom, Interner};

// Centralized limits and thresholds
pub mod limits;

// Opt-in tracing output
pub mod tracing_config;
