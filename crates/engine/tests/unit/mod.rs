//! # Unit Tests
//!
//! Central hub for the engine's unit test modules, organized to mirror the
//! crate's module tree.
