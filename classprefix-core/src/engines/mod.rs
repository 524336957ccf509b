// classprefix-core/src/engines/mod.rs
//! Concrete implementations of the `RewriteEngine` trait.
//!
//! # License
//! MIT OR Apache-2.0

pub mod prefix_engine;
