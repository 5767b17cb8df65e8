//! Tooling primitives for maze-agent AI.
//!
//! This crate is intentionally lightweight and engine-agnostic: an injectable
//! trace sink that behavior-tree evaluation can stream node visits into.
//! Tracing is a runtime configuration choice, not a rebuild; the default sink
//! drops everything.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod trace;

pub use trace::{IndentedTextSink, NullTraceSink, TraceEvent, TraceSink, VecTraceSink};
