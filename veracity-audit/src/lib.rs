//! # veracity-audit
//!
//! Best-effort audit recording. The sink must never raise past its
//! boundary: audit failure must not be conflated with, or cause, a safety
//! failure. Also hosts tracing initialization for binaries.

mod sink;
pub mod tracing_setup;

pub use sink::{JsonlAuditSink, MemoryAuditSink, NullAuditSink};
