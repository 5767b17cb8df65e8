#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::io;

/// A small, allocation-friendly trace event describing one node visit.
///
/// This is intentionally "dumb data" so it can be recorded during simulation
/// and later rendered by tooling. `depth` is the node's depth in the tree,
/// used for indentation; `result` is `None` when a composite is entered and
/// `Some` once a node has produced its boolean.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TraceEvent {
    pub step: u64,
    pub depth: u32,
    pub node: Cow<'static, str>,
    pub result: Option<bool>,
}

impl TraceEvent {
    pub fn new(step: u64, depth: u32, node: impl Into<Cow<'static, str>>) -> Self {
        Self {
            step,
            depth,
            node: node.into(),
            result: None,
        }
    }

    pub fn with_result(mut self, result: bool) -> Self {
        self.result = Some(result);
        self
    }
}

pub trait TraceSink {
    fn emit(&mut self, event: TraceEvent);
}

/// Default sink: drops every event.
#[derive(Debug, Default)]
pub struct NullTraceSink;

impl TraceSink for NullTraceSink {
    fn emit(&mut self, _event: TraceEvent) {}
}

/// Collects events in memory, mostly for tests and inspectors.
#[derive(Debug, Default)]
pub struct VecTraceSink {
    pub events: Vec<TraceEvent>,
}

impl TraceSink for VecTraceSink {
    fn emit(&mut self, event: TraceEvent) {
        self.events.push(event);
    }
}

/// Renders events as indented text, one line per node visit.
///
/// Output looks like:
///
/// ```text
/// Selector
///     GhostEdible -> failure
///     AvoidPowerPill -> success
/// ```
///
/// Write errors are swallowed: tracing must never affect evaluation.
pub struct IndentedTextSink<W: io::Write> {
    out: W,
}

impl<W: io::Write> IndentedTextSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: io::Write> TraceSink for IndentedTextSink<W> {
    fn emit(&mut self, event: TraceEvent) {
        let indent = "    ".repeat(event.depth as usize);
        let _ = match event.result {
            None => writeln!(self.out, "{indent}{}", event.node),
            Some(true) => writeln!(self.out, "{indent}{} -> success", event.node),
            Some(false) => writeln!(self.out, "{indent}{} -> failure", event.node),
        };
    }
}
