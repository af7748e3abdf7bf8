//! Assessment session.
//!
//! [`SessionState`] drives the one-question-at-a-time flow as a reducer;
//! completion is announced through [`SessionEvent`]s, which
//! [`forward_events`] hands to a [`ResultSink`] without coupling scoring to
//! any I/O.

mod persistence;
mod state;

pub use persistence::{
    forward_events, AssessmentRecord, JsonLinesSink, MemorySink, NoOpSink, ResultSink,
};
pub use state::{Progress, SessionAction, SessionEvent, SessionState, Transition};
