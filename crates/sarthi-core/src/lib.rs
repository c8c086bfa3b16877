//! Shared building blocks for KUSUM Sarthi: locale and message types,
//! configuration, the top-level error type and the analytics event boundary.

pub mod config;
pub mod error;
pub mod events;
pub mod types;

pub use config::SarthiConfig;
pub use error::{Result, SarthiError};
pub use events::{ChatEvent, EventSink, RecordingEventSink, TracingEventSink};
pub use types::*;
