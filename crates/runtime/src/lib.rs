//! Scope Runtime - Event routing for remote browser sessions
//!
//! A remote browser raises out-of-band events tagged with a service name and
//! a service-scoped command id. This crate turns those raw events into typed
//! observer callbacks:
//!
//! - **Registry**: `(service, command id)` to symbolic [`EventKind`]
//! - **Dispatcher**: payload decoding and the matching [`EventHandler`] call
//! - **Event loop**: drains a transport's event channel into the dispatcher
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │  transport   │  Deframed RawEvent records (not part of this crate)
//! └──────┬───────┘
//!        │ mpsc
//! ┌──────▼───────┐
//! │ scope-runtime│  This crate
//! │  ┌────────┐  │
//! │  │ Loop   │  │  Decode-error policy, logging
//! │  └────────┘  │
//! │  ┌────────┐  │
//! │  │Dispatch│  │  Decode + callback
//! │  └────────┘  │
//! │  ┌────────┐  │
//! │  │Registry│  │  service → command id → kind
//! │  └────────┘  │
//! └──────┬───────┘
//!        │ EventHandler
//! ┌──────▼───────┐
//! │   observer   │  Driver state (not part of this crate)
//! └──────────────┘
//! ```
//!
//! # Failure model
//!
//! Events for unknown services or command ids are ignored so that newer
//! browsers can be driven by older clients. A known event whose payload does
//! not decode is an [`Error::Decode`], and one that decodes without a required
//! field is an [`Error::MissingField`]; both are returned to the caller of
//! [`EventDispatcher::dispatch`].

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod event_loop;
pub mod handler;
pub mod logging;
pub mod registry;

#[cfg(test)]
mod testing;

// Re-export key types at crate root
pub use config::{DecodeErrorPolicy, EventLoopConfig};
pub use dispatcher::{Dispatch, EventDispatcher};
pub use error::{Error, Result};
pub use event_loop::{EventLoop, EventLoopStats, event_channel};
pub use handler::EventHandler;
pub use logging::LoggingEventHandler;
pub use registry::{CommandRegistry, EventKind, Resolution, ServiceTable};
