//! Wire types for Scope protocol events.
//!
//! This crate contains the types that arrive from a remote browser over the
//! Scope transport once it has been deframed: the [`RawEvent`] envelope and
//! the protobuf payload messages each service attaches to its events.
//!
//! # Design Philosophy
//!
//! Types in this crate are:
//! - **Pure data**: No behavior beyond encoding/decoding
//! - **1:1 with protocol**: Field numbers and labels match the service definitions
//! - **Stable**: Changes only when a service's wire schema changes
//!
//! Routing events to typed callbacks is built on top of these types in `scope-runtime`.

pub mod console_logger;
pub mod desktop_wm;
pub mod ecmascript;
pub mod esdbg;
pub mod event;
pub mod http_logger;
pub mod payload;
pub mod schema;
pub mod selftest;
pub mod service;
pub mod window_manager;

pub use console_logger::ConsoleMessage;
pub use desktop_wm::{
	DesktopWindowInfo, DesktopWindowRect, DesktopWindowState, DesktopWindowType, QuickMenuId, QuickMenuInfo,
	QuickMenuItemId, QuickMenuItemInfo,
};
pub use ecmascript::{ReadyState, ReadyStateChange};
pub use esdbg::{RuntimeId, RuntimeInfo};
pub use event::RawEvent;
pub use http_logger::Header;
pub use payload::Payload;
pub use schema::Schema;
pub use selftest::{SelftestResult, SelftestResultType};
pub use window_manager::{WindowId, WindowInfo};
