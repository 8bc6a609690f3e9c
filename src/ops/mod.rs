//! ops
//!
//! The repository operations facade shared by every front end.
//!
//! # Modules
//!
//! - [`facade`] - Branch/tag listing, checkout, and the read/maintenance tools
//! - [`checkout_flow`] - Interactive target selection ahead of a checkout
//! - [`tools`] - Static catalog of the tools, for menus and listings
//!
//! # Invariants
//!
//! - Nothing runs against a handle that is not a repository
//! - Every outcome is a value; no operation returns `Err` or panics
//! - At most one call is in flight per handle (caller's responsibility)

pub mod checkout_flow;
pub mod facade;
pub mod tools;

pub use checkout_flow::{
    CheckoutFlow, CheckoutSelection, FlowEvent, FlowOutcome, FlowReply, FlowState,
};
pub use facade::{format_log_line, Operations, DEFAULT_LOG_COUNT};
pub use tools::{ToolDescriptor, ToolId, ToolRegistry};
