//! Host serial link.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  ┌───────────┐   ┌─────────────┐   ┌──────────────────┐  │
//! │  │ Transport │──▶│ LineDecoder │──▶│ HostCommand      │──┼──▶ LockController
//! │  │ (trait)   │   │ (framing)   │   │ (closed enum)    │  │
//! │  └───────────┘   └─────────────┘   └──────────────────┘  │
//! │       ▲                                                  │
//! │       └──────── "<client_id> : <body>\n" ◀── NodeMessage ┼──◀ LockController
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The transport is assumed reliable and ordered; there are no retries.

pub mod codec;
pub mod host;
pub mod transport;

pub use host::HostLink;
pub use transport::Transport;
