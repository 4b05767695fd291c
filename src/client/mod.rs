//! Client-side counterpart of the proxy: HTTP plumbing for the two API
//! operations plus the session state machine that drives them.

pub mod api;
#[cfg(feature = "playback")]
pub mod playback;
pub mod session;

pub use api::{ClientError, ProxyClient};
pub use session::{GenerationState, Session, SessionError};
