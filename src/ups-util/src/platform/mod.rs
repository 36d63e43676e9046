mod client;
mod error;
mod session;
mod structs;

pub use client::CloudFoundryClient;
pub use error::{FetchError, PlatformError, PlatformResult, ResolutionError};
pub use session::{CfSessionProvider, Session, SessionProvider};
pub use structs::AppRef;

#[cfg(test)]
pub use session::MockSessionProvider;
