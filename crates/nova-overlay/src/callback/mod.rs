//! Outbound calls from the page to the host.
//!
//! Calls are POSTs to `https://<resource>/<name>` with a JSON body. They are
//! best-effort notifications: failures are logged and collapsed to `null`
//! for callers, while `CallbackOutcome` keeps the distinction internally.

mod client;
mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{callback_url, CallbackClient, CallbackOutcome};
pub use transport::{HostTransport, HttpTransport};
