//! In-game overlay widget controller.
//!
//! Owns the progress bar shown inside the game's embedded page:
//! - Inbound host commands (`progressbar`, `hideProgressbar`)
//! - A time-based fill driven by a single cancellable deferred operation
//! - Render surfaces the controller draws into
//! - Outbound, best-effort callbacks to the host (`closeUI` on Escape)

pub mod callback;
pub mod command;
pub mod controller;
pub mod keys;
pub mod progress;
pub mod resource;
pub mod sanitize;
pub mod surface;
pub mod timer;

pub use callback::{CallbackClient, CallbackOutcome, HostTransport, HttpTransport};
pub use command::InboundCommand;
pub use controller::{OverlayController, OverlayEvent, OverlayHandle, OverlaySettings};
pub use sanitize::escape_html;
pub use surface::{ChannelSurface, OverlaySurface, SharedSurface, SurfaceState, SurfaceUpdate};
