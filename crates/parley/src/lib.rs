//! Request verification and lifecycle dispatch for voice platform webhooks.
//!
//! A transport decodes the platform's JSON into a
//! [`RequestEnvelope`](parley_envelope::RequestEnvelope) and hands it to
//! [`Dispatcher::process`]. The dispatcher runs the admission checks in
//! [`verify`], invokes the matching [`RequestHandler`] callbacks against a
//! single [`Response`](parley_envelope::Response), and returns the finished
//! [`ResponseEnvelope`](parley_envelope::ResponseEnvelope) for the transport
//! to encode.
//!
//! ```no_run
//! use parley::{DispatchSettings, Dispatcher, HandlerError, RequestHandler};
//! use parley_envelope::{Context, Request, RequestEnvelope, Response, Session};
//!
//! struct Greeter;
//!
//! impl RequestHandler for Greeter {
//!     type TurnContext = ();
//!
//!     fn on_session_started(&self, _: &(), _: &Request, _: &Session, _: &Context, _: &mut Response) -> Result<(), HandlerError> {
//!         Ok(())
//!     }
//!
//!     fn on_launch(&self, _: &(), _: &Request, _: &Session, _: &Context, response: &mut Response) -> Result<(), HandlerError> {
//!         response.set_output_text("Welcome");
//!         Ok(())
//!     }
//!
//!     fn on_intent(&self, _: &(), _: &Request, _: &Session, _: &Context, _: &mut Response) -> Result<(), HandlerError> {
//!         Ok(())
//!     }
//!
//!     fn on_session_ended(&self, _: &(), _: &Request, _: &Session, _: &Context, _: &mut Response) -> Result<(), HandlerError> {
//!         Ok(())
//!     }
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! # let body: &[u8] = b"{}";
//! let dispatcher = Dispatcher::new(DispatchSettings::new("amzn1.ask.skill.1"), Greeter);
//! let envelope = RequestEnvelope::from_slice(body)?;
//! let reply = dispatcher.process(&(), &envelope)?;
//! let _bytes = reply.to_vec()?;
//! # Ok(())
//! # }
//! ```

mod clock;
mod dispatcher;
mod errors;
mod handler;
mod settings;
pub mod telemetry;
pub mod verify;

pub use clock::{Clock, FixedClock, SystemClock};
pub use dispatcher::Dispatcher;
pub use errors::{DispatchError, ErrorKind, HandlerError, IdentityMismatchReason};
pub use handler::{LifecycleEvent, RequestHandler};
pub use settings::DispatchSettings;
pub use telemetry::{TelemetryError, TelemetryHandle};
