//! Lifecycle dispatch for one request/response turn.
//!
//! [`Dispatcher::process`] admits the envelope, then invokes the handler:
//!
//! 1. identity check, unless skipped;
//! 2. timestamp check, unless skipped;
//! 3. `on_session_started` when the session is new;
//! 4. exactly one of `on_launch`, `on_intent` or `on_session_ended`, chosen
//!    by the request type. Other request types invoke nothing further.
//!
//! Any failure ends the turn without a response envelope.

use tracing::{debug, warn};

use parley_envelope::{RequestEnvelope, RequestKind, Response, ResponseEnvelope};

use crate::clock::{Clock, SystemClock};
use crate::errors::DispatchError;
use crate::handler::{LifecycleEvent, RequestHandler};
use crate::settings::DispatchSettings;
use crate::verify::{verify_application_id, verify_timestamp};

/// Tracing target for dispatch operations.
pub(crate) const DISPATCH_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::dispatch");

/// Admits request envelopes and routes them to a [`RequestHandler`].
pub struct Dispatcher<H, C = SystemClock> {
    settings: DispatchSettings,
    handler: H,
    clock: C,
}

impl<H> Dispatcher<H>
where
    H: RequestHandler,
{
    /// Creates a dispatcher that reads the system clock.
    #[must_use]
    pub fn new(settings: DispatchSettings, handler: H) -> Self {
        Self::with_clock(settings, handler, SystemClock)
    }
}

impl<H, C> Dispatcher<H, C>
where
    H: RequestHandler,
    C: Clock,
{
    /// Creates a dispatcher with an explicit time source.
    #[must_use]
    pub const fn with_clock(settings: DispatchSettings, handler: H, clock: C) -> Self {
        Self {
            settings,
            handler,
            clock,
        }
    }

    /// Current settings.
    #[must_use]
    pub const fn settings(&self) -> &DispatchSettings {
        &self.settings
    }

    /// Mutable access to the settings between turns.
    pub const fn settings_mut(&mut self) -> &mut DispatchSettings {
        &mut self.settings
    }

    /// Sets the timestamp tolerance in seconds (default 150).
    pub const fn set_timestamp_tolerance(&mut self, seconds: u32) {
        self.settings.set_timestamp_tolerance_secs(seconds);
    }

    /// The wrapped handler.
    #[must_use]
    pub const fn handler(&self) -> &H {
        &self.handler
    }

    /// Processes one request envelope.
    ///
    /// `turn` is handed to every callback unchanged.
    ///
    /// # Errors
    ///
    /// Returns the first admission failure, or a
    /// [`DispatchError::HandlerFailure`] naming the callback that failed. No
    /// partial response is returned in either case.
    pub fn process(
        &self,
        turn: &H::TurnContext,
        envelope: &RequestEnvelope,
    ) -> Result<ResponseEnvelope, DispatchError> {
        self.admit(envelope)?;

        let mut response = Response::new();

        if envelope.session.new {
            self.invoke(LifecycleEvent::SessionStarted, turn, envelope, &mut response)?;
        }

        let kind = envelope.request.kind();
        debug!(
            target: DISPATCH_TARGET,
            request_type = envelope.request.request_type.as_str(),
            request_id = envelope.request.request_id.as_str(),
            new_session = envelope.session.new,
            "routing request"
        );
        match kind {
            RequestKind::Launch => {
                self.invoke(LifecycleEvent::Launch, turn, envelope, &mut response)?;
            }
            RequestKind::Intent => {
                self.invoke(LifecycleEvent::Intent, turn, envelope, &mut response)?;
            }
            RequestKind::SessionEnded => {
                self.invoke(LifecycleEvent::SessionEnded, turn, envelope, &mut response)?;
            }
            RequestKind::Other => {
                debug!(
                    target: DISPATCH_TARGET,
                    request_type = envelope.request.request_type.as_str(),
                    "no callback for request type"
                );
            }
        }

        Ok(ResponseEnvelope::new(response))
    }

    fn admit(&self, envelope: &RequestEnvelope) -> Result<(), DispatchError> {
        if self.settings.verifies_application_id() {
            verify_application_id(self.settings.application_id(), envelope)
                .inspect_err(|error| log_rejection(envelope, error))?;
        }

        if self.settings.verifies_timestamp() {
            verify_timestamp(
                &envelope.request.timestamp,
                self.clock.now(),
                self.settings.timestamp_tolerance_secs(),
            )
            .inspect_err(|error| log_rejection(envelope, error))?;
        } else {
            warn!(
                target: DISPATCH_TARGET,
                request_id = envelope.request.request_id.as_str(),
                "timestamp verification skipped; replay protection is disabled"
            );
        }
        Ok(())
    }

    fn invoke(
        &self,
        event: LifecycleEvent,
        turn: &H::TurnContext,
        envelope: &RequestEnvelope,
        response: &mut Response,
    ) -> Result<(), DispatchError> {
        let RequestEnvelope {
            request,
            session,
            context,
            ..
        } = envelope;
        let outcome = match event {
            LifecycleEvent::SessionStarted => self
                .handler
                .on_session_started(turn, request, session, context, response),
            LifecycleEvent::Launch => self
                .handler
                .on_launch(turn, request, session, context, response),
            LifecycleEvent::Intent => self
                .handler
                .on_intent(turn, request, session, context, response),
            LifecycleEvent::SessionEnded => self
                .handler
                .on_session_ended(turn, request, session, context, response),
        };
        outcome.map_err(|source| {
            warn!(
                target: DISPATCH_TARGET,
                event = %event,
                error = %source,
                "handler failed"
            );
            DispatchError::handler_failure(event, source)
        })
    }
}

fn log_rejection(envelope: &RequestEnvelope, error: &DispatchError) {
    warn!(
        target: DISPATCH_TARGET,
        request_id = envelope.request.request_id.as_str(),
        kind = %error.kind(),
        %error,
        "request rejected"
    );
}
