//! Capability interface implemented by skill business logic.

use std::sync::Arc;

use parley_envelope::{Context, Request, Response, Session};

use crate::errors::HandlerError;

/// Lifecycle callbacks invoked by the dispatcher.
///
/// Every callback of one turn receives the same [`Response`], so a later
/// callback sees what an earlier one wrote. Returning an error aborts the
/// turn and discards the response.
pub trait RequestHandler: Send + Sync {
    /// Caller-supplied per-turn value, such as a cancellation token or a
    /// deadline. The dispatcher passes it to every callback untouched.
    type TurnContext: ?Sized;

    /// Called first on the opening request of a session.
    fn on_session_started(
        &self,
        turn: &Self::TurnContext,
        request: &Request,
        session: &Session,
        context: &Context,
        response: &mut Response,
    ) -> Result<(), HandlerError>;

    /// Called for `LaunchRequest`.
    fn on_launch(
        &self,
        turn: &Self::TurnContext,
        request: &Request,
        session: &Session,
        context: &Context,
        response: &mut Response,
    ) -> Result<(), HandlerError>;

    /// Called for `IntentRequest`.
    fn on_intent(
        &self,
        turn: &Self::TurnContext,
        request: &Request,
        session: &Session,
        context: &Context,
        response: &mut Response,
    ) -> Result<(), HandlerError>;

    /// Called for `SessionEndedRequest`.
    fn on_session_ended(
        &self,
        turn: &Self::TurnContext,
        request: &Request,
        session: &Session,
        context: &Context,
        response: &mut Response,
    ) -> Result<(), HandlerError>;
}

impl<T> RequestHandler for Arc<T>
where
    T: RequestHandler + ?Sized,
{
    type TurnContext = T::TurnContext;

    fn on_session_started(
        &self,
        turn: &Self::TurnContext,
        request: &Request,
        session: &Session,
        context: &Context,
        response: &mut Response,
    ) -> Result<(), HandlerError> {
        (**self).on_session_started(turn, request, session, context, response)
    }

    fn on_launch(
        &self,
        turn: &Self::TurnContext,
        request: &Request,
        session: &Session,
        context: &Context,
        response: &mut Response,
    ) -> Result<(), HandlerError> {
        (**self).on_launch(turn, request, session, context, response)
    }

    fn on_intent(
        &self,
        turn: &Self::TurnContext,
        request: &Request,
        session: &Session,
        context: &Context,
        response: &mut Response,
    ) -> Result<(), HandlerError> {
        (**self).on_intent(turn, request, session, context, response)
    }

    fn on_session_ended(
        &self,
        turn: &Self::TurnContext,
        request: &Request,
        session: &Session,
        context: &Context,
        response: &mut Response,
    ) -> Result<(), HandlerError> {
        (**self).on_session_ended(turn, request, session, context, response)
    }
}

/// Identifies a handler callback, mainly for logs and errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum LifecycleEvent {
    /// [`RequestHandler::on_session_started`].
    SessionStarted,
    /// [`RequestHandler::on_launch`].
    Launch,
    /// [`RequestHandler::on_intent`].
    Intent,
    /// [`RequestHandler::on_session_ended`].
    SessionEnded,
}
