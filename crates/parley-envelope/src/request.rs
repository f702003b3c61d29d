//! Inbound request envelope.
//!
//! Field names follow the platform's camelCase wire format. The envelope is
//! decoded once per turn and handed to the dispatcher by reference.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::context::Context;
use crate::intent::Intent;

/// Request type discriminator for a launch without a specific goal.
pub const LAUNCH_REQUEST: &str = "LaunchRequest";
/// Request type discriminator for a recognised intent.
pub const INTENT_REQUEST: &str = "IntentRequest";
/// Request type discriminator sent when the platform closes a session.
pub const SESSION_ENDED_REQUEST: &str = "SessionEndedRequest";

/// Top-level payload sent by the platform for one user interaction.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RequestEnvelope {
    /// Protocol version declared by the platform.
    #[serde(default)]
    pub version: String,
    /// Conversational session the request belongs to.
    #[serde(default)]
    pub session: Session,
    /// The interaction itself.
    pub request: Request,
    /// Device and platform state at the time of the request.
    #[serde(default)]
    pub context: Context,
}

impl RequestEnvelope {
    /// Decodes an envelope from raw JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns the underlying decoder error when the payload is not a valid
    /// envelope.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Application identifier presented by the session.
    #[must_use]
    pub fn application_id(&self) -> &str {
        self.session.application.application_id.as_str()
    }
}

/// Session state tracked by the platform across turns.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// `true` on the first request of a session.
    #[serde(default)]
    pub new: bool,
    /// Platform-assigned session identifier.
    #[serde(default)]
    pub session_id: String,
    /// Attributes persisted by earlier responses in this session.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub attributes: BTreeMap<String, Value>,
    /// The user talking to the skill.
    #[serde(default)]
    pub user: User,
    /// The skill the request is addressed to.
    #[serde(default)]
    pub application: Application,
}

impl Session {
    /// Looks up a persisted session attribute.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }
}

/// Reads an explicit `null` attribute map as empty.
fn null_as_empty<'de, D>(deserializer: D) -> Result<BTreeMap<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<BTreeMap<String, Value>>::deserialize(deserializer)?.unwrap_or_default())
}

/// User identity attached to a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Platform-scoped user identifier.
    #[serde(default)]
    pub user_id: String,
    /// Token for a linked account, present once the user linked one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

/// Application identity attached to a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    /// Application identifier checked against configuration.
    #[serde(default)]
    pub application_id: String,
}

/// Classification of a request's type discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// `LaunchRequest`.
    Launch,
    /// `IntentRequest`.
    Intent,
    /// `SessionEndedRequest`.
    SessionEnded,
    /// Any discriminator this crate does not route.
    Other,
}

impl RequestKind {
    /// Classifies a raw discriminator. Matching is exact.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            LAUNCH_REQUEST => Self::Launch,
            INTENT_REQUEST => Self::Intent,
            SESSION_ENDED_REQUEST => Self::SessionEnded,
            _ => Self::Other,
        }
    }
}

/// Progress of a multi-turn dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DialogState {
    /// First turn of the dialog.
    Started,
    /// The dialog is collecting slots.
    InProgress,
    /// Every required slot is filled and confirmed.
    Completed,
}

/// The interaction carried by an envelope.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    /// Locale of the user, such as `en-GB`.
    #[serde(default)]
    pub locale: String,
    /// ISO 8601 time at which the platform issued the request.
    #[serde(default)]
    pub timestamp: String,
    /// Raw type discriminator; see [`Request::kind`].
    #[serde(rename = "type")]
    pub request_type: String,
    /// Platform-assigned request identifier.
    #[serde(default)]
    pub request_id: String,
    /// Dialog progress, present for dialog-managed intents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialog_state: Option<DialogState>,
    /// Recognised intent, present only on `IntentRequest`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,
    /// Name carried by some platform event requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Request {
    /// Classifies the request type discriminator.
    #[must_use]
    pub fn kind(&self) -> RequestKind {
        RequestKind::parse(&self.request_type)
    }
}
