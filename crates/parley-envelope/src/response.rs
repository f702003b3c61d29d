//! Outbound response envelope.
//!
//! Optional members are omitted from the encoding when unset; the platform
//! rejects literal `null` values in several positions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::directive::Directive;

/// Protocol version written into every response envelope.
pub const PROTOCOL_VERSION: &str = "1.0";

/// Top-level payload returned to the platform.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    /// Protocol version, always [`PROTOCOL_VERSION`] for envelopes built here.
    pub version: String,
    /// Attributes the platform should hand back on the next turn.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_attributes: Option<BTreeMap<String, Value>>,
    /// The response body.
    pub response: Response,
}

impl ResponseEnvelope {
    /// Wraps a response, moving any staged session attributes into the
    /// envelope.
    #[must_use]
    pub fn new(mut response: Response) -> Self {
        let session_attributes = response.take_session_attributes();
        Self {
            version: PROTOCOL_VERSION.to_owned(),
            session_attributes,
            response,
        }
    }

    /// Encodes the envelope as JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns the encoder error when an attribute value cannot be encoded.
    pub fn to_vec(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

/// Response body assembled by handlers during one turn.
///
/// Use the builder methods rather than the fields where possible: they keep
/// the singular members replace-only and the directive list append-only.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    /// What the device should say.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    /// Card shown in the companion app.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    /// What the device says if the user stays silent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    /// Device instructions in execution order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<Directive>,
    /// Explicit session end flag; unset leaves the platform default.
    #[serde(
        rename = "shouldEndSession",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub should_end_session: Option<bool>,
    #[serde(skip)]
    pub(crate) session_attributes: Option<BTreeMap<String, Value>>,
}

impl Response {
    /// Creates an empty response.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Session attributes staged so far.
    #[must_use]
    pub const fn session_attributes(&self) -> Option<&BTreeMap<String, Value>> {
        self.session_attributes.as_ref()
    }

    /// Removes and returns the staged session attributes.
    pub const fn take_session_attributes(&mut self) -> Option<BTreeMap<String, Value>> {
        self.session_attributes.take()
    }
}

/// Speech in one of two mutually exclusive forms.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type")]
pub enum OutputSpeech {
    /// Plain text rendered by the platform's voice.
    PlainText {
        /// Text to speak.
        text: String,
    },
    /// Speech Synthesis Markup Language document.
    #[serde(rename = "SSML")]
    Ssml {
        /// SSML document, including the `<speak>` root.
        ssml: String,
    },
}

impl OutputSpeech {
    /// Plain text speech.
    #[must_use]
    pub fn plain_text(text: impl Into<String>) -> Self {
        Self::PlainText { text: text.into() }
    }

    /// SSML speech.
    #[must_use]
    pub fn ssml(ssml: impl Into<String>) -> Self {
        Self::Ssml { ssml: ssml.into() }
    }
}

/// Companion app card.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type")]
pub enum Card {
    /// Title and plain content.
    Simple {
        /// Card title.
        title: String,
        /// Card body.
        content: String,
    },
    /// Title, body text and an optional image.
    Standard {
        /// Card title.
        title: String,
        /// Card body.
        text: String,
        /// Image shown with the card.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        image: Option<Image>,
    },
    /// Prompts the user to link an account in the companion app.
    LinkAccount,
    /// Asks the user to grant the listed permissions.
    AskForPermissionsConsent {
        /// Permission scopes such as `read::alexa:device:all:address`.
        permissions: Vec<String>,
    },
}

/// Image URLs for a standard card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Image {
    /// Image for small screens.
    #[serde(
        rename = "smallImageUrl",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub small_image_url: Option<String>,
    /// Image for large screens.
    #[serde(
        rename = "largeImageUrl",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub large_image_url: Option<String>,
}

/// Speech used when the user does not answer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    /// Reprompt speech.
    pub output_speech: OutputSpeech,
}
