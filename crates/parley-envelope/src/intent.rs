//! Intents, slots, and entity resolution data.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Resolution status code reported when a slot value matched an entity.
pub const RESOLUTION_SUCCESS_MATCH: &str = "ER_SUCCESS_MATCH";

/// Whether the user confirmed an intent or slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfirmationStatus {
    /// No confirmation was requested or given.
    #[default]
    None,
    /// The user confirmed.
    Confirmed,
    /// The user denied.
    Denied,
}

/// Recognised user goal with its named parameters.
///
/// Intents are also sent back in dialog directives as `updatedIntent`, so the
/// type serializes as well as it decodes.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    /// Intent name as declared in the interaction model.
    pub name: String,
    /// Confirmation state of the whole intent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation_status: Option<ConfirmationStatus>,
    /// Slots keyed by slot name.
    #[serde(default)]
    pub slots: BTreeMap<String, IntentSlot>,
}

impl Intent {
    /// Creates an intent with no slots.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Adds or replaces a slot, keyed by its name.
    #[must_use]
    pub fn with_slot(mut self, slot: IntentSlot) -> Self {
        self.slots.insert(slot.name.clone(), slot);
        self
    }

    /// Looks up a slot by name.
    #[must_use]
    pub fn slot(&self, name: &str) -> Option<&IntentSlot> {
        self.slots.get(name)
    }

    /// Raw spoken value of a slot, if the slot exists and was filled.
    #[must_use]
    pub fn slot_value(&self, name: &str) -> Option<&str> {
        self.slot(name).and_then(|slot| slot.value.as_deref())
    }
}

/// One named parameter of an intent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentSlot {
    /// Slot name.
    pub name: String,
    /// Spoken value; absent while the slot is unfilled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Confirmation state of the slot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation_status: Option<ConfirmationStatus>,
    /// Identifier of the slot value, when supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Entity resolution results for the spoken value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolutions: Option<Resolutions>,
}

impl IntentSlot {
    /// Creates a filled slot.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
            ..Self::default()
        }
    }

    /// First canonical value from an authority that reported a match.
    #[must_use]
    pub fn resolved_value(&self) -> Option<&SlotValue> {
        self.resolutions
            .as_ref()?
            .resolutions_per_authority
            .iter()
            .filter(|authority| authority.is_match())
            .find_map(|authority| authority.values.first())
            .map(|resolution| &resolution.value)
    }
}

/// Entity resolution results grouped by authority.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolutions {
    /// One entry per resolving authority, in platform order.
    #[serde(default)]
    pub resolutions_per_authority: Vec<Authority>,
}

/// Resolution candidates offered by a single authority.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Authority {
    /// Authority identifier, usually naming the slot type.
    pub authority: String,
    /// Outcome of the resolution attempt.
    #[serde(default)]
    pub status: ResolutionStatus,
    /// Candidate canonical values, best first.
    #[serde(default)]
    pub values: Vec<ResolutionValue>,
}

impl Authority {
    /// `true` when the authority matched the spoken value.
    #[must_use]
    pub fn is_match(&self) -> bool {
        self.status.code == RESOLUTION_SUCCESS_MATCH
    }
}

/// Status code of a resolution attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResolutionStatus {
    /// Code such as `ER_SUCCESS_MATCH` or `ER_SUCCESS_NO_MATCH`.
    pub code: String,
}

/// Wrapper around one canonical candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResolutionValue {
    /// The canonical value.
    pub value: SlotValue,
}

/// Canonical name and identifier of a resolved slot value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SlotValue {
    /// Canonical name.
    pub name: String,
    /// Canonical identifier.
    pub id: String,
}
