//! Device and platform state passed through to handlers.
//!
//! The dispatcher never inspects or mutates these values. Keys use the
//! platform's capitalised interface names (`AudioPlayer`, `Display`, `System`).

use serde::{Deserialize, Serialize};

use crate::request::{Application, User};

/// Snapshot of the requesting device and platform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Context {
    /// Audio playback state of the device.
    #[serde(rename = "AudioPlayer", default, skip_serializing_if = "Option::is_none")]
    pub audio_player: Option<AudioPlayerState>,
    /// Display state of the device.
    #[serde(rename = "Display", default, skip_serializing_if = "Option::is_none")]
    pub display: Option<DisplayState>,
    /// Platform system information.
    #[serde(rename = "System", default)]
    pub system: SystemState,
}

impl Context {
    /// `true` when the device advertised the audio player interface.
    #[must_use]
    pub fn supports_audio_player(&self) -> bool {
        self.system.device.supported_interfaces.audio_player.is_some()
    }

    /// `true` when the device advertised the display interface.
    #[must_use]
    pub fn supports_display(&self) -> bool {
        self.system.device.supported_interfaces.display.is_some()
    }
}

/// Audio player activity reported by the device.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioPlayerState {
    /// Activity such as `PLAYING`, `PAUSED` or `IDLE`.
    #[serde(default)]
    pub player_activity: String,
    /// Token of the current stream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Playback offset of the current stream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset_in_milliseconds: Option<u64>,
}

/// Display state reported by the device.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DisplayState {
    /// Token of the template currently rendered.
    #[serde(default)]
    pub token: String,
}

/// Platform system information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemState {
    /// Application the request is addressed to.
    #[serde(default)]
    pub application: Application,
    /// User issuing the request.
    #[serde(default)]
    pub user: User,
    /// Requesting device.
    #[serde(default)]
    pub device: Device,
    /// Base URL for follow-up platform API calls.
    #[serde(default)]
    pub api_endpoint: String,
    /// Bearer token for follow-up platform API calls.
    #[serde(default)]
    pub api_access_token: String,
}

/// Requesting device.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    /// Platform-scoped device identifier.
    #[serde(default)]
    pub device_id: String,
    /// Interfaces the device supports.
    #[serde(default)]
    pub supported_interfaces: SupportedInterfaces,
}

/// Interfaces advertised by a device. Presence of a key signals support.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SupportedInterfaces {
    /// Present when the device can play audio streams.
    #[serde(rename = "AudioPlayer", default, skip_serializing_if = "Option::is_none")]
    pub audio_player: Option<AudioPlayerInterface>,
    /// Present when the device has a screen.
    #[serde(rename = "Display", default, skip_serializing_if = "Option::is_none")]
    pub display: Option<DisplayInterface>,
    /// Present when the device can launch video.
    #[serde(rename = "VideoApp", default, skip_serializing_if = "Option::is_none")]
    pub video_app: Option<VideoAppInterface>,
}

/// Marker for audio player support.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AudioPlayerInterface {}

/// Marker for video app support.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct VideoAppInterface {}

/// Display capabilities of a device.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayInterface {
    /// Template version the device renders.
    #[serde(default)]
    pub template_version: String,
    /// Markup version the device renders.
    #[serde(default)]
    pub markup_version: String,
}
