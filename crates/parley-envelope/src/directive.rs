//! Device directives appended to a response.
//!
//! Every directive struct carries a typed `type` discriminator whose values
//! are disjoint across variants, so an encoded directive list decodes back
//! into the same variants in the same order.

use serde::{Deserialize, Serialize};

use crate::display::DisplayTemplate;
use crate::intent::Intent;

/// One device instruction.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Directive {
    /// Audio stream control.
    AudioPlayer(AudioPlayerDirective),
    /// Video playback.
    VideoApp(VideoAppDirective),
    /// Slot elicitation or confirmation.
    Dialog(DialogDirective),
    /// Hands the next dialog turn to the platform.
    Delegate(DelegateDirective),
    /// Screen template rendering.
    Display(DisplayDirective),
}

impl From<AudioPlayerDirective> for Directive {
    fn from(directive: AudioPlayerDirective) -> Self {
        Self::AudioPlayer(directive)
    }
}

impl From<VideoAppDirective> for Directive {
    fn from(directive: VideoAppDirective) -> Self {
        Self::VideoApp(directive)
    }
}

impl From<DialogDirective> for Directive {
    fn from(directive: DialogDirective) -> Self {
        Self::Dialog(directive)
    }
}

impl From<DelegateDirective> for Directive {
    fn from(directive: DelegateDirective) -> Self {
        Self::Delegate(directive)
    }
}

impl From<DisplayDirective> for Directive {
    fn from(directive: DisplayDirective) -> Self {
        Self::Display(directive)
    }
}

/// Audio player directive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum AudioPlayerKind {
    /// Start or enqueue a stream.
    #[serde(rename = "AudioPlayer.Play")]
    Play,
    /// Stop the current stream.
    #[serde(rename = "AudioPlayer.Stop")]
    Stop,
    /// Clear the playback queue.
    #[serde(rename = "AudioPlayer.ClearQueue")]
    ClearQueue,
}

/// How a new stream interacts with the playback queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayBehavior {
    /// Stop current playback and replace the queue.
    ReplaceAll,
    /// Append to the end of the queue.
    Enqueue,
    /// Replace everything queued after the current stream.
    ReplaceEnqueued,
}

/// Which part of the queue a clear directive removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClearBehavior {
    /// Keep the current stream, drop the rest.
    ClearEnqueued,
    /// Stop the current stream and drop the rest.
    ClearAll,
}

/// Audio stream control.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioPlayerDirective {
    /// Directive type.
    #[serde(rename = "type")]
    pub kind: AudioPlayerKind,
    /// Queue behaviour for `AudioPlayer.Play`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub play_behavior: Option<PlayBehavior>,
    /// Stream to play for `AudioPlayer.Play`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_item: Option<AudioItem>,
    /// Queue behaviour for `AudioPlayer.ClearQueue`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clear_behavior: Option<ClearBehavior>,
}

/// Playable audio item.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AudioItem {
    /// The stream to play.
    pub stream: Stream,
}

/// Audio stream definition.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stream {
    /// Opaque token identifying the stream in later events.
    pub token: String,
    /// HTTPS location of the audio.
    pub url: String,
    /// Position at which playback starts.
    pub offset_in_milliseconds: u64,
    /// Token of the stream expected to be playing, for `ENQUEUE`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_previous_token: Option<String>,
}

/// Video directive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum VideoAppKind {
    /// Launch the video app with an item.
    #[serde(rename = "VideoApp.Launch")]
    Launch,
}

/// Video playback.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoAppDirective {
    /// Directive type.
    #[serde(rename = "type")]
    pub kind: VideoAppKind,
    /// Video to play.
    pub video_item: VideoItem,
}

/// Video file with optional metadata.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VideoItem {
    /// HTTPS location of the video.
    pub source: String,
    /// Title information shown during playback.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<VideoMetadata>,
}

/// Title information for a video item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct VideoMetadata {
    /// Video title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Video subtitle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
}

/// Dialog directive types other than delegation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum DialogKind {
    /// Ask the user for a slot value.
    #[serde(rename = "Dialog.ElicitSlot")]
    ElicitSlot,
    /// Ask the user to confirm a slot value.
    #[serde(rename = "Dialog.ConfirmSlot")]
    ConfirmSlot,
    /// Ask the user to confirm the whole intent.
    #[serde(rename = "Dialog.ConfirmIntent")]
    ConfirmIntent,
}

/// Slot elicitation or confirmation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogDirective {
    /// Directive type.
    #[serde(rename = "type")]
    pub kind: DialogKind,
    /// Slot to ask for, for `Dialog.ElicitSlot`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot_to_elicit: Option<String>,
    /// Slot to confirm, for `Dialog.ConfirmSlot`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot_to_confirm: Option<String>,
    /// Intent state to continue the dialog with.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_intent: Option<Intent>,
}

/// Delegation directive type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum DelegateKind {
    /// Let the platform choose the next dialog step.
    #[serde(rename = "Dialog.Delegate")]
    Delegate,
}

/// Hands the next dialog turn to the platform.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DelegateDirective {
    /// Directive type.
    #[serde(rename = "type")]
    pub kind: DelegateKind,
    /// Intent state to continue the dialog with.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_intent: Option<Intent>,
}

/// Display directive type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum DisplayKind {
    /// Render a screen template.
    #[serde(rename = "Display.RenderTemplate")]
    RenderTemplate,
}

/// Screen template rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DisplayDirective {
    /// Directive type.
    #[serde(rename = "type")]
    pub kind: DisplayKind,
    /// Template to render.
    pub template: DisplayTemplate,
}
