//! Response builder operations.
//!
//! Singular members (speech, card, reprompt, end-session flag) are replaced
//! wholesale on every call. Directives accumulate in call order, which is
//! the order the device executes them in. None of these operations fail.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::directive::{
    AudioItem, AudioPlayerDirective, AudioPlayerKind, ClearBehavior, DelegateDirective,
    DelegateKind, DialogDirective, DialogKind, Directive, DisplayDirective, DisplayKind,
    PlayBehavior, Stream, VideoAppDirective, VideoAppKind, VideoItem, VideoMetadata,
};
use crate::display::DisplayTemplate;
use crate::intent::Intent;
use crate::response::{Card, Image, OutputSpeech, Reprompt, Response};

impl Response {
    /// Speaks plain text, replacing any earlier speech.
    pub fn set_output_text(&mut self, text: impl Into<String>) {
        self.output_speech = Some(OutputSpeech::plain_text(text));
    }

    /// Speaks an SSML document, replacing any earlier speech.
    pub fn set_output_ssml(&mut self, ssml: impl Into<String>) {
        self.output_speech = Some(OutputSpeech::ssml(ssml));
    }

    /// Shows a simple card.
    pub fn set_simple_card(&mut self, title: impl Into<String>, content: impl Into<String>) {
        self.card = Some(Card::Simple {
            title: title.into(),
            content: content.into(),
        });
    }

    /// Shows a standard card with small and large image variants.
    pub fn set_standard_card(
        &mut self,
        title: impl Into<String>,
        text: impl Into<String>,
        small_image_url: impl Into<String>,
        large_image_url: impl Into<String>,
    ) {
        self.card = Some(Card::Standard {
            title: title.into(),
            text: text.into(),
            image: Some(Image {
                small_image_url: Some(small_image_url.into()),
                large_image_url: Some(large_image_url.into()),
            }),
        });
    }

    /// Shows the account linking card.
    pub fn set_link_account_card(&mut self) {
        self.card = Some(Card::LinkAccount);
    }

    /// Shows a card asking for the given permission scopes.
    pub fn set_permissions_consent_card<I, S>(&mut self, permissions: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.card = Some(Card::AskForPermissionsConsent {
            permissions: permissions.into_iter().map(Into::into).collect(),
        });
    }

    /// Reprompts with plain text, replacing any earlier reprompt.
    pub fn set_reprompt_text(&mut self, text: impl Into<String>) {
        self.set_reprompt(OutputSpeech::plain_text(text));
    }

    /// Reprompts with an SSML document, replacing any earlier reprompt.
    pub fn set_reprompt_ssml(&mut self, ssml: impl Into<String>) {
        self.set_reprompt(OutputSpeech::ssml(ssml));
    }

    fn set_reprompt(&mut self, speech: OutputSpeech) {
        match self.reprompt.as_mut() {
            Some(reprompt) => reprompt.output_speech = speech,
            None => {
                self.reprompt = Some(Reprompt {
                    output_speech: speech,
                });
            }
        }
    }

    /// Explicitly ends (`true`) or keeps open (`false`) the session.
    pub const fn set_end_session(&mut self, end: bool) {
        self.should_end_session = Some(end);
    }

    /// Appends an already constructed directive.
    pub fn add_directive(&mut self, directive: impl Into<Directive>) {
        self.directives.push(directive.into());
    }

    /// Appends an `AudioPlayer.Play` directive.
    pub fn add_audio_player(
        &mut self,
        play_behavior: PlayBehavior,
        stream_token: impl Into<String>,
        url: impl Into<String>,
        offset_in_milliseconds: u64,
    ) {
        self.add_directive(AudioPlayerDirective {
            kind: AudioPlayerKind::Play,
            play_behavior: Some(play_behavior),
            audio_item: Some(AudioItem {
                stream: Stream {
                    token: stream_token.into(),
                    url: url.into(),
                    offset_in_milliseconds,
                    expected_previous_token: None,
                },
            }),
            clear_behavior: None,
        });
    }

    /// Appends an `AudioPlayer.Stop` directive.
    pub fn add_audio_player_stop(&mut self) {
        self.add_directive(AudioPlayerDirective {
            kind: AudioPlayerKind::Stop,
            play_behavior: None,
            audio_item: None,
            clear_behavior: None,
        });
    }

    /// Appends an `AudioPlayer.ClearQueue` directive.
    pub fn add_audio_player_clear_queue(&mut self, clear_behavior: ClearBehavior) {
        self.add_directive(AudioPlayerDirective {
            kind: AudioPlayerKind::ClearQueue,
            play_behavior: None,
            audio_item: None,
            clear_behavior: Some(clear_behavior),
        });
    }

    /// Appends a `VideoApp.Launch` directive. Empty title and subtitle are
    /// left out of the metadata.
    pub fn add_video_app(
        &mut self,
        source: impl Into<String>,
        title: impl Into<String>,
        subtitle: impl Into<String>,
    ) {
        let title = non_empty(title.into());
        let subtitle = non_empty(subtitle.into());
        let metadata = (title.is_some() || subtitle.is_some())
            .then_some(VideoMetadata { title, subtitle });
        self.add_directive(VideoAppDirective {
            kind: VideoAppKind::Launch,
            video_item: VideoItem {
                source: source.into(),
                metadata,
            },
        });
    }

    /// Appends a `Dialog.ElicitSlot` directive.
    pub fn add_elicit_slot(&mut self, slot: impl Into<String>, updated_intent: Option<Intent>) {
        self.add_directive(DialogDirective {
            kind: DialogKind::ElicitSlot,
            slot_to_elicit: Some(slot.into()),
            slot_to_confirm: None,
            updated_intent,
        });
    }

    /// Appends a `Dialog.ConfirmSlot` directive.
    pub fn add_confirm_slot(&mut self, slot: impl Into<String>, updated_intent: Option<Intent>) {
        self.add_directive(DialogDirective {
            kind: DialogKind::ConfirmSlot,
            slot_to_elicit: None,
            slot_to_confirm: Some(slot.into()),
            updated_intent,
        });
    }

    /// Appends a `Dialog.ConfirmIntent` directive.
    pub fn add_confirm_intent(&mut self, updated_intent: Option<Intent>) {
        self.add_directive(DialogDirective {
            kind: DialogKind::ConfirmIntent,
            slot_to_elicit: None,
            slot_to_confirm: None,
            updated_intent,
        });
    }

    /// Appends a `Dialog.Delegate` directive.
    pub fn add_delegate(&mut self, updated_intent: Option<Intent>) {
        self.add_directive(DelegateDirective {
            kind: DelegateKind::Delegate,
            updated_intent,
        });
    }

    /// Appends a `Display.RenderTemplate` directive.
    pub fn add_display_template(&mut self, template: DisplayTemplate) {
        self.add_directive(DisplayDirective {
            kind: DisplayKind::RenderTemplate,
            template,
        });
    }

    /// Stages a session attribute to persist into the next turn.
    pub fn set_session_attribute(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.session_attributes
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
    }

    /// Stages several session attributes, typically the ones the request
    /// arrived with.
    pub fn extend_session_attributes<I>(&mut self, attributes: I)
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        let mut attributes = attributes.into_iter().peekable();
        if attributes.peek().is_some() {
            self.session_attributes
                .get_or_insert_with(BTreeMap::new)
                .extend(attributes);
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn second_speech_call_replaces_first() {
        let mut response = Response::new();
        response.set_output_text("Hello");
        response.set_output_ssml("<speak>Hi</speak>");

        assert_eq!(
            response.output_speech,
            Some(OutputSpeech::ssml("<speak>Hi</speak>"))
        );
    }

    #[test]
    fn reprompt_is_allocated_lazily_and_replaced() {
        let mut response = Response::new();
        assert!(response.reprompt.is_none());

        response.set_reprompt_ssml("<speak>Still there?</speak>");
        response.set_reprompt_text("Still there?");

        let reprompt = response.reprompt.expect("reprompt");
        assert_eq!(reprompt.output_speech, OutputSpeech::plain_text("Still there?"));
    }

    #[test]
    fn card_setters_replace_each_other() {
        let mut response = Response::new();
        response.set_simple_card("Welcome", "Welcome text");
        response.set_link_account_card();

        assert_eq!(response.card, Some(Card::LinkAccount));
    }

    #[test]
    fn directives_accumulate_in_call_order() {
        let mut response = Response::new();
        response.add_audio_player(PlayBehavior::ReplaceAll, "t1", "https://a/1.mp3", 0);
        response.add_delegate(None);
        response.add_audio_player_stop();

        let kinds: Vec<&str> = response
            .directives
            .iter()
            .map(|directive| match directive {
                Directive::AudioPlayer(_) => "audio",
                Directive::Delegate(_) => "delegate",
                Directive::VideoApp(_) => "video",
                Directive::Dialog(_) => "dialog",
                Directive::Display(_) => "display",
            })
            .collect();
        assert_eq!(kinds, ["audio", "delegate", "audio"]);
    }

    #[test]
    fn video_metadata_is_omitted_when_blank() {
        let mut response = Response::new();
        response.add_video_app("https://v/1.mp4", "", "");

        let encoded = serde_json::to_value(&response).expect("encode");
        assert_eq!(
            encoded,
            json!({
                "directives": [
                    {"type": "VideoApp.Launch", "videoItem": {"source": "https://v/1.mp4"}}
                ]
            })
        );
    }

    #[test]
    fn session_attributes_are_not_part_of_the_body() {
        let mut response = Response::new();
        response.set_session_attribute("count", 2);

        let encoded = serde_json::to_value(&response).expect("encode");
        assert_eq!(encoded, json!({}));
        assert_eq!(
            response.session_attributes().and_then(|map| map.get("count")),
            Some(&json!(2))
        );
    }

    #[test]
    fn extending_with_nothing_stages_nothing() {
        let mut response = Response::new();
        response.extend_session_attributes(BTreeMap::<String, Value>::new());
        assert!(response.session_attributes().is_none());
    }
}
