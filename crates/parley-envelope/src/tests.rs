//! Wire format tests for the envelope types.

use rstest::rstest;
use serde_json::{Value, json};

use super::*;

const LAUNCH_ENVELOPE: &str = r#"{
    "version": "1.0",
    "session": {
        "new": true,
        "sessionId": "amzn1.echo-api.session.1",
        "attributes": {"visits": 3, "profile": {"name": "Ada"}},
        "user": {"userId": "amzn1.ask.account.1"},
        "application": {"applicationId": "amzn1.ask.skill.1"}
    },
    "request": {
        "type": "LaunchRequest",
        "requestId": "amzn1.echo-api.request.1",
        "timestamp": "2026-10-14T09:00:00Z",
        "locale": "en-GB"
    },
    "context": {
        "System": {
            "application": {"applicationId": "amzn1.ask.skill.1"},
            "user": {"userId": "amzn1.ask.account.1"},
            "device": {"deviceId": "amzn1.ask.device.1", "supportedInterfaces": {}},
            "apiEndpoint": "https://api.eu.amazonalexa.com",
            "apiAccessToken": "token"
        }
    }
}"#;

fn encode(envelope: &ResponseEnvelope) -> Value {
    serde_json::to_value(envelope).expect("encode envelope")
}

#[test]
fn decodes_launch_envelope() {
    let envelope = RequestEnvelope::from_slice(LAUNCH_ENVELOPE.as_bytes()).expect("decode");

    assert!(envelope.session.new);
    assert_eq!(envelope.application_id(), "amzn1.ask.skill.1");
    assert_eq!(envelope.request.kind(), RequestKind::Launch);
    assert_eq!(envelope.request.locale, "en-GB");
    assert!(envelope.request.intent.is_none());
    assert_eq!(envelope.session.attribute("visits"), Some(&json!(3)));
    assert_eq!(
        envelope.session.attribute("profile"),
        Some(&json!({"name": "Ada"}))
    );
}

#[test]
fn missing_session_decodes_with_empty_application_id() {
    let envelope: RequestEnvelope = serde_json::from_str(
        r#"{"version":"1.0","request":{"type":"AudioPlayer.PlaybackStarted","timestamp":"2026-10-14T09:00:00Z"}}"#,
    )
    .expect("decode");

    assert_eq!(envelope.application_id(), "");
    assert!(!envelope.session.new);
    assert_eq!(envelope.request.kind(), RequestKind::Other);
}

#[rstest]
#[case::null(json!(null))]
#[case::empty(json!({}))]
fn null_or_empty_session_attributes_decode_as_empty_map(#[case] attributes: Value) {
    let envelope: RequestEnvelope = serde_json::from_value(json!({
        "version": "1.0",
        "session": {
            "new": false,
            "attributes": attributes,
            "application": {"applicationId": "amzn1.ask.skill.1"}
        },
        "request": {"type": "LaunchRequest", "timestamp": "2026-10-14T09:00:00Z"}
    }))
    .expect("decode");

    assert!(envelope.session.attributes.is_empty());
    assert_eq!(envelope.application_id(), "amzn1.ask.skill.1");
}

#[test]
fn decodes_intent_request_with_dialog_state() {
    let envelope: RequestEnvelope = serde_json::from_value(json!({
        "version": "1.0",
        "session": {"new": false, "application": {"applicationId": "amzn1.ask.skill.1"}},
        "request": {
            "type": "IntentRequest",
            "timestamp": "2026-10-14T09:00:00Z",
            "dialogState": "IN_PROGRESS",
            "intent": {"name": "BookIntent", "slots": {"City": {"name": "City", "value": "Leeds"}}}
        }
    }))
    .expect("decode");

    assert_eq!(envelope.request.kind(), RequestKind::Intent);
    assert_eq!(envelope.request.dialog_state, Some(DialogState::InProgress));
    let intent = envelope.request.intent.expect("intent");
    assert_eq!(intent.slot_value("City"), Some("Leeds"));
}

#[rstest]
#[case::launch("LaunchRequest", RequestKind::Launch)]
#[case::intent("IntentRequest", RequestKind::Intent)]
#[case::ended("SessionEndedRequest", RequestKind::SessionEnded)]
#[case::audio_event("AudioPlayer.PlaybackStarted", RequestKind::Other)]
#[case::wrong_case("launchrequest", RequestKind::Other)]
#[case::empty("", RequestKind::Other)]
fn classifies_request_types(#[case] raw: &str, #[case] expected: RequestKind) {
    assert_eq!(RequestKind::parse(raw), expected);
}

#[test]
fn encodes_speech_card_and_directive_without_absent_members() {
    let mut response = Response::new();
    response.set_output_text("Hello");
    response.set_simple_card("Welcome", "Welcome text");
    response.add_audio_player(
        PlayBehavior::ReplaceAll,
        "track-1",
        "https://cdn.example.com/1.mp3",
        0,
    );
    let encoded = encode(&ResponseEnvelope::new(response));

    assert_eq!(
        encoded,
        json!({
            "version": "1.0",
            "response": {
                "outputSpeech": {"type": "PlainText", "text": "Hello"},
                "card": {"type": "Simple", "title": "Welcome", "content": "Welcome text"},
                "directives": [{
                    "type": "AudioPlayer.Play",
                    "playBehavior": "REPLACE_ALL",
                    "audioItem": {"stream": {
                        "token": "track-1",
                        "url": "https://cdn.example.com/1.mp3",
                        "offsetInMilliseconds": 0
                    }}
                }]
            }
        })
    );
    let body = encoded.get("response").expect("response body");
    assert!(body.get("reprompt").is_none());
    assert!(body.get("shouldEndSession").is_none());
    assert!(encoded.get("sessionAttributes").is_none());
}

#[test]
fn directive_order_survives_a_round_trip() {
    let mut response = Response::new();
    response.set_output_text("Hello");
    response.set_simple_card("Welcome", "Welcome text");
    response.add_delegate(Some(Intent::new("BookIntent")));
    response.add_audio_player(PlayBehavior::Enqueue, "t2", "https://a/2.mp3", 1500);
    response.add_elicit_slot("City", None);
    response.add_display_template(
        DisplayTemplate::new("BodyTemplate1", "tpl").with_title("Title"),
    );
    response.add_video_app("https://v/1.mp4", "Clip", "");
    let envelope = ResponseEnvelope::new(response);

    let bytes = envelope.to_vec().expect("encode");
    let decoded: ResponseEnvelope = serde_json::from_slice(&bytes).expect("decode");

    assert_eq!(decoded, envelope);
    assert!(matches!(
        decoded.response.directives.as_slice(),
        [
            Directive::Delegate(_),
            Directive::AudioPlayer(_),
            Directive::Dialog(_),
            Directive::Display(_),
            Directive::VideoApp(_)
        ]
    ));
}

#[test]
fn ssml_speech_and_reprompt_use_markup_tag() {
    let mut response = Response::new();
    response.set_output_ssml("<speak>Hi</speak>");
    response.set_reprompt_text("Anything else?");
    response.set_end_session(false);

    assert_eq!(
        serde_json::to_value(&response).expect("encode"),
        json!({
            "outputSpeech": {"type": "SSML", "ssml": "<speak>Hi</speak>"},
            "reprompt": {"outputSpeech": {"type": "PlainText", "text": "Anything else?"}},
            "shouldEndSession": false
        })
    );
}

#[rstest]
#[case::link_account(
    {
        let mut response = Response::new();
        response.set_link_account_card();
        response
    },
    json!({"type": "LinkAccount"})
)]
#[case::standard(
    {
        let mut response = Response::new();
        response.set_standard_card("Forecast", "Sunny", "https://i/s.png", "https://i/l.png");
        response
    },
    json!({
        "type": "Standard",
        "title": "Forecast",
        "text": "Sunny",
        "image": {"smallImageUrl": "https://i/s.png", "largeImageUrl": "https://i/l.png"}
    })
)]
#[case::permissions(
    {
        let mut response = Response::new();
        response.set_permissions_consent_card(["read::alexa:device:all:address"]);
        response
    },
    json!({
        "type": "AskForPermissionsConsent",
        "permissions": ["read::alexa:device:all:address"]
    })
)]
fn encodes_card_kinds(#[case] response: Response, #[case] expected: Value) {
    let encoded = serde_json::to_value(&response).expect("encode");
    assert_eq!(encoded.get("card"), Some(&expected));
}

#[test]
fn dialog_directives_carry_updated_intent() {
    let intent = Intent::new("BookIntent").with_slot(IntentSlot::new("City", "Leeds"));
    let mut response = Response::new();
    response.add_confirm_slot("City", Some(intent));
    response.add_confirm_intent(None);

    let encoded = serde_json::to_value(&response).expect("encode");
    assert_eq!(
        encoded.get("directives"),
        Some(&json!([
            {
                "type": "Dialog.ConfirmSlot",
                "slotToConfirm": "City",
                "updatedIntent": {
                    "name": "BookIntent",
                    "slots": {"City": {"name": "City", "value": "Leeds"}}
                }
            },
            {"type": "Dialog.ConfirmIntent"}
        ]))
    );
}

#[test]
fn display_template_encodes_nested_images_and_text() {
    let template = DisplayTemplate::new("BodyTemplate2", "recipe")
        .with_back_button(BackButton::Hidden)
        .with_title("Pancakes")
        .with_image(
            DisplayImage::new("A stack of pancakes").with_source(
                ImageSource::new("https://i/p.png")
                    .with_size(ImageSize::XSmall)
                    .with_dimensions(480, 320),
            ),
        )
        .with_text_content(
            TextContent::new(TextField::plain("Serves four"))
                .with_secondary(TextField::rich("<b>20 minutes</b>")),
        );
    let mut response = Response::new();
    response.add_display_template(template);

    let encoded = serde_json::to_value(&response).expect("encode");
    assert_eq!(
        encoded.get("directives"),
        Some(&json!([{
            "type": "Display.RenderTemplate",
            "template": {
                "type": "BodyTemplate2",
                "token": "recipe",
                "backButton": "HIDDEN",
                "title": "Pancakes",
                "image": {
                    "contentDescription": "A stack of pancakes",
                    "sources": [{
                        "url": "https://i/p.png",
                        "size": "X_SMALL",
                        "widthPixels": 480,
                        "heightPixels": 320
                    }]
                },
                "textContent": {
                    "primaryText": {"type": "PlainText", "text": "Serves four"},
                    "secondaryText": {"type": "RichText", "text": "<b>20 minutes</b>"}
                }
            }
        }]))
    );
}

#[test]
fn staged_attributes_move_into_the_envelope() {
    let request = RequestEnvelope::from_slice(LAUNCH_ENVELOPE.as_bytes()).expect("decode");
    let mut response = Response::new();
    response.extend_session_attributes(request.session.attributes.clone());
    response.set_session_attribute("visits", 4);
    let envelope = ResponseEnvelope::new(response);

    assert!(envelope.response.session_attributes().is_none());
    assert_eq!(
        encode(&envelope).get("sessionAttributes"),
        Some(&json!({"visits": 4, "profile": {"name": "Ada"}}))
    );
}
