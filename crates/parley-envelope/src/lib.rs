//! Wire types for the voice platform webhook protocol.
//!
//! [`RequestEnvelope`] is what the platform sends for one user interaction;
//! [`ResponseEnvelope`] is what a skill sends back. Handlers populate the
//! inner [`Response`] through the builder methods in this crate, which keep
//! speech modes mutually exclusive and directives in append order.

mod builder;
mod context;
mod directive;
mod display;
mod intent;
mod request;
mod response;

pub use context::{
    AudioPlayerInterface, AudioPlayerState, Context, Device, DisplayInterface, DisplayState,
    SupportedInterfaces, SystemState, VideoAppInterface,
};
pub use directive::{
    AudioItem, AudioPlayerDirective, AudioPlayerKind, ClearBehavior, DelegateDirective,
    DelegateKind, DialogDirective, DialogKind, Directive, DisplayDirective, DisplayKind,
    PlayBehavior, Stream, VideoAppDirective, VideoAppKind, VideoItem, VideoMetadata,
};
pub use display::{
    BackButton, DisplayImage, DisplayTemplate, ImageSize, ImageSource, TextContent, TextField,
    TextKind,
};
pub use intent::{
    Authority, ConfirmationStatus, Intent, IntentSlot, RESOLUTION_SUCCESS_MATCH, ResolutionStatus,
    ResolutionValue, Resolutions, SlotValue,
};
pub use request::{
    Application, DialogState, INTENT_REQUEST, LAUNCH_REQUEST, Request, RequestEnvelope,
    RequestKind, SESSION_ENDED_REQUEST, Session, User,
};
pub use response::{Card, Image, OutputSpeech, PROTOCOL_VERSION, Reprompt, Response, ResponseEnvelope};

#[cfg(test)]
mod tests;
