//! Screen templates for devices with a display.

use serde::{Deserialize, Serialize};

/// Visibility of the on-screen back button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BackButton {
    /// Show the back button.
    #[default]
    Visible,
    /// Hide the back button.
    Hidden,
}

/// A renderable template such as `BodyTemplate1`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayTemplate {
    /// Template name.
    #[serde(rename = "type")]
    pub template_type: String,
    /// Token reported back when the user selects the template.
    pub token: String,
    /// Back button visibility.
    #[serde(default)]
    pub back_button: BackButton,
    /// Full-screen background image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<DisplayImage>,
    /// Title line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Foreground image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<DisplayImage>,
    /// Body text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_content: Option<TextContent>,
}

impl DisplayTemplate {
    /// Creates a bare template.
    #[must_use]
    pub fn new(template_type: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            template_type: template_type.into(),
            token: token.into(),
            back_button: BackButton::default(),
            background_image: None,
            title: None,
            image: None,
            text_content: None,
        }
    }

    /// Sets the title line.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets back button visibility.
    #[must_use]
    pub const fn with_back_button(mut self, back_button: BackButton) -> Self {
        self.back_button = back_button;
        self
    }

    /// Sets the background image.
    #[must_use]
    pub fn with_background_image(mut self, image: DisplayImage) -> Self {
        self.background_image = Some(image);
        self
    }

    /// Sets the foreground image.
    #[must_use]
    pub fn with_image(mut self, image: DisplayImage) -> Self {
        self.image = Some(image);
        self
    }

    /// Sets the body text.
    #[must_use]
    pub fn with_text_content(mut self, text: TextContent) -> Self {
        self.text_content = Some(text);
        self
    }
}

/// Image made of one or more sized sources.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayImage {
    /// Accessibility description.
    pub content_description: String,
    /// Candidate sources; the device picks the best fit.
    pub sources: Vec<ImageSource>,
}

impl DisplayImage {
    /// Creates an image with no sources.
    #[must_use]
    pub fn new(content_description: impl Into<String>) -> Self {
        Self {
            content_description: content_description.into(),
            sources: Vec::new(),
        }
    }

    /// Appends a source.
    #[must_use]
    pub fn with_source(mut self, source: ImageSource) -> Self {
        self.sources.push(source);
        self
    }
}

/// Size buckets for image sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImageSize {
    /// 480 x 320.
    XSmall,
    /// 720 x 480.
    Small,
    /// 960 x 640.
    Medium,
    /// 1200 x 800.
    Large,
    /// 1920 x 1280.
    XLarge,
}

/// One image file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSource {
    /// HTTPS location of the image.
    pub url: String,
    /// Size bucket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<ImageSize>,
    /// Width in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width_pixels: Option<u32>,
    /// Height in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_pixels: Option<u32>,
}

impl ImageSource {
    /// Creates an unsized source.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            size: None,
            width_pixels: None,
            height_pixels: None,
        }
    }

    /// Sets the size bucket.
    #[must_use]
    pub const fn with_size(mut self, size: ImageSize) -> Self {
        self.size = Some(size);
        self
    }

    /// Sets explicit pixel dimensions.
    #[must_use]
    pub const fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width_pixels = Some(width);
        self.height_pixels = Some(height);
        self
    }
}

/// Markup flavour of a text field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum TextKind {
    /// Unformatted text.
    #[default]
    PlainText,
    /// Text with display markup.
    RichText,
}

/// A single line of template text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TextField {
    /// Markup flavour.
    #[serde(rename = "type")]
    pub kind: TextKind,
    /// The text.
    pub text: String,
}

impl TextField {
    /// Plain text field.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            kind: TextKind::PlainText,
            text: text.into(),
        }
    }

    /// Rich text field.
    #[must_use]
    pub fn rich(text: impl Into<String>) -> Self {
        Self {
            kind: TextKind::RichText,
            text: text.into(),
        }
    }
}

/// Primary, secondary and tertiary template text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextContent {
    /// Main text.
    pub primary_text: TextField,
    /// Second line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_text: Option<TextField>,
    /// Third line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tertiary_text: Option<TextField>,
}

impl TextContent {
    /// Text content with only a primary line.
    #[must_use]
    pub const fn new(primary: TextField) -> Self {
        Self {
            primary_text: primary,
            secondary_text: None,
            tertiary_text: None,
        }
    }

    /// Sets the second line.
    #[must_use]
    pub fn with_secondary(mut self, text: TextField) -> Self {
        self.secondary_text = Some(text);
        self
    }

    /// Sets the third line.
    #[must_use]
    pub fn with_tertiary(mut self, text: TextField) -> Self {
        self.tertiary_text = Some(text);
        self
    }
}
