//! Render descriptors and the renderer configuration payload.

use crate::domain::entities::gallery_options::{CaptionMode, Dimension};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

/// Transition style between slides.
pub const TRANSITION: &str = "slide";
/// Transition used for the first slide.
pub const INITIAL_TRANSITION: &str = "fade";
/// Transition duration in milliseconds.
pub const TRANSITION_SPEED_MS: u32 = 500;
/// Delay between slides in milliseconds.
pub const DELAY_TIME_MS: u32 = 4_000;
/// Thumbnail strip layout.
pub const THUMBNAIL_MODE: &str = "grid";

/// Kind of item shown in the slideshow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    #[default]
    Image,
    #[serde(alias = "youtube")]
    Video,
}

/// Per-item data for the slideshow, derived once from an attachment.
///
/// Field names on the wire follow the renderer's data format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderDescriptor {
    #[serde(rename = "url")]
    pub display_url: Option<String>,
    #[serde(rename = "big")]
    pub link_url: Option<String>,
    #[serde(rename = "thumb")]
    pub thumbnail_url: Option<String>,
    pub title: String,
    pub description: String,
    #[serde(rename = "type", default)]
    pub kind: MediaKind,
}

impl RenderDescriptor {
    /// An image descriptor showing and linking to `large`.
    pub fn image(
        large: Option<String>,
        thumb: Option<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            display_url: large.clone(),
            link_url: large,
            thumbnail_url: thumb,
            title: title.into(),
            description: description.into(),
            kind: MediaKind::Image,
        }
    }

    /// A video descriptor, typically injected by an images hook.
    pub fn video(
        url: impl Into<String>,
        thumb: Option<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let url = url.into();
        Self {
            display_url: Some(url.clone()),
            link_url: Some(url),
            thumbnail_url: thumb,
            title: title.into(),
            description: description.into(),
            kind: MediaKind::Video,
        }
    }
}

/// Configuration object passed to the slideshow renderer.
///
/// Keys added by an options hook that have no dedicated field are kept in
/// [`PresentationConfig::extra`] and serialized at the top level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationConfig {
    pub width: Dimension,
    pub height: Dimension,
    pub autoplay: bool,
    pub transition: String,
    pub initial_transition: String,
    pub transition_speed: u32,
    #[serde(rename = "_delayTime")]
    pub delay_time: u32,
    #[serde(rename = "_hideControls")]
    pub hide_controls: bool,
    #[serde(rename = "_thumbnailMode")]
    pub thumbnail_mode: String,
    #[serde(rename = "_captionMode")]
    pub caption_mode: CaptionMode,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PresentationConfig {
    /// Builds a config with the fixed transition and timing parameters.
    pub fn new(
        width: Dimension,
        height: Dimension,
        autoplay: bool,
        hide_controls: bool,
        caption_mode: CaptionMode,
    ) -> Self {
        Self {
            width,
            height,
            autoplay,
            transition: TRANSITION.to_string(),
            initial_transition: INITIAL_TRANSITION.to_string(),
            transition_speed: TRANSITION_SPEED_MS,
            delay_time: DELAY_TIME_MS,
            hide_controls,
            thumbnail_mode: THUMBNAIL_MODE.to_string(),
            caption_mode,
            extra: Map::new(),
        }
    }

    /// Adds or replaces a renderer option.
    ///
    /// A key naming a typed field (`autoplay`, `_captionMode`, ...) sets that
    /// field instead of landing in [`PresentationConfig::extra`]. A value the
    /// field cannot hold leaves the config unchanged.
    pub fn with_extra(self, key: impl Into<String>, value: Value) -> Self {
        let key = key.into();

        let mut fields = match serde_json::to_value(&self) {
            Ok(Value::Object(fields)) => fields,
            _ => return self,
        };
        fields.insert(key.clone(), value);

        match serde_json::from_value(Value::Object(fields)) {
            Ok(updated) => updated,
            Err(e) => {
                warn!(key = %key, error = %e, "Ignoring invalid renderer option");
                self
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_config() -> PresentationConfig {
        PresentationConfig::new(
            Dimension::Keyword("auto".to_string()),
            Dimension::Ratio(0.76),
            true,
            false,
            CaptionMode::OnHidden,
        )
    }

    #[test]
    fn test_config_wire_format() {
        let value = serde_json::to_value(sample_config()).unwrap();

        assert_eq!(
            value,
            json!({
                "width": "auto",
                "height": 0.76,
                "autoplay": true,
                "transition": "slide",
                "initialTransition": "fade",
                "transitionSpeed": 500,
                "_delayTime": 4000,
                "_hideControls": false,
                "_thumbnailMode": "grid",
                "_captionMode": "on_hidden",
            })
        );
    }

    #[test]
    fn test_config_round_trip() {
        let config = sample_config().with_extra("lightbox", json!(true));
        let encoded = serde_json::to_string(&config).unwrap();
        let decoded: PresentationConfig = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, config);
    }

    #[test]
    fn test_with_extra_sets_typed_field() {
        let config = sample_config()
            .with_extra("autoplay", json!(false))
            .with_extra("_captionMode", json!("off"))
            .with_extra("width", json!(800));

        assert!(!config.autoplay);
        assert_eq!(config.caption_mode, CaptionMode::Off);
        assert_eq!(config.width, Dimension::Pixels(800));
        assert!(config.extra.is_empty());

        let encoded = serde_json::to_string(&config).unwrap();
        assert_eq!(encoded.matches("\"autoplay\"").count(), 1);
        let decoded: PresentationConfig = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, config);
    }

    #[test]
    fn test_with_extra_rejects_mistyped_field() {
        let config = sample_config().with_extra("transitionSpeed", json!("fast"));
        assert_eq!(config, sample_config());
    }

    #[test]
    fn test_with_extra_keeps_unknown_keys() {
        let config = sample_config()
            .with_extra("lightbox", json!(true))
            .with_extra("lightbox", json!(false));
        assert_eq!(config.extra.get("lightbox"), Some(&json!(false)));
        assert_eq!(config.extra.len(), 1);
    }

    #[test]
    fn test_config_round_trip_with_pixels() {
        let config = PresentationConfig::new(
            Dimension::Pixels(640),
            Dimension::Pixels(480),
            false,
            true,
            CaptionMode::Off,
        );
        let encoded = serde_json::to_string(&config).unwrap();
        let decoded: PresentationConfig = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, config);
        assert_eq!(decoded.width, Dimension::Pixels(640));
    }

    #[test]
    fn test_descriptor_wire_format() {
        let descriptor = RenderDescriptor::image(
            Some("https://cdn.example.com/a-1024.jpg".to_string()),
            None,
            "A",
            "",
        );
        let value = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(value["url"], "https://cdn.example.com/a-1024.jpg");
        assert_eq!(value["big"], "https://cdn.example.com/a-1024.jpg");
        assert!(value["thumb"].is_null());
        assert_eq!(value["type"], "image");
    }

    #[test]
    fn test_youtube_alias_deserializes_as_video() {
        let descriptor: RenderDescriptor = serde_json::from_value(json!({
            "url": "https://www.youtube.com/watch?v=abc",
            "big": null,
            "thumb": null,
            "title": "Clip",
            "description": "",
            "type": "youtube",
        }))
        .unwrap();
        assert_eq!(descriptor.kind, MediaKind::Video);
    }
}
