//! Serialization of a resolved gallery into page markup.

use std::sync::Arc;

use askama::Template;
use tracing::error;

use crate::application::instance_counter::InstanceCounter;
use crate::domain::entities::{ImageVariant, MediaKind, PresentationConfig, RenderDescriptor};
use crate::utils::script_json::to_script_json;

/// Prefix of every slideshow container id.
pub const DOM_ID_PREFIX: &str = "advanced_galleria_slideshow_";

/// One anchor inside the slideshow container.
struct Slide<'a> {
    href: &'a str,
    src: &'a str,
    thumb: Option<&'a str>,
    title: &'a str,
    description: &'a str,
    video: bool,
}

impl<'a> From<&'a RenderDescriptor> for Slide<'a> {
    fn from(d: &'a RenderDescriptor) -> Self {
        let href = d
            .display_url
            .as_deref()
            .or(d.link_url.as_deref())
            .unwrap_or_default();
        let thumb = d.thumbnail_url.as_deref();

        Self {
            href,
            // a missing thumbnail falls back to the slide itself
            src: thumb.unwrap_or(href),
            thumb,
            title: &d.title,
            description: &d.description,
            video: d.kind == MediaKind::Video,
        }
    }
}

/// Slideshow placeholder plus renderer activation.
#[derive(Template)]
#[template(path = "gallery.html")]
struct SlideshowTemplate<'a> {
    dom_id: &'a str,
    thumb_size: &'a str,
    slides: Vec<Slide<'a>>,
    options_json: &'a str,
}

/// Plain image list for feeds. Unresolved slots render with empty attributes.
#[derive(Template)]
#[template(path = "feed.html")]
struct FeedTemplate<'a> {
    images: &'a [Option<ImageVariant>],
}

/// A rendered slideshow and the instance number it was given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slideshow {
    pub instance: u64,
    pub dom_id: String,
    pub html: String,
}

/// Emits slideshow or feed markup.
///
/// Owns the instance counter so that every emitted container gets a unique id.
#[derive(Debug, Clone)]
pub struct OutputComposer {
    counter: Arc<InstanceCounter>,
}

impl OutputComposer {
    pub fn new(counter: Arc<InstanceCounter>) -> Self {
        Self { counter }
    }

    pub fn counter(&self) -> &InstanceCounter {
        &self.counter
    }

    /// Renders the slideshow container and activation script.
    ///
    /// Returns `None` for an empty image list; no instance number is taken
    /// in that case. Rendering failures are logged and also yield `None`.
    pub fn compose_slideshow(
        &self,
        images: &[RenderDescriptor],
        config: &PresentationConfig,
        thumb_size: &str,
    ) -> Option<Slideshow> {
        if images.is_empty() {
            return None;
        }

        let options_json = match to_script_json(config) {
            Ok(json) => json,
            Err(e) => {
                error!(error = %e, "Failed to encode slideshow options");
                return None;
            }
        };

        let instance = self.counter.next();
        let dom_id = format!("{DOM_ID_PREFIX}{instance}");

        let template = SlideshowTemplate {
            dom_id: &dom_id,
            thumb_size,
            slides: images.iter().map(Slide::from).collect(),
            options_json: &options_json,
        };

        match template.render() {
            Ok(html) => Some(Slideshow {
                instance,
                dom_id,
                html,
            }),
            Err(e) => {
                error!(error = %e, instance, "Failed to render slideshow");
                None
            }
        }
    }

    /// Renders one inline image per slot, newline separated.
    ///
    /// Empty input yields an empty string.
    pub fn compose_feed(&self, images: &[Option<ImageVariant>]) -> String {
        if images.is_empty() {
            return String::new();
        }

        FeedTemplate { images }.render().unwrap_or_else(|e| {
            error!(error = %e, "Failed to render feed images");
            String::new()
        })
    }
}
