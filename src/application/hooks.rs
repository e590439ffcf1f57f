//! Extension points applied while rendering a gallery.
//!
//! Each point holds an ordered list of pure transforms. Every transform
//! receives the previous one's result and may return it unchanged.

use crate::domain::entities::{PresentationConfig, RenderDescriptor, ShortcodeRequest};
use std::sync::Arc;

/// Replaces the whole gallery output.
///
/// Receives the output produced so far (initially empty) and the raw
/// attributes. A non-empty final result short-circuits rendering.
pub type OverrideFn = Arc<dyn Fn(String, &ShortcodeRequest) -> String + Send + Sync>;

/// Rewrites the descriptor list just before serialization.
pub type ImagesFn = Arc<dyn Fn(Vec<RenderDescriptor>) -> Vec<RenderDescriptor> + Send + Sync>;

/// Rewrites the renderer configuration just before serialization.
pub type OptionsFn = Arc<dyn Fn(PresentationConfig) -> PresentationConfig + Send + Sync>;

/// Registered hooks, in registration order.
#[derive(Clone, Default)]
pub struct GalleryHooks {
    overrides: Vec<OverrideFn>,
    images: Vec<ImagesFn>,
    options: Vec<OptionsFn>,
}

impl GalleryHooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an output override (`post_gallery`).
    pub fn on_override<F>(mut self, hook: F) -> Self
    where
        F: Fn(String, &ShortcodeRequest) -> String + Send + Sync + 'static,
    {
        self.overrides.push(Arc::new(hook));
        self
    }

    /// Registers a descriptor list transform (`advanced_galleria_images`).
    pub fn on_images<F>(mut self, hook: F) -> Self
    where
        F: Fn(Vec<RenderDescriptor>) -> Vec<RenderDescriptor> + Send + Sync + 'static,
    {
        self.images.push(Arc::new(hook));
        self
    }

    /// Registers a configuration transform (`advanced_galleria_options`).
    pub fn on_options<F>(mut self, hook: F) -> Self
    where
        F: Fn(PresentationConfig) -> PresentationConfig + Send + Sync + 'static,
    {
        self.options.push(Arc::new(hook));
        self
    }

    /// Runs the override chain. `Some` only when it produced non-empty output.
    pub fn apply_override(&self, request: &ShortcodeRequest) -> Option<String> {
        let output = self
            .overrides
            .iter()
            .fold(String::new(), |acc, hook| hook(acc, request));

        (!output.is_empty()).then_some(output)
    }

    pub fn apply_images(&self, images: Vec<RenderDescriptor>) -> Vec<RenderDescriptor> {
        self.images.iter().fold(images, |acc, hook| hook(acc))
    }

    pub fn apply_options(&self, config: PresentationConfig) -> PresentationConfig {
        self.options.iter().fold(config, |acc, hook| hook(acc))
    }

    /// Number of registered hooks per point: (override, images, options).
    pub fn counts(&self) -> (usize, usize, usize) {
        (self.overrides.len(), self.images.len(), self.options.len())
    }
}

impl std::fmt::Debug for GalleryHooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GalleryHooks")
            .field("overrides", &self.overrides.len())
            .field("images", &self.images.len())
            .field("options", &self.options.len())
            .finish()
    }
}
