//! Gallery resolution: attributes in, markup out.

use std::sync::Arc;

use crate::application::hooks::GalleryHooks;
use crate::application::instance_counter::InstanceCounter;
use crate::application::services::content_selector::ContentSelector;
use crate::application::services::output_composer::OutputComposer;
use crate::application::services::presentation_mapper::{PresentationMapper, build_config};
use crate::application::services::sequencer::Sequencer;
use crate::application::services::settings_service::SettingsService;
use crate::domain::entities::settings::FEED_SIZE;
use crate::domain::entities::{
    GalleryOptions, PresentationConfig, RenderContext, RenderDescriptor, ShortcodeRequest,
};
use crate::domain::repositories::{AttachmentRepository, OptionStore};
use tracing::{debug, info};

/// How a gallery request was answered.
#[derive(Debug, Clone, PartialEq)]
pub enum GalleryOutcome {
    /// An override hook supplied the output.
    Overridden,
    /// Feed output.
    Syndicated,
    /// Slideshow container with the given instance number.
    Slideshow { instance: u64 },
    /// Nothing to show.
    Empty,
}

/// Result of rendering one gallery.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedGallery {
    pub html: String,
    /// Descriptors after the images hook; empty for overridden and feed output.
    pub images: Vec<RenderDescriptor>,
    /// Configuration after the options hook, when a slideshow was built.
    pub config: Option<PresentationConfig>,
    pub outcome: GalleryOutcome,
}

impl RenderedGallery {
    fn from_html(html: String, outcome: GalleryOutcome) -> Self {
        Self {
            html,
            images: Vec::new(),
            config: None,
            outcome,
        }
    }

    fn empty() -> Self {
        Self::from_html(String::new(), GalleryOutcome::Empty)
    }
}

/// Service resolving `[gallery]` shortcodes into slideshow markup.
///
/// Runs the pipeline normalize → select → sequence → map → compose. No stage
/// fails: missing data ends in an empty output string.
pub struct GalleryService<R: AttachmentRepository, O: OptionStore> {
    selector: ContentSelector<R>,
    sequencer: Sequencer<R>,
    mapper: PresentationMapper<R>,
    settings: SettingsService<O>,
    composer: OutputComposer,
    hooks: GalleryHooks,
}

impl<R: AttachmentRepository, O: OptionStore> GalleryService<R, O> {
    /// Creates a gallery service with its own instance counter and no hooks.
    pub fn new(repository: Arc<R>, options: Arc<O>) -> Self {
        Self::with_hooks(
            repository,
            options,
            GalleryHooks::new(),
            Arc::new(InstanceCounter::new()),
        )
    }

    /// Creates a gallery service with registered hooks and a shared counter.
    pub fn with_hooks(
        repository: Arc<R>,
        options: Arc<O>,
        hooks: GalleryHooks,
        counter: Arc<InstanceCounter>,
    ) -> Self {
        let (overrides, images, options_hooks) = hooks.counts();
        debug!(overrides, images, options = options_hooks, "Gallery hooks registered");

        Self {
            selector: ContentSelector::new(repository.clone()),
            sequencer: Sequencer::new(repository.clone()),
            mapper: PresentationMapper::new(repository),
            settings: SettingsService::new(options),
            composer: OutputComposer::new(counter),
            hooks,
        }
    }

    pub fn settings(&self) -> &SettingsService<O> {
        &self.settings
    }

    /// Renders a gallery and returns only the markup.
    pub async fn render_html(&self, request: &ShortcodeRequest, context: RenderContext) -> String {
        self.render(request, context).await.html
    }

    /// Renders a gallery.
    ///
    /// # Pipeline
    ///
    /// 1. Override hooks; non-empty output is returned as-is
    /// 2. Attribute normalization against the defaults
    /// 3. Candidate selection (explicit IDs or the container's children)
    /// 4. Deduplication and featured-singleton suppression
    /// 5. Feed context: one inline image per record at the `medium` size
    /// 6. Otherwise descriptors and config, both passed through their hooks,
    ///    then the slideshow container
    pub async fn render(&self, request: &ShortcodeRequest, context: RenderContext) -> RenderedGallery {
        if let Some(html) = self.hooks.apply_override(request) {
            debug!(post_id = context.post_id, "Gallery output replaced by override hook");
            return RenderedGallery::from_html(html, GalleryOutcome::Overridden);
        }

        let options = GalleryOptions::normalize(request, context.post_id);
        let candidates = self.selector.select(&options).await;
        let sequence = self.sequencer.sequence(candidates, context.post_id).await;

        if context.syndication {
            if sequence.is_empty() {
                return RenderedGallery::empty();
            }
            let variants = self.mapper.variants(&sequence, FEED_SIZE).await;
            let html = self.composer.compose_feed(&variants);
            return RenderedGallery::from_html(html, GalleryOutcome::Syndicated);
        }

        let settings = self.settings.load().await;
        let descriptors = self.mapper.describe(&sequence, &settings).await;
        let images = self.hooks.apply_images(descriptors);

        if images.is_empty() {
            debug!(post_id = context.post_id, "No images to show, gallery omitted");
            return RenderedGallery::empty();
        }

        let config = self.hooks.apply_options(build_config(&options));

        match self
            .composer
            .compose_slideshow(&images, &config, &settings.thumb_size)
        {
            Some(slideshow) => {
                info!(
                    post_id = context.post_id,
                    instance = slideshow.instance,
                    images = images.len(),
                    "Rendered gallery"
                );
                RenderedGallery {
                    html: slideshow.html,
                    images,
                    config: Some(config),
                    outcome: GalleryOutcome::Slideshow {
                        instance: slideshow.instance,
                    },
                }
            }
            None => RenderedGallery::empty(),
        }
    }
}
