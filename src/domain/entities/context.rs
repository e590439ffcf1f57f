//! Where a gallery is being rendered.

/// Host context of one shortcode occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    /// Post containing the shortcode.
    pub post_id: i64,
    /// Feed or export output: no scripts, no interactive markup.
    pub syndication: bool,
}

impl RenderContext {
    pub fn interactive(post_id: i64) -> Self {
        Self {
            post_id,
            syndication: false,
        }
    }

    pub fn feed(post_id: i64) -> Self {
        Self {
            post_id,
            syndication: true,
        }
    }
}
