//! Normalized gallery options and the attribute normalizer.

use crate::domain::entities::shortcode::{AttrValue, ShortcodeRequest};
use crate::utils::id_list::parse_id_list;
use crate::utils::orderby::sanitize_orderby;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Sort fields used when the author gives none, or gives an unsafe one.
pub const DEFAULT_ORDERBY: &str = "menu_order ID";

/// Default number of grid columns, carried for compatibility.
pub const DEFAULT_COLUMNS: i64 = 3;

/// Default stage height as a fraction of the width (3:2 stage plus thumbnail strip).
pub const DEFAULT_HEIGHT_RATIO: f64 = 0.76;

/// Default stage width keyword.
pub const DEFAULT_WIDTH: &str = "auto";

/// Sort direction for the repository query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
    /// Random order; never combined with a sort field.
    Rand,
}

impl SortDirection {
    /// Parses `ASC`, `DESC` or `RAND` case-insensitively.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "ASC" => Some(Self::Asc),
            "DESC" => Some(Self::Desc),
            "RAND" => Some(Self::Rand),
            _ => None,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
            Self::Rand => "RAND",
        })
    }
}

/// How the renderer shows image captions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptionMode {
    Off,
    OnHidden,
    #[default]
    OnExpand,
}

impl CaptionMode {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "off" => Some(Self::Off),
            "on_hidden" => Some(Self::OnHidden),
            "on_expand" => Some(Self::OnExpand),
            _ => None,
        }
    }
}

/// A stage dimension as the renderer understands it.
///
/// Serializes untagged: `640`, `0.76` or `"auto"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    /// Whole pixels.
    Pixels(i64),
    /// Fraction of the other axis (height only, in practice).
    Ratio(f64),
    /// Symbolic sizing keyword passed through untouched.
    Keyword(String),
}

impl Dimension {
    /// Types an attribute value.
    ///
    /// Integral numbers become pixels, other finite numbers become ratios,
    /// anything else is a keyword.
    pub fn from_attr(value: &AttrValue) -> Self {
        if let Some(px) = value.as_i64() {
            return Self::Pixels(px);
        }
        match value.as_number() {
            Some(n) if n.fract() == 0.0 && n.abs() < i64::MAX as f64 => Self::Pixels(n as i64),
            Some(n) => Self::Ratio(n),
            None => Self::Keyword(value.as_text().trim().to_string()),
        }
    }
}

/// Fully populated, type-coerced options for one gallery.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryOptions {
    pub order: SortDirection,
    /// Sanitized sort clause.
    pub orderby: String,
    /// Container whose attachments are listed when no explicit IDs are given.
    pub parent_id: i64,
    pub columns: i64,
    pub size: String,
    /// Explicit IDs in author order; `Some` whenever `ids` or `include` was given.
    pub include: Option<Vec<i64>>,
    pub exclude: Vec<i64>,
    pub width: Dimension,
    pub height: Dimension,
    pub autoplay: bool,
    pub captions: CaptionMode,
    pub hide_controls: bool,
}

impl GalleryOptions {
    /// Defaults for a gallery rendered inside `current_post_id`.
    pub fn defaults(current_post_id: i64) -> Self {
        Self {
            order: SortDirection::Asc,
            orderby: DEFAULT_ORDERBY.to_string(),
            parent_id: current_post_id,
            columns: DEFAULT_COLUMNS,
            size: String::new(),
            include: None,
            exclude: Vec::new(),
            width: Dimension::Keyword(DEFAULT_WIDTH.to_string()),
            height: Dimension::Ratio(DEFAULT_HEIGHT_RATIO),
            autoplay: false,
            captions: CaptionMode::OnExpand,
            hide_controls: false,
        }
    }

    /// Merges a raw attribute bag over the defaults.
    ///
    /// Never fails: unrecognized keys are ignored and values that cannot be
    /// coerced keep their default. `ids` takes precedence over `include`.
    pub fn normalize(request: &ShortcodeRequest, current_post_id: i64) -> Self {
        let mut options = Self::defaults(current_post_id);

        if let Some(value) = request.get_present("order") {
            match SortDirection::parse(&value.as_text()) {
                Some(order) => options.order = order,
                None => debug!(order = %value.as_text(), "Unknown sort direction, using ASC"),
            }
        }

        if let Some(value) = request.get_present("orderby") {
            match sanitize_orderby(&value.as_text()) {
                Some(clause) => options.orderby = clause,
                None => debug!(
                    orderby = %value.as_text(),
                    "Rejected orderby clause, using default ordering"
                ),
            }
        }

        if let Some(value) = request.get_present("id") {
            match value.as_i64() {
                Some(id) => options.parent_id = id,
                None => debug!(id = %value.as_text(), "Non-numeric gallery id, using current post"),
            }
        }

        if let Some(columns) = request.get_present("columns").and_then(AttrValue::as_i64) {
            options.columns = columns;
        }

        if let Some(size) = request.get_present("size") {
            options.size = size.as_text();
        }

        let explicit = request
            .get_present("ids")
            .or_else(|| request.get_present("include"));
        if let Some(value) = explicit {
            options.include = Some(parse_id_list(&value.as_text()));
        }

        if let Some(value) = request.get_present("exclude") {
            options.exclude = parse_id_list(&value.as_text());
        }

        if let Some(value) = request.get_present("width") {
            options.width = Dimension::from_attr(value);
        }

        if let Some(value) = request.get_present("height") {
            options.height = Dimension::from_attr(value);
        }

        if let Some(value) = request.get("autoplay") {
            options.autoplay = value.as_bool();
        }

        if let Some(value) = request.get_present("captions") {
            match CaptionMode::parse(&value.as_text()) {
                Some(mode) => options.captions = mode,
                None => debug!(captions = %value.as_text(), "Unknown caption mode, using on_expand"),
            }
        }

        if let Some(value) = request.get("hideControls") {
            options.hide_controls = value.as_bool();
        }

        options
    }
}
