//! Element position and page measurements.

use crate::error::DomError;
use crate::host::DocumentHost;
use crate::lookup::{resolve, ElementRef};
use crate::metrics::PageMetrics;
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// Position and size of an element in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Offset {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

/// `a || b` on numbers: zero falls through to the alternative.
fn or(a: f64, b: f64) -> f64 {
    if a != 0.0 && !a.is_nan() {
        a
    } else {
        b
    }
}

/// The element's bounding rectangle moved from viewport to page coordinates.
pub fn get_offset<'a, H>(host: &H, element: impl Into<ElementRef<'a>>) -> Result<Offset, DomError>
where
    H: DocumentHost + ?Sized,
{
    let node = resolve(host, element)?;
    let rect = host.bounding_client_rect(node);
    let m = host.metrics();

    let client_top = or(m.document_element.client_top, m.body.client_top);
    let client_left = or(m.document_element.client_left, m.body.client_left);
    let scroll_top = or(m.page_y_offset, m.document_element.scroll_top);
    let scroll_left = or(m.page_x_offset, m.document_element.scroll_left);

    Ok(Offset {
        top: rect.top + scroll_top - client_top,
        right: rect.right + scroll_left - client_left,
        bottom: rect.bottom + scroll_top - client_top,
        left: rect.left + scroll_left - client_left,
        width: rect.width(),
        height: rect.height(),
    })
}

pub mod page {
    //! Page-wide measurements.

    use super::or;
    use crate::metrics::PageMetrics;

    /// Full page width, including overflow.
    pub fn get_width(metrics: &PageMetrics) -> f64 {
        metrics
            .document_element
            .scroll_width
            .max(metrics.body.scroll_width)
            .max(metrics.view_root().client_width)
    }

    /// Full page height, including overflow.
    pub fn get_height(metrics: &PageMetrics) -> f64 {
        metrics
            .document_element
            .scroll_height
            .max(metrics.body.scroll_height)
            .max(metrics.view_root().client_height)
    }

    /// Width of the visible area.
    pub fn get_view_width(metrics: &PageMetrics) -> f64 {
        metrics.view_root().client_width
    }

    /// Vertical scroll position.
    pub fn get_scroll_top(metrics: &PageMetrics) -> f64 {
        or(
            or(metrics.page_y_offset, metrics.document_element.scroll_top),
            metrics.body.scroll_top,
        )
    }
}

fn msie_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)msie (\d+\.\d+)").expect("msie pattern is valid"))
}

/// Internet Explorer version, or `None` for any other browser.
///
/// The document mode wins over the version in the user agent, since it
/// reflects the engine actually in use.
///
/// # Examples
///
/// ```
/// use esui_dom::{ie_version, PageMetrics};
///
/// let mut metrics = PageMetrics::default();
/// metrics.user_agent = "Mozilla/4.0 (compatible; MSIE 8.0; Windows NT 6.1)".to_string();
/// assert_eq!(ie_version(&metrics), Some(8.0));
///
/// metrics.document_mode = Some(7.0);
/// assert_eq!(ie_version(&metrics), Some(7.0));
/// ```
pub fn ie_version(metrics: &PageMetrics) -> Option<f64> {
    let caps = msie_regex().captures(&metrics.user_agent)?;
    let parsed = caps[1].parse::<f64>().ok();
    match metrics.document_mode {
        Some(mode) if mode != 0.0 => Some(mode),
        _ => parsed,
    }
}
