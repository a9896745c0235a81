//! Viewport and page configuration.

use serde::{Deserialize, Serialize};

/// Rendering mode of the document. Quirks mode measures the viewport on
/// `<body>` instead of the root element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CompatMode {
    #[default]
    #[serde(rename = "CSS1Compat")]
    Css1Compat,
    #[serde(rename = "BackCompat")]
    BackCompat,
}

/// Scroll and client dimensions of one box (the root element or `<body>`).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxMetrics {
    pub scroll_width: f64,
    pub scroll_height: f64,
    pub scroll_top: f64,
    pub scroll_left: f64,
    pub client_width: f64,
    pub client_height: f64,
    pub client_top: f64,
    pub client_left: f64,
}

/// What a host reports about the page as a whole.
///
/// Every field defaults, so a config file only needs the values it cares
/// about:
///
/// ```
/// use esui_dom::{CompatMode, PageMetrics};
///
/// let metrics: PageMetrics = serde_json::from_str(
///     r#"{"compat_mode": "BackCompat", "body": {"client_width": 800}}"#,
/// ).unwrap();
/// assert_eq!(metrics.compat_mode, CompatMode::BackCompat);
/// assert_eq!(metrics.body.client_width, 800.0);
/// assert_eq!(metrics.page_y_offset, 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageMetrics {
    pub compat_mode: CompatMode,
    pub document_element: BoxMetrics,
    pub body: BoxMetrics,
    pub page_x_offset: f64,
    pub page_y_offset: f64,
    pub user_agent: String,
    pub document_mode: Option<f64>,
}

impl PageMetrics {
    /// The box that measures the viewport for the current compat mode.
    pub fn view_root(&self) -> &BoxMetrics {
        match self.compat_mode {
            CompatMode::BackCompat => &self.body,
            CompatMode::Css1Compat => &self.document_element,
        }
    }
}
