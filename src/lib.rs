//! Anchor Layout - a constraint-anchored rectangle layout engine
//!
//! This library places named rectangles by anchoring their sides to the
//! viewport or to sides of other rectangles. Dependencies between elements
//! form a directed graph; the solver orders it, rejects cycles with the
//! offending member names, and resolves every rectangle in one pass. The
//! graph core (traversal, condensation, shortest paths) is usable on its
//! own through the [`graph`] module.
//!
//! # Example
//!
//! ```rust
//! use anchor_layout::render;
//!
//! let svg = render(
//!     r#"{
//!       "Box": {
//!         "content": { "text": "hello", "width": 100, "height": 50 },
//!         "constraints": {
//!           "left": { "name": "ScreenLeft", "direction": "left", "value": 10 },
//!           "top":  { "name": "ScreenTop",  "direction": "top",  "value": 10 }
//!         }
//!       }
//!     }"#,
//! )
//! .unwrap();
//!
//! assert!(svg.contains("<svg"));
//! assert!(svg.contains(r#"id="Box""#));
//! ```

pub mod graph;
pub mod heap;
pub mod layout;
pub mod renderer;
pub mod source;
pub mod surface;
pub mod theme;

pub use heap::PriorityQueue;
pub use layout::{solve, Layout, LayoutError, PlacedElement, Rect, Viewport};
pub use renderer::{render_svg, render_svg_with_theme, SvgConfig};
pub use source::{Document, SourceError, SourceStore, EXAMPLE_SOURCE};
pub use surface::{Surface, SvgSurface};
pub use theme::{Theme, ThemeError};

use thiserror::Error;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// Error loading or parsing the document
    #[error("source error: {0}")]
    Source(#[from] SourceError),

    /// Error solving the layout
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Viewport the layout is solved against
    pub viewport: Viewport,
    /// Theme for background, text color, and font
    pub theme: Theme,
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Debug mode: dump solved rectangles to stderr
    pub debug: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::new(1280.0, 720.0),
            theme: Theme::default(),
            svg: SvgConfig::default(),
            debug: false,
        }
    }
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the viewport extent
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    /// Set the theme
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Enable or disable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Render a JSON layout source to SVG with default configuration
///
/// This is the main entry point for the library. It parses the source,
/// solves the layout against a 1280x720 viewport, and generates SVG.
///
/// # Example
///
/// ```rust
/// use anchor_layout::render;
///
/// let svg = render(
///     r#"{
///       "Bar": {
///         "content": { "text": "", "width": 0, "height": 40 },
///         "constraints": {
///           "left":  { "name": "ScreenLeft",  "direction": "left",  "value": 0 },
///           "right": { "name": "ScreenRight", "direction": "right", "value": 0 }
///         }
///       }
///     }"#,
/// )
/// .unwrap();
///
/// assert!(svg.contains(r#"width="1280""#));
/// ```
pub fn render(source: &str) -> Result<String, RenderError> {
    render_with_config(source, RenderConfig::default())
}

/// Render a JSON layout source to SVG with custom configuration
///
/// # Example
///
/// ```rust
/// use anchor_layout::{render_with_config, RenderConfig, SvgConfig, Viewport};
///
/// let config = RenderConfig::new()
///     .with_viewport(Viewport::new(640.0, 480.0))
///     .with_svg(SvgConfig::default().with_pretty_print(false));
///
/// let svg = render_with_config("{}", config).unwrap();
/// assert!(svg.contains(r#"viewBox="0 0 640 480""#));
/// ```
pub fn render_with_config(source: &str, config: RenderConfig) -> Result<String, RenderError> {
    // Parse the source
    let document = Document::from_str(source)?;

    // Solve the layout
    let layout = solve(&document, config.viewport)?;

    // Debug output
    if config.debug {
        eprintln!("=== Layout Debug ===");
        for element in &layout.elements {
            eprintln!(
                "[{}] x={:.1} y={:.1} w={:.1} h={:.1}",
                element.name,
                element.rect.x,
                element.rect.y,
                element.rect.width,
                element.rect.height
            );
        }
        eprintln!("====================");
    }

    // Generate SVG with the theme
    Ok(render_svg_with_theme(&layout, &config.svg, &config.theme))
}
