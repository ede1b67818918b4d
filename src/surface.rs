//! Presentation surfaces
//!
//! A surface owns a viewport and the most recent successfully solved
//! layout. Hosts drive it with `refresh` (reload the source and re-solve)
//! and `resize` (re-solve the retained document at a new extent), then call
//! `render` to present whatever solved last. A refresh that fails leaves
//! the previous document and layout untouched, so a host keeps showing the
//! last good state while the source is mid-edit.

use crate::layout::{self, Layout, Viewport};
use crate::renderer::{render_svg_with_theme, SvgConfig};
use crate::source::{Document, SourceStore};
use crate::theme::Theme;
use crate::RenderError;

/// A render target driven by a source store.
pub trait Surface {
    /// Change the viewport and re-solve the retained document.
    fn resize(&mut self, width: f64, height: f64);

    /// Reload the document from the store and solve it against the
    /// current viewport. On failure the previous state is kept.
    fn refresh(&mut self, store: &SourceStore) -> Result<(), RenderError>;

    /// Present the most recent successful layout, or `None` if nothing
    /// has solved yet.
    fn render(&self) -> Option<String>;
}

/// A surface that presents layouts as SVG documents.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    viewport: Viewport,
    theme: Theme,
    config: SvgConfig,
    document: Option<Document>,
    layout: Option<Layout>,
}

impl SvgSurface {
    /// Create a surface with the default theme and SVG configuration.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            theme: Theme::default(),
            config: SvgConfig::default(),
            document: None,
            layout: None,
        }
    }

    /// Set the theme
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set the SVG configuration
    pub fn with_config(mut self, config: SvgConfig) -> Self {
        self.config = config;
        self
    }

    /// Current viewport extent.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The most recent successful layout.
    pub fn layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }
}

impl Surface for SvgSurface {
    fn resize(&mut self, width: f64, height: f64) {
        self.viewport = Viewport::new(width, height);
        // Solving fails only on name or cycle errors, so a document that
        // solved once cannot fail at a new viewport extent.
        if let Some(document) = &self.document {
            if let Ok(layout) = layout::solve(document, self.viewport) {
                self.layout = Some(layout);
            }
        }
    }

    fn refresh(&mut self, store: &SourceStore) -> Result<(), RenderError> {
        let document = store.load()?;
        let layout = layout::solve(&document, self.viewport)?;
        self.document = Some(document);
        self.layout = Some(layout);
        Ok(())
    }

    fn render(&self) -> Option<String> {
        self.layout
            .as_ref()
            .map(|layout| render_svg_with_theme(layout, &self.config, &self.theme))
    }
}
