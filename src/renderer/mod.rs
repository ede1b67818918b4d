//! SVG renderer for generating output from solved layouts
//!
//! This module takes a Layout and produces an SVG string with a themed
//! background, one filled rectangle per element, and text labels.

pub mod config;
pub mod svg;

pub use config::SvgConfig;
pub use svg::{render_svg, render_svg_with_theme};
