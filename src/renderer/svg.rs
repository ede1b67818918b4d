//! SVG generation from resolved layouts

use crate::layout::{Layout, Rgba, Viewport};
use crate::theme::Theme;

use super::SvgConfig;

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    styles: Vec<String>,
    elements: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            styles: vec![],
            elements: vec![],
            indent: 1,
        }
    }

    /// Add label styling derived from a theme
    pub fn add_theme(&mut self, theme: &Theme) {
        let prefix = self.prefix();
        self.styles.push(format!(
            ".{}label {{ font-family: \"{}\"; font-size: {}px; fill: {}; }}",
            prefix, theme.font_family, theme.font_size, theme.text
        ));
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add the background rectangle covering the whole viewport
    pub fn add_background(&mut self, viewport: Viewport, fill: &str) {
        let prefix = self.prefix();
        self.elements.push(format!(
            r#"{}<rect class="{}background" x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
            self.indent_str(),
            prefix,
            viewport.width,
            viewport.height,
            fill
        ));
    }

    /// Add a rectangle element
    pub fn add_rect(&mut self, id: Option<&str>, x: f64, y: f64, w: f64, h: f64, styles: &str) {
        let prefix = self.prefix();
        let id_attr = id
            .map(|i| format!(r#" id="{}""#, escape_xml(i)))
            .unwrap_or_default();

        self.elements.push(format!(
            r#"{}<rect{} class="{}element" x="{}" y="{}" width="{}" height="{}"{}/>"#,
            self.indent_str(),
            id_attr,
            prefix,
            x,
            y,
            w,
            h,
            styles
        ));
    }

    /// Add a text label element
    pub fn add_label(&mut self, text: &str, x: f64, y: f64, styles: &str) {
        let prefix = self.prefix();
        self.elements.push(format!(
            r#"{}<text class="{}label" x="{}" y="{}"{}>{}</text>"#,
            self.indent_str(),
            prefix,
            x,
            y,
            styles,
            escape_xml(text)
        ));
    }

    /// Build the final SVG string
    pub fn build(self, viewport: Viewport) -> String {
        let nl = self.newline();

        let mut svg = String::new();

        // XML declaration for standalone
        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        // SVG root element, sized to the viewport
        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            viewport.width, viewport.height, viewport.width, viewport.height
        ));
        svg.push_str(nl);

        // Style section for theme-derived rules
        if !self.styles.is_empty() {
            svg.push_str("  <style>");
            svg.push_str(nl);
            for style in &self.styles {
                svg.push_str("    ");
                svg.push_str(style);
                svg.push_str(nl);
            }
            svg.push_str("  </style>");
            svg.push_str(nl);
        }

        // Elements, in z-order
        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");

        svg
    }
}

/// Render a layout to an SVG string (with the default theme)
pub fn render_svg(layout: &Layout, config: &SvgConfig) -> String {
    render_svg_with_theme(layout, config, &Theme::default())
}

/// Render a layout to an SVG string with a custom theme
pub fn render_svg_with_theme(layout: &Layout, config: &SvgConfig, theme: &Theme) -> String {
    let mut builder = SvgBuilder::new(config.clone());

    builder.add_theme(theme);
    builder.add_background(layout.viewport, &theme.background);

    // Registration order is z-order: later elements paint over earlier ones.
    for element in &layout.elements {
        builder.add_rect(
            Some(&element.name),
            element.rect.x,
            element.rect.y,
            element.rect.width,
            element.rect.height,
            &format_fill(&element.color),
        );

        if !element.text.is_empty() {
            // First baseline sits one font size below the top edge.
            let baseline = element.rect.y + theme.font_size;
            builder.add_label(
                &element.text,
                element.rect.x,
                baseline,
                &format_opacity(element.color.a),
            );
        }
    }

    builder.build(layout.viewport)
}

/// Format an element fill as SVG attributes
fn format_fill(color: &Rgba) -> String {
    format!(r#" fill="{}"{}"#, color.css(), format_opacity(color.a))
}

/// Format an alpha channel as a fill-opacity attribute, empty when opaque
fn format_opacity(alpha: f64) -> String {
    if alpha < 1.0 {
        format!(r#" fill-opacity="{}""#, alpha)
    } else {
        String::new()
    }
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{PlacedElement, Rect};

    fn sample_layout() -> Layout {
        Layout {
            viewport: Viewport::new(800.0, 600.0),
            elements: vec![
                PlacedElement {
                    name: "Box".to_string(),
                    rect: Rect::new(10.0, 20.0, 100.0, 50.0),
                    color: Rgba::new(1.0, 0.0, 0.0, 1.0),
                    text: "hello".to_string(),
                },
                PlacedElement {
                    name: "Panel".to_string(),
                    rect: Rect::new(200.0, 20.0, 120.0, 80.0),
                    color: Rgba::new(0.0, 0.0, 1.0, 0.5),
                    text: String::new(),
                },
            ],
        }
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a < b"), "a &lt; b");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml("<tag>"), "&lt;tag&gt;");
    }

    #[test]
    fn test_render_basic_structure() {
        let svg = render_svg(&sample_layout(), &SvgConfig::default());

        assert!(svg.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(svg.contains(r#"width="800" height="600" viewBox="0 0 800 600""#));
        assert!(svg.contains(r##"fill="#003366""##));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_render_element_rect() {
        let svg = render_svg(&sample_layout(), &SvgConfig::default());

        assert!(svg.contains(r#"id="Box""#));
        assert!(svg.contains("al-element"));
        assert!(svg.contains(r##"x="10" y="20" width="100" height="50" fill="#ff0000""##));
    }

    #[test]
    fn test_render_translucent_fill() {
        let svg = render_svg(&sample_layout(), &SvgConfig::default());

        assert!(svg.contains(r##"fill="#0000ff" fill-opacity="0.5""##));
        // Opaque fills carry no fill-opacity attribute.
        assert!(!svg.contains(r##"fill="#ff0000" fill-opacity"##));
    }

    #[test]
    fn test_label_baseline_uses_font_size() {
        let svg = render_svg(&sample_layout(), &SvgConfig::default());

        // Default font size is 16, so the baseline lands at y = 20 + 16.
        assert!(svg.contains(r#"<text class="al-label" x="10" y="36">hello</text>"#));
    }

    #[test]
    fn test_empty_text_emits_no_label() {
        let mut layout = sample_layout();
        layout.elements.remove(0);
        let svg = render_svg(&layout, &SvgConfig::default());

        assert!(!svg.contains("<text"));
    }

    #[test]
    fn test_text_content_is_escaped() {
        let mut layout = sample_layout();
        layout.elements[0].text = "<Tools & Co>".to_string();
        let svg = render_svg(&layout, &SvgConfig::default());

        assert!(svg.contains("&lt;Tools &amp; Co&gt;"));
    }

    #[test]
    fn test_registration_order_is_z_order() {
        let svg = render_svg(&sample_layout(), &SvgConfig::default());

        let first = svg.find(r#"id="Box""#).unwrap();
        let second = svg.find(r#"id="Panel""#).unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_theme_style_block() {
        let theme = Theme {
            font_family: "monospace".to_string(),
            font_size: 12.0,
            ..Theme::default()
        };
        let svg = render_svg_with_theme(&sample_layout(), &SvgConfig::default(), &theme);

        assert!(svg.contains(r#".al-label { font-family: "monospace"; font-size: 12px; fill: #ffffff; }"#));
        // Baseline follows the theme font size.
        assert!(svg.contains(r#"y="32""#));
    }

    #[test]
    fn test_compact_output() {
        let config = SvgConfig::new().with_pretty_print(false);
        let svg = render_svg(&sample_layout(), &config);

        assert!(!svg.contains('\n'));
    }

    #[test]
    fn test_not_standalone_omits_declaration() {
        let config = SvgConfig::new().with_standalone(false);
        let svg = render_svg(&sample_layout(), &config);

        assert!(svg.starts_with("<svg"));
    }

    #[test]
    fn test_custom_class_prefix() {
        let config = SvgConfig::new().with_class_prefix("my-");
        let svg = render_svg(&sample_layout(), &config);

        assert!(svg.contains("my-element"));
        assert!(svg.contains("my-background"));
        assert!(!svg.contains("al-"));
    }
}
