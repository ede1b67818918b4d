//! Core types for the layout solver

/// Viewport extent in layout units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A resolved rectangle: position plus extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Zero-sized rectangle at the origin.
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Right edge x-coordinate.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate.
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::zero()
    }
}

/// Declared content extent, used when a side pair does not pin the size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// RGBA color with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// CSS hex string for the opaque channels, e.g. `#336699`.
    ///
    /// Alpha is not encoded here; renderers emit it separately.
    pub fn css(&self) -> String {
        let channel = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(self.r),
            channel(self.g),
            channel(self.b)
        )
    }
}

impl From<[f64; 4]> for Rgba {
    fn from(channels: [f64; 4]) -> Self {
        Self::new(channels[0], channels[1], channels[2], channels[3])
    }
}

/// One side of a rectangle, also the anchor edge read on a target element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

impl Side {
    /// Constraint slot for this side: left, right, top, bottom.
    pub fn slot(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
            Side::Top => 2,
            Side::Bottom => 3,
        }
    }
}

/// What a constraint is anchored to.
///
/// Screen edges resolve against the viewport and add no dependency edge;
/// an element target reads the already-computed rectangle of that vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorTarget {
    Unconstrained,
    ScreenLeft,
    ScreenRight,
    ScreenTop,
    ScreenBottom,
    Element(usize),
}

/// One resolved anchor constraint: read `side` of `target`, shift by
/// `offset` (added for left/top slots, subtracted for right/bottom slots).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraint {
    pub target: AnchorTarget,
    pub side: Side,
    pub offset: f64,
}

impl Constraint {
    /// The absent constraint; its anchor value is NaN.
    pub fn unconstrained() -> Self {
        Self {
            target: AnchorTarget::Unconstrained,
            side: Side::Left,
            offset: 0.0,
        }
    }
}

impl Default for Constraint {
    fn default() -> Self {
        Self::unconstrained()
    }
}

/// Dependency-graph vertex payload: one named element with its declared
/// content, four constraint slots, and the rectangle the solver fills in.
#[derive(Debug, Clone)]
pub struct Element {
    pub name: String,
    pub text: String,
    pub color: Rgba,
    pub declared: Size,
    pub constraints: [Constraint; 4],
    pub rect: Rect,
}

impl Element {
    pub fn new(
        name: impl Into<String>,
        text: impl Into<String>,
        color: Rgba,
        declared: Size,
    ) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            color,
            declared,
            constraints: [Constraint::unconstrained(); 4],
            rect: Rect::zero(),
        }
    }
}

/// Read-only view of one placed element, handed to presentation code.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedElement {
    pub name: String,
    pub rect: Rect,
    pub color: Rgba,
    pub text: String,
}

/// Result of a successful pass: every element placed, in registration
/// order (which is also the z-order).
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub viewport: Viewport,
    pub elements: Vec<PlacedElement>,
}

impl Layout {
    /// Look up a placed element by name.
    pub fn element(&self, name: &str) -> Option<&PlacedElement> {
        self.elements.iter().find(|element| element.name == name)
    }
}
