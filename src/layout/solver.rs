//! Constraint-dependency solver
//!
//! A pass walks fixed stages: bind every element name to a dependency-graph
//! vertex, resolve anchor targets and add one edge per element-target
//! constraint, reject cycles via strongly-connected components, derive the
//! evaluation order by reversing the DFS postorder, then compute each
//! rectangle in that order in a single forward sweep. Everything except the
//! returned [`Layout`] is rebuilt from scratch on the next pass.

use std::collections::HashMap;

use crate::graph::DirectedGraph;
use crate::source::{Document, ElementDef};

use super::error::LayoutError;
use super::find_similar;
use super::types::{
    AnchorTarget, Constraint, Element, Layout, PlacedElement, Rect, Side, Size, Viewport,
};

/// Compute a [`Layout`] for `document` against `viewport`.
///
/// Fails without producing any geometry if a name is duplicated, a
/// constraint targets an unknown name, or the constraints form a cycle.
pub fn solve(document: &Document, viewport: Viewport) -> Result<Layout, LayoutError> {
    let mut solver = Solver::new(viewport);
    solver.register(document)?;
    solver.certify_acyclic()?;
    solver.derive_order();
    solver.evaluate();
    Ok(solver.layout())
}

struct Solver {
    graph: DirectedGraph<Element>,
    /// Write-once registry, pre-seeded with the reserved screen-edge names.
    names: HashMap<String, AnchorTarget>,
    /// Topological evaluation order, valid once acyclicity is certified.
    order: Vec<usize>,
    viewport: Viewport,
}

impl Solver {
    fn new(viewport: Viewport) -> Self {
        let names = HashMap::from([
            ("ScreenLeft".to_string(), AnchorTarget::ScreenLeft),
            ("ScreenRight".to_string(), AnchorTarget::ScreenRight),
            ("ScreenTop".to_string(), AnchorTarget::ScreenTop),
            ("ScreenBottom".to_string(), AnchorTarget::ScreenBottom),
        ]);
        Self {
            graph: DirectedGraph::new(),
            names,
            order: Vec::new(),
            viewport,
        }
    }

    /// Two-phase registration: bind all names first so constraints may
    /// target elements defined later in the document (or mutually, which
    /// the cycle check then rejects), then resolve every anchor.
    fn register(&mut self, document: &Document) -> Result<(), LayoutError> {
        for (name, def) in &document.elements {
            self.bind(name, def)?;
        }
        for (index, (name, def)) in document.elements.iter().enumerate() {
            self.resolve(index, name, def)?;
        }
        Ok(())
    }

    fn bind(&mut self, name: &str, def: &ElementDef) -> Result<(), LayoutError> {
        if self.names.contains_key(name) {
            return Err(LayoutError::duplicate(name));
        }
        let element = Element::new(
            name,
            def.content.text.as_str(),
            def.content.color(),
            Size::new(def.content.width, def.content.height),
        );
        let index = self.graph.push_vertex(element);
        self.names.insert(name.to_string(), AnchorTarget::Element(index));
        Ok(())
    }

    fn resolve(&mut self, index: usize, name: &str, def: &ElementDef) -> Result<(), LayoutError> {
        for (side, anchor) in def.constraints.entries() {
            if let Some(anchor) = anchor {
                let target = match self.names.get(&anchor.name) {
                    Some(&target) => target,
                    None => {
                        let suggestions = find_similar(self.names.keys(), &anchor.name, 2);
                        return Err(LayoutError::unknown_reference(
                            name,
                            &anchor.name,
                            suggestions,
                        ));
                    }
                };
                self.graph.vertex_mut(index).value.constraints[side.slot()] = Constraint {
                    target,
                    side: anchor.direction.side(),
                    offset: anchor.value,
                };
                // Screen edges are constants; only element targets order
                // the evaluation.
                if let AnchorTarget::Element(source) = target {
                    self.graph.push_edge(source, index, 0);
                }
            }
        }
        Ok(())
    }

    /// Reject any dependency cycle, including self-references, which
    /// survive condensation as single-member components with a self-loop
    /// edge.
    fn certify_acyclic(&self) -> Result<(), LayoutError> {
        let condensation = self.graph.strongly_connected();
        for component in condensation.vertices() {
            let index = component.index();
            let has_self_loop = condensation
                .edges_from(index)
                .iter()
                .any(|edge| edge.destination == index);
            if component.value.len() > 1 || has_self_loop {
                let members = component
                    .value
                    .iter()
                    .map(|element| element.name.clone())
                    .collect();
                return Err(LayoutError::cycle(members));
            }
        }
        Ok(())
    }

    fn derive_order(&mut self) {
        self.order = self.graph.postorder(0);
        self.order.reverse();
    }

    /// One forward sweep in topological order. For each axis the anchor
    /// pair decides position and extent; a missing anchor reads as NaN and
    /// selects the fallback branch.
    fn evaluate(&mut self) {
        for position in 0..self.order.len() {
            let index = self.order[position];
            let (constraints, declared) = {
                let element = &self.graph.vertex(index).value;
                (element.constraints, element.declared)
            };
            let [left_c, right_c, top_c, bottom_c] = constraints;
            let left = self.anchor_value(left_c) + left_c.offset;
            let right = self.anchor_value(right_c) - right_c.offset;
            let top = self.anchor_value(top_c) + top_c.offset;
            let bottom = self.anchor_value(bottom_c) - bottom_c.offset;

            let (x, width) = if left.is_nan() {
                if right.is_nan() {
                    (0.0, 0.0)
                } else {
                    (right - declared.width, declared.width)
                }
            } else if right.is_nan() {
                (left, declared.width)
            } else if declared.width != 0.0 {
                // Pinned on both sides with a declared width: centered in
                // the viewport, both offsets ignored.
                ((self.viewport.width - declared.width) / 2.0, declared.width)
            } else {
                (left, right - left)
            };

            let (y, height) = if top.is_nan() {
                if bottom.is_nan() {
                    (0.0, 0.0)
                } else {
                    (bottom - declared.height, declared.height)
                }
            } else if bottom.is_nan() {
                (top, declared.height)
            } else if declared.height != 0.0 {
                (
                    (self.viewport.height - declared.height) / 2.0,
                    declared.height,
                )
            } else {
                (top, bottom - top)
            };

            self.graph.vertex_mut(index).value.rect = Rect::new(x, y, width, height);
        }
    }

    /// Value an anchor resolves to. Element targets read geometry computed
    /// earlier in the sweep; the evaluation order guarantees it is final.
    fn anchor_value(&self, constraint: Constraint) -> f64 {
        match constraint.target {
            AnchorTarget::Unconstrained => f64::NAN,
            AnchorTarget::ScreenLeft => 0.0,
            AnchorTarget::ScreenRight => self.viewport.width,
            AnchorTarget::ScreenTop => 0.0,
            AnchorTarget::ScreenBottom => self.viewport.height,
            AnchorTarget::Element(index) => {
                let rect = self.graph.vertex(index).value.rect;
                match constraint.side {
                    Side::Left => rect.x,
                    Side::Right => rect.right(),
                    Side::Top => rect.y,
                    Side::Bottom => rect.bottom(),
                }
            }
        }
    }

    /// Placed elements in registration order, which is also the z-order.
    fn layout(&self) -> Layout {
        let elements = self
            .graph
            .vertices()
            .iter()
            .map(|vertex| PlacedElement {
                name: vertex.value.name.clone(),
                rect: vertex.value.rect,
                color: vertex.value.color,
                text: vertex.value.text.clone(),
            })
            .collect();
        Layout {
            viewport: self.viewport,
            elements,
        }
    }
}
