//! CSS rendition of element styles, plus an in-memory CSS document surface.

use crate::render::surface::{ElementId, ElementStyle, RenderSurface, Transform};
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

/// Format a number for CSS: at most four decimals, no negative zero.
pub fn css_number(v: f64) -> String {
    let r = (v * 10_000.0).round() / 10_000.0;
    let r = if r == 0.0 { 0.0 } else { r };
    format!("{r}")
}

/// CSS value of a transform.
pub fn transform_value(t: &Transform) -> String {
    match *t {
        Transform::Centered { scale } => {
            format!("translate(-50%, -50%) scale({})", css_number(scale))
        }
        Transform::Cube {
            z_px,
            rotate_x,
            rotate_y,
            rotate_z,
        } => format!(
            "translate3d(-50%, -50%, {}px) rotateX({}deg) rotateY({}deg) rotateZ({}deg)",
            css_number(z_px),
            css_number(rotate_x),
            css_number(rotate_y),
            css_number(rotate_z),
        ),
    }
}

/// CSS declarations for a style, in a stable property order.
pub fn declarations(style: &ElementStyle) -> Vec<(&'static str, String)> {
    let mut out = Vec::new();
    if let Some(v) = style.top_pct {
        out.push(("top", format!("{}%", css_number(v))));
    }
    if let Some(v) = style.left_pct {
        out.push(("left", format!("{}%", css_number(v))));
    }
    if let Some(t) = &style.transform {
        out.push(("transform", transform_value(t)));
    }
    if let Some(v) = style.blur_px {
        out.push(("filter", format!("blur({}px)", css_number(v))));
    }
    if let Some(v) = style.opacity {
        out.push(("opacity", css_number(v)));
    }
    out
}

/// Inline `style` attribute text for a style.
pub fn inline_style(style: &ElementStyle) -> String {
    declarations(style)
        .into_iter()
        .map(|(k, v)| format!("{k}: {v};"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// In-memory stand-in for the page: which elements exist and their inline styles.
#[derive(Clone, Debug, Default)]
pub struct CssDocument {
    present: BTreeSet<ElementId>,
    styles: BTreeMap<ElementId, BTreeMap<&'static str, String>>,
    writes: usize,
}

impl CssDocument {
    /// Current value of a property.
    pub fn property(&self, id: ElementId, name: &str) -> Option<&str> {
        self.styles
            .get(&id)
            .and_then(|m| m.get(name))
            .map(String::as_str)
    }

    /// Inline style text of an element, properties sorted by name.
    pub fn style_text(&self, id: ElementId) -> String {
        self.styles
            .get(&id)
            .map(|m| {
                m.iter()
                    .map(|(k, v)| format!("{k}: {v};"))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .unwrap_or_default()
    }

    /// Total element writes so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

/// Shared handle to a [`CssDocument`]; clones observe the same document.
#[derive(Clone, Debug, Default)]
pub struct CssSurface {
    doc: Rc<RefCell<CssDocument>>,
}

impl CssSurface {
    /// Document containing every hero element.
    pub fn with_all_elements() -> Self {
        let s = Self::default();
        for id in ElementId::NAMED {
            s.attach(id);
        }
        for i in 0..crate::scene::model::CUBE_COUNT {
            s.attach(ElementId::Cube(i));
        }
        s
    }

    /// Make an element present.
    pub fn attach(&self, id: ElementId) {
        self.doc.borrow_mut().present.insert(id);
    }

    /// Remove an element; its styles are dropped.
    pub fn detach(&self, id: ElementId) {
        let mut doc = self.doc.borrow_mut();
        doc.present.remove(&id);
        doc.styles.remove(&id);
    }

    /// Current value of a property.
    pub fn property(&self, id: ElementId, name: &str) -> Option<String> {
        self.doc.borrow().property(id, name).map(str::to_string)
    }

    /// Inline style text of an element.
    pub fn style_text(&self, id: ElementId) -> String {
        self.doc.borrow().style_text(id)
    }

    /// Total element writes so far.
    pub fn writes(&self) -> usize {
        self.doc.borrow().writes()
    }
}

impl RenderSurface for CssSurface {
    type Handle = ElementId;

    fn resolve(&mut self, element: ElementId) -> Option<ElementId> {
        self.doc
            .borrow()
            .present
            .contains(&element)
            .then_some(element)
    }

    fn write(&mut self, handle: &ElementId, style: &ElementStyle) -> bool {
        let mut doc = self.doc.borrow_mut();
        // A handle can outlive its element; writes to a detached element are dropped.
        if !doc.present.contains(handle) {
            return false;
        }
        doc.writes += 1;
        let props = doc.styles.entry(*handle).or_default();
        for (k, v) in declarations(style) {
            props.insert(k, v);
        }
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/css.rs"]
mod tests;
