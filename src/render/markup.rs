//! Static markup for the hero section.
//!
//! Produces the element skeleton the surface adapters address: ids come from
//! [`ElementId::dom_id`], cube faces from [`face_asset`]. Inline styles carry the progress-0
//! frame so the page is correct before the first scroll update.

use crate::{
    assets::naming::{FACE_COUNT, face_asset},
    eval::mapper::VisualState,
    foundation::error::HeroResult,
    render::css::inline_style,
    render::surface::{ElementId, ElementStyle, styles_for},
};
use std::fmt::Write as _;

/// Copy shown in the hero.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeroCopy {
    /// First heading.
    pub heading: String,
    /// Second heading title.
    pub subheading: String,
    /// Second heading paragraph.
    pub body: String,
    /// Heading of the section after the pin.
    pub next_section: String,
}

impl Default for HeroCopy {
    fn default() -> Self {
        Self {
            heading: "The First Media Company crafted For the digital First generation"
                .to_string(),
            subheading: "Where innovation meets precision".to_string(),
            body: "Symphonia unites visionary thinkers, creative architects, and analytical \
                   experts, collaborating seamlessly to transform challenges into \
                   opportunities. Together, we deliver tailored solutions that drive impact \
                   and inspire growth."
                .to_string(),
            next_section: "Your next section goes here".to_string(),
        }
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn style_attr(styles: &[(ElementId, ElementStyle)], id: ElementId) -> String {
    styles
        .iter()
        .find(|(e, _)| *e == id)
        .map(|(_, s)| inline_style(s))
        .filter(|s| !s.is_empty())
        .map(|s| format!(" style=\"{s}\""))
        .unwrap_or_default()
}

/// Render the hero section and the section following it.
///
/// `initial` is the frame baked into inline styles; `image_base` is the directory cube face
/// images are served from.
pub fn render_hero_html(
    initial: &VisualState,
    copy: &HeroCopy,
    image_base: &str,
) -> HeroResult<String> {
    let styles = styles_for(initial);
    let mut html = String::new();

    writeln!(html, "<div class=\"main\">")?;
    writeln!(html, "  <section class=\"sticky\" id=\"hero-sticky\">")?;

    writeln!(
        html,
        "    <div class=\"logo\" id=\"{}\"{}>",
        ElementId::Logo.dom_id(),
        style_attr(&styles, ElementId::Logo)
    )?;
    for col in 0..3 {
        writeln!(html, "      <div class=\"col\">")?;
        for row in 1..=2 {
            writeln!(
                html,
                "        <div class=\"block block{}\"></div>",
                col * 2 + row
            )?;
        }
        writeln!(html, "      </div>")?;
    }
    writeln!(html, "    </div>")?;

    writeln!(
        html,
        "    <div class=\"cubes\" id=\"{}\"{}>",
        ElementId::CubesContainer.dom_id(),
        style_attr(&styles, ElementId::CubesContainer)
    )?;
    for cube in &initial.cubes {
        let id = ElementId::Cube(cube.index);
        let number = cube.index + 1;
        writeln!(
            html,
            "      <div class=\"cube {}\" id=\"{}\"{}>",
            escape(&cube.key),
            id.dom_id(),
            style_attr(&styles, id)
        )?;
        for face_index in 1..=FACE_COUNT {
            let asset = face_asset(image_base, number, face_index)?;
            writeln!(
                html,
                "        <div class=\"{}\"><img class=\"i\" src=\"{}\" alt=\"{}\" loading=\"{}\" fetchpriority=\"{}\"></div>",
                asset.face.name(),
                escape(&asset.src),
                escape(&asset.alt),
                asset.priority.loading_attr(),
                asset.priority.fetch_priority_attr()
            )?;
        }
        writeln!(html, "      </div>")?;
    }
    writeln!(html, "    </div>")?;

    writeln!(
        html,
        "    <div class=\"heading\" id=\"{}\"{}>",
        ElementId::Heading1.dom_id(),
        style_attr(&styles, ElementId::Heading1)
    )?;
    writeln!(html, "      <h1>{}</h1>", escape(&copy.heading))?;
    writeln!(html, "    </div>")?;

    writeln!(
        html,
        "    <div class=\"subheading\" id=\"{}\"{}>",
        ElementId::Heading2.dom_id(),
        style_attr(&styles, ElementId::Heading2)
    )?;
    writeln!(html, "      <h2>{}</h2>", escape(&copy.subheading))?;
    writeln!(html, "      <p>{}</p>", escape(&copy.body))?;
    writeln!(html, "    </div>")?;
    writeln!(html, "  </section>")?;

    writeln!(html, "  <section class=\"about\">")?;
    writeln!(html, "    <h2>{}</h2>", escape(&copy.next_section))?;
    writeln!(html, "  </section>")?;
    writeln!(html, "</div>")?;

    Ok(html)
}

#[cfg(test)]
#[path = "../../tests/unit/render/markup.rs"]
mod tests;
