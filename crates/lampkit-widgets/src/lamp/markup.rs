//! HTML and CSS export of a lamp.

use super::{LampToggle, LampVisual, HALO_RINGS};
use std::fmt::Write as _;

/// Clip path of the shade.
const SHADE_CLIP: &str = "polygon(8% 0%, 92% 0%, 88% 100%, 12% 100%)";

/// Clip path of the inner light.
const LIGHT_CLIP: &str = "polygon(0% 0%, 94% 0%, 91% 50%, 9% 50%)";

const BASE_RULES: &str = "\
.lamp-toggle { display: flex; flex-direction: column; align-items: center; }
.lamp-toggle--fixed { position: fixed; top: 16px; left: 50%; transform: translateX(-50%); z-index: 10; }
.lamp-toggle--inline { position: relative; }
.lamp-body { position: relative; cursor: pointer; }
.lamp-halo { position: absolute; inset: 0; z-index: 0; }
.lamp-halo-ring { position: absolute; border-radius: 9999px; }
.lamp-shade { position: relative; z-index: 10; width: 100%; height: 100%; }
.lamp-light { position: absolute; inset: 4px; border-radius: 2px; }
.lamp-detail { position: absolute; left: 50%; transform: translateX(-50%); height: 2px; }
.lamp-detail--top { top: 4px; width: 96px; }
.lamp-detail--bottom { bottom: 4px; width: 128px; }
";

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

fn shadow_css(visual: &LampVisual) -> String {
    visual
        .shadows()
        .iter()
        .map(lampkit_core::Shadow::to_css)
        .collect::<Vec<_>>()
        .join(", ")
}

impl LampToggle {
    /// Class list of the outer element.
    #[must_use]
    pub fn class_list(&self) -> String {
        let config = self.config();
        let mut classes = format!(
            "lamp-toggle lamp-toggle--{} {} {}",
            config.size,
            if config.is_on() { "lamp-toggle--on" } else { "lamp-toggle--off" },
            config.placement.css_class()
        );
        let extra = config.extra_classes.trim();
        if !extra.is_empty() {
            classes.push(' ');
            classes.push_str(extra);
        }
        classes
    }

    /// Render the lamp at its current animation state as HTML.
    #[must_use]
    pub fn to_html(&self) -> String {
        let visual = self.current_visual();
        let dims = self.dimensions();
        let config = self.config();
        let (top_detail, bottom_detail) = visual.detail_colors();

        let mut html = String::new();
        let _ = write!(html, "<div class=\"{}\"", escape_attr(&self.class_list()));
        if let Some(id) = &config.test_id {
            let _ = write!(html, " data-testid=\"{}\"", escape_attr(id));
        }
        html.push_str(">\n");

        let _ = writeln!(
            html,
            "  <div class=\"lamp-cable\" style=\"width: {}px; height: {}px; transform: scaleY({:.3}); background: {}\"></div>",
            dims.cable_width,
            dims.cable_length,
            visual.cable_scale_y,
            visual.cable_fill().to_css()
        );
        let _ = writeln!(
            html,
            "  <div class=\"lamp-body\" role=\"switch\" aria-checked=\"{}\" style=\"width: {}px; height: {}px; transform: scale({:.3})\">",
            config.is_on(),
            dims.body_width,
            dims.body_height,
            visual.body_scale
        );

        let _ = writeln!(
            html,
            "    <div class=\"lamp-halo\" style=\"opacity: {:.3}; transform: scale({:.3})\">",
            visual.halo_opacity, visual.halo_scale
        );
        for (ring, fill) in HALO_RINGS.into_iter().zip(LampVisual::halo_fills()) {
            let _ = writeln!(
                html,
                "      <div class=\"lamp-halo-ring\" style=\"inset: -{ring}px; background: {}\"></div>",
                fill.to_css()
            );
        }
        html.push_str("    </div>\n");

        let _ = writeln!(
            html,
            "    <div class=\"lamp-shade\" style=\"clip-path: {SHADE_CLIP}; background: {}; box-shadow: {}\">",
            visual.body_fill().to_css(),
            shadow_css(&visual)
        );
        let _ = writeln!(
            html,
            "      <div class=\"lamp-light\" style=\"clip-path: {LIGHT_CLIP}; opacity: {:.3}; background: {}\"></div>",
            visual.inner_light_opacity,
            LampVisual::inner_light_fill().to_css()
        );
        let _ = writeln!(
            html,
            "      <div class=\"lamp-detail lamp-detail--top\" style=\"background: {}\"></div>",
            top_detail.to_css()
        );
        let _ = writeln!(
            html,
            "      <div class=\"lamp-detail lamp-detail--bottom\" style=\"background: {}\"></div>",
            bottom_detail.to_css()
        );
        html.push_str("    </div>\n  </div>\n</div>\n");
        html
    }

    /// Stylesheet for the lamp's structural classes and its size variant.
    #[must_use]
    pub fn to_css(&self) -> String {
        let dims = self.dimensions();
        let size = self.config().size;
        let mut css = String::from(BASE_RULES);
        let _ = writeln!(
            css,
            ".lamp-toggle--{size} .lamp-body {{ width: {}px; height: {}px; }}",
            dims.body_width, dims.body_height
        );
        let _ = writeln!(
            css,
            ".lamp-toggle--{size} .lamp-cable {{ width: {}px; height: {}px; }}",
            dims.cable_width, dims.cable_length
        );
        css
    }
}
