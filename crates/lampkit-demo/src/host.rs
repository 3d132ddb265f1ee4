//! The demo page: a main lamp, a size comparison row and the controls that
//! drive them.
//!
//! The host owns the theme. Every lamp is rendered from the same
//! [`DemoState`]; clicking any lamp or the footer button flips `is_dark` and
//! re-renders all of them.

use crate::page::{PageStyle, PageSurface};
use crate::state::{DemoMessage, DemoState, DURATION_STEP, MAX_DURATION, MIN_DURATION};
use lampkit_core::{
    widget::{FontWeight, LayoutResult},
    Canvas, Color, Constraints, Event, RecordingCanvas, Rect, Size, Store, TypeId, Update, Widget,
    WidgetMessage,
};
use lampkit_widgets::{
    Button, ButtonClicked, LampConfig, LampPlacement, LampSize, LampToggle, LampToggled,
    LampVisual, Slider, SliderChanged, Text,
};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt::{self, Write as _};

/// Test ID of the fixed lamp at the top of the page.
pub const MAIN_LAMP_ID: &str = "main-lamp";
/// Test ID of the footer button.
pub const TOGGLE_BUTTON_ID: &str = "toggle-theme";
/// Test ID of the speed slider.
pub const SPEED_SLIDER_ID: &str = "speed-slider";
/// Test ID of the speed label.
pub const SPEED_LABEL_ID: &str = "speed-label";
/// Test ID of the theme badge.
pub const THEME_BADGE_ID: &str = "theme-badge";

const CONTENT_TOP: f32 = 96.0;
const SLIDER_WIDTH: f32 = 320.0;

/// Test ID of the button selecting `size`.
#[must_use]
pub fn size_button_id(size: LampSize) -> String {
    format!("size-{}", size.as_str())
}

/// Test ID of the comparison lamp of `size`.
#[must_use]
pub fn comparison_lamp_id(size: LampSize) -> String {
    format!("lamp-{}", size.as_str())
}

/// Text of the speed label.
#[must_use]
pub fn speed_label(seconds: f64) -> String {
    format!("Animation Speed: {seconds}s")
}

/// Returned from [`DemoHost`]'s `event` when the theme flipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeChanged {
    /// New theme
    pub is_dark: bool,
}

struct Palette {
    foreground: Color,
    button: Color,
    button_hover: Color,
    button_text: Color,
}

impl Palette {
    const fn for_theme(is_dark: bool) -> Self {
        if is_dark {
            Self {
                foreground: Color::WHITE,
                button: Color::from_rgba8(0x37, 0x41, 0x51, 0xff),
                button_hover: Color::from_rgba8(0x4b, 0x55, 0x63, 0xff),
                button_text: Color::from_rgba8(0xd1, 0xd5, 0xdb, 0xff),
            }
        } else {
            Self {
                foreground: Color::from_rgba8(0x11, 0x18, 0x27, 0xff),
                button: Color::from_rgba8(0xe5, 0xe7, 0xeb, 0xff),
                button_hover: Color::from_rgba8(0xd1, 0xd5, 0xdb, 0xff),
                button_text: Color::from_rgba8(0x37, 0x41, 0x51, 0xff),
            }
        }
    }
}

fn lamp_config(
    state: &DemoState,
    size: LampSize,
    placement: LampPlacement,
    id: String,
) -> LampConfig {
    LampConfig::new(state.is_dark)
        .size(size)
        .animation_duration(state.animation_duration)
        .placement(placement)
        .test_id(id)
}

fn natural_size(widget: &dyn Widget) -> Size {
    widget.measure(Constraints::unbounded())
}

/// Lay `items` out left to right, centered on `center_x` and bottom-aligned.
/// Returns the row height.
fn layout_row(items: &mut [&mut dyn Widget], center_x: f32, top: f32, gap: f32) -> f32 {
    let sizes: Vec<Size> = items.iter().map(|w| natural_size(&**w)).collect();
    let total = sizes.iter().map(|s| s.width).sum::<f32>()
        + gap * sizes.len().saturating_sub(1) as f32;
    let height = sizes.iter().map(|s| s.height).fold(0.0, f32::max);

    let mut x = center_x - total / 2.0;
    for (item, size) in items.iter_mut().zip(&sizes) {
        item.layout(Rect::new(x, top + height - size.height, size.width, size.height));
        x += size.width + gap;
    }
    height
}

/// Lay one widget out centered on `center_x`. Returns its height.
fn layout_centered(widget: &mut dyn Widget, center_x: f32, top: f32) -> f32 {
    let size = natural_size(widget);
    widget.layout(Rect::new(center_x - size.width / 2.0, top, size.width, size.height));
    size.height
}

/// The demo page.
pub struct DemoHost {
    store: Store<DemoState>,
    main_lamp: LampToggle,
    title: Text,
    theme_badge: Text,
    size_buttons: Vec<Button>,
    speed_label: Text,
    speed_slider: Slider,
    comparison_lamps: Vec<LampToggle>,
    captions: Vec<Text>,
    toggle_button: Button,
    surface: Box<dyn PageSurface>,
    page_style: PageStyle,
    mounted: bool,
    viewport: Rect,
}

impl DemoHost {
    /// Mount the page. Lamps start at rest and the initial page style is
    /// applied to `surface` right away.
    pub fn new(state: DemoState, surface: impl PageSurface + 'static) -> Self {
        let main_lamp = LampToggle::new(lamp_config(
            &state,
            state.selected_size,
            LampPlacement::FixedTopCenter,
            MAIN_LAMP_ID.to_string(),
        ));
        let comparison_lamps = LampSize::ALL
            .into_iter()
            .map(|size| {
                LampToggle::new(lamp_config(
                    &state,
                    size,
                    LampPlacement::Inline,
                    comparison_lamp_id(size),
                ))
            })
            .collect();
        let captions = LampSize::ALL
            .into_iter()
            .map(|size| Text::new(size.label()).font_size(14.0))
            .collect();
        let size_buttons = LampSize::ALL
            .into_iter()
            .map(|size| Button::new(size.label()).with_test_id(size_button_id(size)))
            .collect();

        let mut host = Self {
            page_style: PageStyle::for_theme(state.is_dark),
            store: Store::new(state),
            main_lamp,
            title: Text::new("Lamp Toggle")
                .font_size(48.0)
                .weight(FontWeight::Bold),
            theme_badge: Text::new("").with_test_id(THEME_BADGE_ID),
            size_buttons,
            speed_label: Text::new("")
                .font_size(14.0)
                .weight(FontWeight::Medium)
                .with_test_id(SPEED_LABEL_ID),
            speed_slider: Slider::new()
                .range(MIN_DURATION, MAX_DURATION)
                .step(DURATION_STEP)
                .with_test_id(SPEED_SLIDER_ID),
            comparison_lamps,
            captions,
            toggle_button: Button::new("Toggle Theme")
                .background(
                    Color::from_rgba8(0xf9, 0x73, 0x16, 0xff),
                    Color::from_rgba8(0xea, 0x58, 0x0c, 0xff),
                )
                .text_color(Color::WHITE)
                .with_test_id(TOGGLE_BUTTON_ID),
            surface: Box::new(surface),
            mounted: true,
            viewport: Rect::default(),
        };
        host.render();
        host.surface.apply(&host.page_style);
        tracing::debug!(is_dark = host.state().is_dark, "demo host mounted");
        host
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &DemoState {
        self.store.state()
    }

    /// Page style currently applied.
    #[must_use]
    pub const fn page_style(&self) -> &PageStyle {
        &self.page_style
    }

    /// The fixed lamp.
    #[must_use]
    pub const fn main_lamp(&self) -> &LampToggle {
        &self.main_lamp
    }

    /// Comparison lamp of `size`.
    #[must_use]
    pub fn comparison_lamp(&self, size: LampSize) -> &LampToggle {
        &self.comparison_lamps[size_index(size)]
    }

    /// Every lamp on the page, main lamp first.
    pub fn lamps(&self) -> impl Iterator<Item = &LampToggle> {
        std::iter::once(&self.main_lamp).chain(&self.comparison_lamps)
    }

    /// Button selecting `size`.
    #[must_use]
    pub fn size_button(&self, size: LampSize) -> &Button {
        &self.size_buttons[size_index(size)]
    }

    /// Speed slider.
    #[must_use]
    pub const fn speed_slider(&self) -> &Slider {
        &self.speed_slider
    }

    /// Whether [`Widget::unmount`] was called.
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Find a descendant by test ID.
    #[must_use]
    pub fn find(&self, test_id: &str) -> Option<&dyn Widget> {
        let mut found = None;
        self.visit_children(&mut |child| {
            if found.is_none() && child.test_id() == Some(test_id) {
                found = Some(child);
            }
        });
        found
    }

    /// Apply a message. Re-renders every child when the state changed and
    /// restyles the page when the theme flipped.
    pub fn dispatch(&mut self, msg: DemoMessage) -> Update {
        if !self.mounted {
            return Update::Unchanged;
        }
        let was_dark = self.state().is_dark;
        let update = self.store.dispatch(msg);
        if update.is_changed() {
            self.render();
            if self.state().is_dark != was_dark {
                self.page_style = PageStyle::for_theme(self.state().is_dark);
                self.surface.apply(&self.page_style);
            }
        }
        update
    }

    fn translate(message: &WidgetMessage) -> Option<DemoMessage> {
        if let Some(toggled) = message.downcast_ref::<LampToggled>() {
            tracing::debug!(was_dark = toggled.was_dark, "lamp clicked");
            return Some(DemoMessage::ToggleTheme);
        }
        if let Some(ButtonClicked { test_id }) = message.downcast_ref::<ButtonClicked>() {
            let id = test_id.as_deref()?;
            if id == TOGGLE_BUTTON_ID {
                return Some(DemoMessage::ToggleTheme);
            }
            return LampSize::ALL
                .into_iter()
                .find(|size| size_button_id(*size) == id)
                .map(DemoMessage::SelectSize);
        }
        message
            .downcast_ref::<SliderChanged>()
            .map(|changed| DemoMessage::SetAnimationDuration(changed.value))
    }

    /// Push the current state into every child.
    fn render(&mut self) {
        let state = self.store.state().clone();
        let palette = Palette::for_theme(state.is_dark);

        self.main_lamp.set_config(lamp_config(
            &state,
            state.selected_size,
            LampPlacement::FixedTopCenter,
            MAIN_LAMP_ID.to_string(),
        ));
        for (lamp, size) in self.comparison_lamps.iter_mut().zip(LampSize::ALL) {
            lamp.set_config(lamp_config(
                &state,
                size,
                LampPlacement::Inline,
                comparison_lamp_id(size),
            ));
        }

        for (button, size) in self.size_buttons.iter_mut().zip(LampSize::ALL) {
            button.set_selected(size == state.selected_size);
            button.set_palette(palette.button, palette.button_hover, palette.button_text);
        }

        let label = speed_label(state.animation_duration);
        self.speed_slider.set_value(state.animation_duration);
        self.speed_slider.set_accessible_name(label.clone());
        self.speed_label.set_content(label);
        self.theme_badge
            .set_content(format!("Current Theme: {}", state.theme_label()));

        for text in [&mut self.title, &mut self.theme_badge, &mut self.speed_label]
            .into_iter()
            .chain(self.captions.iter_mut())
        {
            text.set_color(palette.foreground);
        }

        // The main lamp may have changed size.
        if self.viewport != Rect::default() {
            self.layout(self.viewport);
        }
    }

    fn children_mut(&mut self) -> Vec<&mut dyn Widget> {
        let mut children: Vec<&mut dyn Widget> = Vec::new();
        children.push(&mut self.main_lamp);
        children.push(&mut self.title);
        children.push(&mut self.theme_badge);
        children.extend(self.size_buttons.iter_mut().map(|b| b as &mut dyn Widget));
        children.push(&mut self.speed_label);
        children.push(&mut self.speed_slider);
        children.extend(self.comparison_lamps.iter_mut().map(|l| l as &mut dyn Widget));
        children.extend(self.captions.iter_mut().map(|t| t as &mut dyn Widget));
        children.push(&mut self.toggle_button);
        children
    }

    /// Summary of the current frame.
    #[must_use]
    pub fn summary(&self) -> FrameSummary {
        let mut canvas = RecordingCanvas::new();
        self.paint(&mut canvas);
        FrameSummary {
            theme: self.state().theme_label(),
            state: self.state().clone(),
            page: self.page_style.clone(),
            theme_badge: self.theme_badge.content().to_string(),
            speed_label: self.speed_label.content().to_string(),
            main_lamp: LampSummary::of(&self.main_lamp),
            comparison: self.comparison_lamps.iter().map(LampSummary::of).collect(),
            animating: self.is_animating(),
            draw_commands: canvas.command_count(),
        }
    }

    /// Standalone HTML document of the current frame.
    #[must_use]
    pub fn to_html(&self) -> String {
        let state = self.state();
        let mut seen = HashSet::new();
        let css: String = self
            .lamps()
            .map(LampToggle::to_css)
            .collect::<Vec<_>>()
            .iter()
            .flat_map(|sheet| sheet.lines())
            .filter(|line| seen.insert(line.to_string()))
            .map(|line| format!("{line}\n"))
            .collect();

        let mut html = String::from(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>Lamp Toggle</title>\n<style>\n",
        );
        html.push_str(&css);
        html.push_str("</style>\n</head>\n");
        let _ = writeln!(html, "<body style=\"{}\">", self.page_style.to_css());
        html.push_str(&self.main_lamp.to_html());
        html.push_str("<main>\n<h1>Lamp Toggle</h1>\n");
        let _ = writeln!(
            html,
            "<p data-testid=\"{THEME_BADGE_ID}\">Current Theme: <strong>{}</strong></p>",
            state.theme_label()
        );

        html.push_str("<div class=\"size-buttons\">\n");
        for size in LampSize::ALL {
            let _ = writeln!(
                html,
                "  <button data-testid=\"{}\" aria-pressed=\"{}\">{}</button>",
                size_button_id(size),
                size == state.selected_size,
                size.label()
            );
        }
        html.push_str("</div>\n");

        let _ = writeln!(
            html,
            "<label for=\"{SPEED_SLIDER_ID}\" data-testid=\"{SPEED_LABEL_ID}\">{}</label>",
            speed_label(state.animation_duration)
        );
        let _ = writeln!(
            html,
            "<input id=\"{SPEED_SLIDER_ID}\" type=\"range\" min=\"{MIN_DURATION}\" max=\"{MAX_DURATION}\" step=\"{DURATION_STEP}\" value=\"{}\">",
            state.animation_duration
        );

        html.push_str("<section class=\"size-variations\">\n");
        for (lamp, size) in self.comparison_lamps.iter().zip(LampSize::ALL) {
            html.push_str("<figure>\n");
            html.push_str(&lamp.to_html());
            let _ = writeln!(html, "<figcaption>{}</figcaption>\n</figure>", size.label());
        }
        html.push_str("</section>\n");

        let _ = writeln!(
            html,
            "<footer><button data-testid=\"{TOGGLE_BUTTON_ID}\">Toggle Theme</button></footer>"
        );
        html.push_str("</main>\n</body>\n</html>\n");
        html
    }
}

const fn size_index(size: LampSize) -> usize {
    match size {
        LampSize::Small => 0,
        LampSize::Medium => 1,
        LampSize::Large => 2,
    }
}

impl fmt::Debug for DemoHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DemoHost")
            .field("state", self.state())
            .field("page_style", &self.page_style)
            .field("mounted", &self.mounted)
            .field("viewport", &self.viewport)
            .finish_non_exhaustive()
    }
}

impl Widget for DemoHost {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(Size::new(1280.0, 720.0))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.viewport = bounds;
        self.main_lamp.layout(bounds);

        let center_x = bounds.center().x;
        let mut y = bounds.y + CONTENT_TOP;
        y += layout_centered(&mut self.title, center_x, y) + 16.0;
        y += layout_centered(&mut self.theme_badge, center_x, y) + 32.0;

        {
            let mut row: Vec<&mut dyn Widget> = self
                .size_buttons
                .iter_mut()
                .map(|b| b as &mut dyn Widget)
                .collect();
            y += layout_row(&mut row, center_x, y, 8.0) + 16.0;
        }

        y += layout_centered(&mut self.speed_label, center_x, y) + 8.0;
        let slider_height = natural_size(&self.speed_slider).height;
        self.speed_slider.layout(Rect::new(
            center_x - SLIDER_WIDTH / 2.0,
            y,
            SLIDER_WIDTH,
            slider_height,
        ));
        y += slider_height + 48.0;

        {
            let mut row: Vec<&mut dyn Widget> = self
                .comparison_lamps
                .iter_mut()
                .map(|l| l as &mut dyn Widget)
                .collect();
            y += layout_row(&mut row, center_x, y, 32.0) + 8.0;
        }
        let mut caption_height = 0.0f32;
        for (caption, lamp) in self.captions.iter_mut().zip(&self.comparison_lamps) {
            caption_height =
                caption_height.max(layout_centered(caption, lamp.bounds().center().x, y));
        }
        y += caption_height + 48.0;

        layout_centered(&mut self.toggle_button, center_x, y);

        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        canvas.fill_rect(self.viewport, self.page_style.background);
        self.visit_children(&mut |child| {
            if !std::ptr::addr_eq(child, &self.main_lamp) {
                child.paint(canvas);
            }
        });
        // Fixed lamp stays on top.
        self.main_lamp.paint(canvas);
    }

    fn event(&mut self, event: &Event) -> Option<WidgetMessage> {
        if !self.mounted {
            return None;
        }
        match event {
            Event::Resize { width, height } => {
                self.layout(Rect::new(0.0, 0.0, *width, *height));
                return None;
            }
            // Carries no position; children pick up hover from the next move.
            Event::MouseEnter => return None,
            _ => {}
        }

        let messages: Vec<WidgetMessage> = self
            .children_mut()
            .into_iter()
            .filter_map(|child| child.event(event))
            .collect();

        let was_dark = self.state().is_dark;
        for message in &messages {
            if let Some(msg) = Self::translate(message) {
                self.dispatch(msg);
            }
        }
        let is_dark = self.state().is_dark;
        (is_dark != was_dark).then(|| Box::new(ThemeChanged { is_dark }) as WidgetMessage)
    }

    fn tick(&mut self, dt: f64) {
        self.main_lamp.tick(dt);
        for lamp in &mut self.comparison_lamps {
            lamp.tick(dt);
        }
    }

    fn is_animating(&self) -> bool {
        self.lamps().any(Widget::is_animating)
    }

    fn unmount(&mut self) {
        self.main_lamp.unmount();
        for lamp in &mut self.comparison_lamps {
            lamp.unmount();
        }
        self.mounted = false;
        tracing::debug!("demo host unmounted");
    }

    fn is_interactive(&self) -> bool {
        self.mounted
    }

    fn accessible_name(&self) -> Option<&str> {
        Some("Lamp Toggle")
    }

    fn test_id(&self) -> Option<&str> {
        Some("demo")
    }

    fn bounds(&self) -> Rect {
        self.viewport
    }

    fn visit_children<'a>(&'a self, visitor: &mut dyn FnMut(&'a dyn Widget)) {
        visitor(&self.main_lamp);
        visitor(&self.title);
        visitor(&self.theme_badge);
        for button in &self.size_buttons {
            visitor(button);
        }
        visitor(&self.speed_label);
        visitor(&self.speed_slider);
        for lamp in &self.comparison_lamps {
            visitor(lamp);
        }
        for caption in &self.captions {
            visitor(caption);
        }
        visitor(&self.toggle_button);
    }
}

/// Snapshot of one lamp for reports.
#[derive(Debug, Clone, Serialize)]
pub struct LampSummary {
    /// Test ID
    pub test_id: String,
    /// Size variant
    pub size: LampSize,
    /// Whether the lamp is lit
    pub is_on: bool,
    /// Whether the inner light pulses
    pub pulse_active: bool,
    /// Whether a transition is still running (the pulse counts)
    pub animating: bool,
    /// Laid-out bounds
    pub bounds: Rect,
    /// Interpolated visual
    pub visual: LampVisual,
}

impl LampSummary {
    fn of(lamp: &LampToggle) -> Self {
        Self {
            test_id: lamp.test_id().unwrap_or_default().to_string(),
            size: lamp.config().size,
            is_on: lamp.is_on(),
            pulse_active: lamp.is_pulsing(),
            animating: lamp.is_animating(),
            bounds: lamp.bounds(),
            visual: lamp.current_visual(),
        }
    }
}

/// Snapshot of the whole page for the CLI.
#[derive(Debug, Clone, Serialize)]
pub struct FrameSummary {
    /// "Light" or "Dark"
    pub theme: &'static str,
    /// Host state
    pub state: DemoState,
    /// Applied page style
    pub page: PageStyle,
    /// Theme badge text
    pub theme_badge: String,
    /// Speed label text
    pub speed_label: String,
    /// The fixed lamp
    pub main_lamp: LampSummary,
    /// Comparison lamps, small to large
    pub comparison: Vec<LampSummary>,
    /// Whether anything still animates
    pub animating: bool,
    /// Number of draw operations in the frame
    pub draw_commands: usize,
}

impl FrameSummary {
    /// Human-readable multi-line report.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Theme: {} (background {}, text {})",
            self.theme,
            self.page.background.to_hex(),
            self.page.foreground.to_hex()
        );
        let _ = writeln!(out, "Main lamp: {}", describe(&self.main_lamp));
        for lamp in &self.comparison {
            let _ = writeln!(out, "  {}", describe(lamp));
        }
        let _ = writeln!(out, "{}", self.theme_badge);
        let _ = writeln!(out, "{}", self.speed_label);
        let _ = writeln!(
            out,
            "Draw commands: {}{}",
            self.draw_commands,
            if self.animating { " (animating)" } else { "" }
        );
        out
    }
}

fn describe(lamp: &LampSummary) -> String {
    format!(
        "{} {} {}x{} at ({}, {}), {}{}",
        lamp.test_id,
        lamp.size,
        lamp.bounds.width,
        lamp.bounds.height,
        lamp.bounds.x,
        lamp.bounds.y,
        if lamp.is_on { "on" } else { "off" },
        if lamp.pulse_active { ", pulsing" } else { "" }
    )
}
