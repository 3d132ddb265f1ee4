//! What a lamp looks like: animated properties, their targets, and the
//! colors and shadows derived from them.

use super::config::LampConfig;
use lampkit_core::{Color, Fill, Shadow};
use serde::{Deserialize, Serialize};

/// Fixed duration of theme color transitions, independent of the lamp's
/// base duration.
pub const COLOR_TRANSITION: f64 = 0.5;

/// Length of one inner-light pulse cycle.
pub const PULSE_PERIOD: f64 = 3.0;

/// Inner light opacity at the start and end of each pulse cycle.
pub const PULSE_LOW: f64 = 0.8;

/// Inner light opacity at the middle of each pulse cycle.
pub const PULSE_HIGH: f64 = 1.0;

/// Fade-out time of the inner light when the lamp turns off.
pub const LIGHT_FADE: f64 = 0.5;

/// Pointer gesture currently acting on the lamp body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Gesture {
    /// No pointer interaction
    #[default]
    Idle,
    /// Pointer over the body
    Hovered,
    /// Pointer or finger held down on the body
    Pressed,
}

/// Every animated lamp property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LampProperty {
    /// Vertical scale of the cable
    CableScale,
    /// Uniform scale of the body
    BodyScale,
    /// Opacity of the halo
    HaloOpacity,
    /// Uniform scale of the halo
    HaloScale,
    /// Mix between the unlit drop shadow (0) and the lit glow (1)
    Glow,
    /// Mix between dark colors (0) and lit colors (1)
    ThemeMix,
    /// Opacity of the inner light
    InnerLight,
}

impl LampProperty {
    /// Properties driven by plain eased transitions.
    pub const EASED: [Self; 6] = [
        Self::CableScale,
        Self::BodyScale,
        Self::HaloOpacity,
        Self::HaloScale,
        Self::Glow,
        Self::ThemeMix,
    ];

    /// Settled value for the given lamp state.
    #[must_use]
    pub fn target(self, is_on: bool, gesture: Gesture) -> f64 {
        let lit = |on: f64, off: f64| if is_on { on } else { off };
        match self {
            Self::CableScale => lit(1.0, 0.9),
            Self::BodyScale => match gesture {
                Gesture::Pressed => 0.96,
                Gesture::Hovered => 1.02,
                Gesture::Idle => lit(1.0, 0.98),
            },
            Self::HaloOpacity | Self::Glow | Self::ThemeMix => lit(1.0, 0.0),
            Self::HaloScale => lit(1.0, 0.9),
            Self::InnerLight => lit(PULSE_LOW, 0.0),
        }
    }

    /// Transition duration given the lamp's base duration.
    #[must_use]
    pub fn duration(self, base: f64) -> f64 {
        match self {
            Self::CableScale | Self::BodyScale => base,
            Self::HaloOpacity | Self::HaloScale => base + 0.1,
            Self::Glow => base + 0.2,
            Self::ThemeMix => COLOR_TRANSITION,
            Self::InnerLight => LIGHT_FADE,
        }
    }
}

mod palette {
    use lampkit_core::{Color, Shadow};

    const fn alpha(color: Color, a: f32) -> Color {
        Color { a, ..color }
    }

    pub(super) const BODY_ON_TOP: Color = Color::from_rgba8(0xfd, 0xe0, 0x47, 0xff);
    pub(super) const BODY_ON_BOTTOM: Color = Color::from_rgba8(0xf9, 0x73, 0x16, 0xff);
    pub(super) const BODY_OFF_TOP: Color = Color::from_rgba8(0x47, 0x55, 0x69, 0xff);
    pub(super) const BODY_OFF_BOTTOM: Color = Color::from_rgba8(0x1e, 0x29, 0x3b, 0xff);

    pub(super) const CABLE_ON_TOP: Color = Color::from_rgba8(0x92, 0x40, 0x0e, 0xff);
    pub(super) const CABLE_ON_BOTTOM: Color = Color::from_rgba8(0x78, 0x35, 0x0f, 0xff);
    pub(super) const CABLE_OFF_TOP: Color = Color::from_rgba8(0x47, 0x55, 0x69, 0xff);
    pub(super) const CABLE_OFF_BOTTOM: Color = Color::from_rgba8(0x33, 0x41, 0x55, 0xff);

    const DETAIL_ON: Color = Color::from_rgba8(0xfe, 0xf0, 0x8a, 0xff);
    const DETAIL_OFF: Color = Color::from_rgba8(0x94, 0xa3, 0xb8, 0xff);
    pub(super) const DETAIL_TOP_ON: Color = alpha(DETAIL_ON, 0.8);
    pub(super) const DETAIL_BOTTOM_ON: Color = alpha(DETAIL_ON, 0.6);
    pub(super) const DETAIL_TOP_OFF: Color = alpha(DETAIL_OFF, 0.6);
    pub(super) const DETAIL_BOTTOM_OFF: Color = alpha(DETAIL_OFF, 0.4);

    pub(super) const LIGHT_TOP: Color = alpha(Color::WHITE, 0.8);
    pub(super) const LIGHT_BOTTOM: Color = alpha(DETAIL_ON, 0.6);

    pub(super) const HALO_OUTER: Color = alpha(Color::from_rgba8(0xfa, 0xcc, 0x15, 0xff), 0.3);
    pub(super) const HALO_INNER: Color = alpha(Color::from_rgba8(0xfd, 0xe0, 0x47, 0xff), 0.4);

    const ORANGE_GLOW: Color = Color::from_rgba8(251, 146, 60, 0xff);
    pub(super) const GLOW_NEAR: Shadow = Shadow::glow(alpha(ORANGE_GLOW, 0.6), 30.0);
    pub(super) const GLOW_FAR: Shadow = Shadow::glow(alpha(ORANGE_GLOW, 0.3), 60.0);
    pub(super) const DROP: Shadow = Shadow {
        color: alpha(Color::BLACK, 0.3),
        offset_x: 0.0,
        offset_y: 4.0,
        blur: 15.0,
    };
}

/// Snapshot of every animated lamp property.
///
/// `settled` gives the values a lamp comes to rest on; a live lamp reports
/// interpolated values through `LampToggle::current_visual`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LampVisual {
    /// Vertical scale of the cable
    pub cable_scale_y: f32,
    /// Uniform scale of the body
    pub body_scale: f32,
    /// Halo opacity
    pub halo_opacity: f32,
    /// Halo scale
    pub halo_scale: f32,
    /// Shadow mix, 0 = drop shadow, 1 = orange glow
    pub glow: f32,
    /// Color mix, 0 = dark palette, 1 = lit palette
    pub theme_mix: f32,
    /// Inner light opacity
    pub inner_light_opacity: f32,
    /// Whether the inner light pulse is running
    pub pulse_active: bool,
}

impl LampVisual {
    /// Resting visual for `config` under `gesture`.
    ///
    /// While lit the inner light never rests; its settled value is the
    /// start of the pulse cycle.
    #[must_use]
    pub fn settled(config: &LampConfig, gesture: Gesture) -> Self {
        let is_on = config.is_on();
        let value = |p: LampProperty| p.target(is_on, gesture) as f32;
        Self {
            cable_scale_y: value(LampProperty::CableScale),
            body_scale: value(LampProperty::BodyScale),
            halo_opacity: value(LampProperty::HaloOpacity),
            halo_scale: value(LampProperty::HaloScale),
            glow: value(LampProperty::Glow),
            theme_mix: value(LampProperty::ThemeMix),
            inner_light_opacity: value(LampProperty::InnerLight),
            pulse_active: is_on,
        }
    }

    /// Value of a single property.
    #[must_use]
    pub const fn get(&self, property: LampProperty) -> f32 {
        match property {
            LampProperty::CableScale => self.cable_scale_y,
            LampProperty::BodyScale => self.body_scale,
            LampProperty::HaloOpacity => self.halo_opacity,
            LampProperty::HaloScale => self.halo_scale,
            LampProperty::Glow => self.glow,
            LampProperty::ThemeMix => self.theme_mix,
            LampProperty::InnerLight => self.inner_light_opacity,
        }
    }

    pub(crate) fn set(&mut self, property: LampProperty, value: f32) {
        let slot = match property {
            LampProperty::CableScale => &mut self.cable_scale_y,
            LampProperty::BodyScale => &mut self.body_scale,
            LampProperty::HaloOpacity => &mut self.halo_opacity,
            LampProperty::HaloScale => &mut self.halo_scale,
            LampProperty::Glow => &mut self.glow,
            LampProperty::ThemeMix => &mut self.theme_mix,
            LampProperty::InnerLight => &mut self.inner_light_opacity,
        };
        *slot = value;
    }

    fn mix(&self, off: Color, on: Color) -> Color {
        off.lerp(&on, self.theme_mix)
    }

    /// Gradient of the lamp shade.
    #[must_use]
    pub fn body_fill(&self) -> Fill {
        Fill::VerticalGradient {
            top: self.mix(palette::BODY_OFF_TOP, palette::BODY_ON_TOP),
            bottom: self.mix(palette::BODY_OFF_BOTTOM, palette::BODY_ON_BOTTOM),
        }
    }

    /// Gradient of the cable.
    #[must_use]
    pub fn cable_fill(&self) -> Fill {
        Fill::VerticalGradient {
            top: self.mix(palette::CABLE_OFF_TOP, palette::CABLE_ON_TOP),
            bottom: self.mix(palette::CABLE_OFF_BOTTOM, palette::CABLE_ON_BOTTOM),
        }
    }

    /// Colors of the top and bottom detail lines.
    #[must_use]
    pub fn detail_colors(&self) -> (Color, Color) {
        (
            self.mix(palette::DETAIL_TOP_OFF, palette::DETAIL_TOP_ON),
            self.mix(palette::DETAIL_BOTTOM_OFF, palette::DETAIL_BOTTOM_ON),
        )
    }

    /// Gradient of the inner light, before its opacity is applied.
    #[must_use]
    pub const fn inner_light_fill() -> Fill {
        Fill::VerticalGradient {
            top: palette::LIGHT_TOP,
            bottom: palette::LIGHT_BOTTOM,
        }
    }

    /// Fills of the outer and inner halo rings.
    #[must_use]
    pub const fn halo_fills() -> [Fill; 2] {
        [
            Fill::RadialGradient {
                inner: palette::HALO_OUTER,
                outer: Color::TRANSPARENT,
            },
            Fill::RadialGradient {
                inner: palette::HALO_INNER,
                outer: Color::TRANSPARENT,
            },
        ]
    }

    /// Shadows cast by the shade, blended by [`Self::glow`].
    #[must_use]
    pub fn shadows(&self) -> Vec<Shadow> {
        let near = palette::DROP.lerp(&palette::GLOW_NEAR, self.glow);
        let far_start = Shadow {
            color: palette::GLOW_FAR.color.with_alpha(0.0),
            ..palette::GLOW_FAR
        };
        let far = far_start.lerp(&palette::GLOW_FAR, self.glow);
        if far.color.a > 0.0 {
            vec![near, far]
        } else {
            vec![near]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settled_on() {
        let v = LampVisual::settled(&LampConfig::new(false), Gesture::Idle);
        assert_eq!(v.cable_scale_y, 1.0);
        assert_eq!(v.body_scale, 1.0);
        assert_eq!(v.halo_opacity, 1.0);
        assert_eq!(v.halo_scale, 1.0);
        assert_eq!(v.glow, 1.0);
        assert_eq!(v.theme_mix, 1.0);
        assert!((v.inner_light_opacity - 0.8).abs() < 1e-6);
        assert!(v.pulse_active);
    }

    #[test]
    fn test_settled_off() {
        let v = LampVisual::settled(&LampConfig::new(true), Gesture::Idle);
        assert!((v.cable_scale_y - 0.9).abs() < 1e-6);
        assert!((v.body_scale - 0.98).abs() < 1e-6);
        assert_eq!(v.halo_opacity, 0.0);
        assert!((v.halo_scale - 0.9).abs() < 1e-6);
        assert_eq!(v.glow, 0.0);
        assert_eq!(v.inner_light_opacity, 0.0);
        assert!(!v.pulse_active);
    }

    #[test]
    fn test_gesture_overrides_body_scale() {
        for is_dark in [false, true] {
            let config = LampConfig::new(is_dark);
            let hovered = LampVisual::settled(&config, Gesture::Hovered);
            let pressed = LampVisual::settled(&config, Gesture::Pressed);
            assert!((hovered.body_scale - 1.02).abs() < 1e-6);
            assert!((pressed.body_scale - 0.96).abs() < 1e-6);
        }
    }

    #[test]
    fn test_settled_ignores_duration() {
        let slow = LampConfig::new(false).animation_duration(1.0);
        let fast = LampConfig::new(false).animation_duration(0.1);
        assert_eq!(
            LampVisual::settled(&slow, Gesture::Idle),
            LampVisual::settled(&fast, Gesture::Idle)
        );
    }

    #[test]
    fn test_durations() {
        assert_eq!(LampProperty::CableScale.duration(0.3), 0.3);
        assert_eq!(LampProperty::BodyScale.duration(0.3), 0.3);
        assert!((LampProperty::HaloOpacity.duration(0.3) - 0.4).abs() < 1e-9);
        assert!((LampProperty::HaloScale.duration(0.3) - 0.4).abs() < 1e-9);
        assert!((LampProperty::Glow.duration(0.3) - 0.5).abs() < 1e-9);
        assert_eq!(LampProperty::ThemeMix.duration(2.0), 0.5);
        assert_eq!(LampProperty::InnerLight.duration(2.0), 0.5);
    }

    #[test]
    fn test_get_set_roundtrip() {
        let mut v = LampVisual::settled(&LampConfig::new(true), Gesture::Idle);
        for (i, p) in LampProperty::EASED.into_iter().enumerate() {
            v.set(p, i as f32);
            assert_eq!(v.get(p), i as f32);
        }
    }

    #[test]
    fn test_palette_endpoints() {
        let on = LampVisual::settled(&LampConfig::new(false), Gesture::Idle);
        let off = LampVisual::settled(&LampConfig::new(true), Gesture::Idle);

        match on.body_fill() {
            Fill::VerticalGradient { top, bottom } => {
                assert_eq!(top.to_hex(), "#fde047");
                assert_eq!(bottom.to_hex(), "#f97316");
            }
            other => panic!("unexpected fill {other:?}"),
        }
        match off.cable_fill() {
            Fill::VerticalGradient { top, bottom } => {
                assert_eq!(top.to_hex(), "#475569");
                assert_eq!(bottom.to_hex(), "#334155");
            }
            other => panic!("unexpected fill {other:?}"),
        }
        let (top, bottom) = off.detail_colors();
        assert_eq!(top.to_hex(), "#94a3b8");
        assert!((top.a - 0.6).abs() < 1e-6);
        assert!((bottom.a - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_shadows() {
        let on = LampVisual::settled(&LampConfig::new(false), Gesture::Idle).shadows();
        assert_eq!(on.len(), 2);
        assert_eq!(on[0].blur, 30.0);
        assert_eq!(on[1].blur, 60.0);
        assert!((on[0].color.a - 0.6).abs() < 1e-6);

        let off = LampVisual::settled(&LampConfig::new(true), Gesture::Idle).shadows();
        assert_eq!(off.len(), 1);
        assert_eq!(off[0].offset_y, 4.0);
        assert_eq!(off[0].blur, 15.0);
        assert!((off[0].color.a - 0.3).abs() < 1e-6);
    }
}
