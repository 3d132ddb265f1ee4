//! Animation primitives: easing curves, eased values, looping keyframe
//! tracks, and the [`Animator`] capability widgets use to interpolate their
//! visual properties.
//!
//! Time only moves when the host calls [`Animator::tick`]; nothing here owns
//! a timer or a thread.

use crate::Color;
use std::collections::BTreeMap;
use std::fmt::Debug;

// =============================================================================
// Easing
// =============================================================================

/// Standard easing functions for animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Linear interpolation (no easing)
    Linear,
    /// Ease in (slow start)
    EaseIn,
    /// Ease out (slow end)
    EaseOut,
    /// Ease in and out (slow start and end)
    #[default]
    EaseInOut,
    /// Cubic ease in and out
    CubicInOut,
}

impl Easing {
    /// Apply the easing function to a normalized time value (0.0 to 1.0).
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => (1.0 - t).mul_add(-(1.0 - t), 1.0),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0f64).mul_add(t, 2.0).powi(2) / 2.0
                }
            }
            Self::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0f64).mul_add(t, 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

// =============================================================================
// EasedValue
// =============================================================================

/// A value moving from `from` to `to` over `duration` seconds.
#[derive(Debug, Clone)]
pub struct EasedValue {
    /// Start value
    pub from: f64,
    /// End value
    pub to: f64,
    /// Total duration in seconds
    pub duration: f64,
    /// Elapsed time in seconds
    pub elapsed: f64,
    /// Easing function
    pub easing: Easing,
}

impl EasedValue {
    /// Create a new eased animation.
    #[must_use]
    pub fn new(from: f64, to: f64, duration: f64) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
            easing: Easing::EaseInOut,
        }
    }

    /// Already at rest on `value`.
    #[must_use]
    pub fn settled(value: f64) -> Self {
        Self::new(value, value, 0.0)
    }

    /// Set easing function.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> f64 {
        if self.is_complete() {
            return self.to;
        }
        let eased = self.easing.apply(self.progress());
        (self.to - self.from).mul_add(eased, self.from)
    }

    /// Whether the animation reached its target.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Advance by `dt` seconds.
    pub fn update(&mut self, dt: f64) {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
    }

    /// Progress from 0.0 to 1.0.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.duration > 0.0 {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }
}

// =============================================================================
// Keyframes
// =============================================================================

/// A keyframe in an animation.
#[derive(Debug, Clone)]
pub struct Keyframe<T: Clone> {
    /// Time of this keyframe (0.0 to 1.0 normalized)
    pub time: f64,
    /// Value at this keyframe
    pub value: T,
    /// Easing towards the next keyframe
    pub easing: Easing,
}

impl<T: Clone> Keyframe<T> {
    /// Create a new keyframe.
    #[must_use]
    pub fn new(time: f64, value: T) -> Self {
        Self {
            time: time.clamp(0.0, 1.0),
            value,
            easing: Easing::Linear,
        }
    }

    /// Set easing towards the next keyframe.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

/// Keyframe animation track, optionally looping forever.
#[derive(Debug, Clone)]
pub struct KeyframeTrack<T: Clone + Interpolate> {
    keyframes: Vec<Keyframe<T>>,
    /// Duration of one cycle in seconds
    pub duration: f64,
    /// Elapsed time in seconds
    pub elapsed: f64,
    /// Whether the track restarts after each cycle
    pub looping: bool,
}

impl<T: Clone + Interpolate> KeyframeTrack<T> {
    /// Create a new, empty track.
    #[must_use]
    pub fn new(duration: f64) -> Self {
        Self {
            keyframes: Vec::new(),
            duration,
            elapsed: 0.0,
            looping: false,
        }
    }

    /// Add a keyframe, keeping keyframes sorted by time.
    pub fn add_keyframe(&mut self, keyframe: Keyframe<T>) {
        self.keyframes.push(keyframe);
        self.keyframes.sort_by(|a, b| a.time.total_cmp(&b.time));
    }

    /// Builder form of [`Self::add_keyframe`].
    #[must_use]
    pub fn with_keyframe(mut self, keyframe: Keyframe<T>) -> Self {
        self.add_keyframe(keyframe);
        self
    }

    /// Set looping.
    #[must_use]
    pub fn with_loop(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    /// Value at the current time.
    #[must_use]
    pub fn value(&self) -> Option<T> {
        if self.keyframes.is_empty() {
            return None;
        }

        let t = if self.duration > 0.0 {
            let raw = self.elapsed / self.duration;
            if self.looping {
                raw % 1.0
            } else {
                raw.clamp(0.0, 1.0)
            }
        } else {
            1.0
        };

        let next_idx = self
            .keyframes
            .iter()
            .position(|kf| kf.time >= t)
            .unwrap_or(self.keyframes.len() - 1);
        let next = &self.keyframes[next_idx];
        if next_idx == 0 || next.time <= t {
            return Some(next.value.clone());
        }

        let prev = &self.keyframes[next_idx - 1];
        let segment = next.time - prev.time;
        let segment_t = if segment > 0.0 {
            (t - prev.time) / segment
        } else {
            1.0
        };
        Some(T::interpolate(
            &prev.value,
            &next.value,
            prev.easing.apply(segment_t),
        ))
    }

    /// Advance by `dt` seconds.
    pub fn update(&mut self, dt: f64) {
        self.elapsed += dt.max(0.0);
        if self.looping && self.duration > 0.0 {
            self.elapsed %= self.duration;
        } else if self.elapsed > self.duration {
            self.elapsed = self.duration;
        }
    }

    /// Whether the animation finished. Looping tracks never finish.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.looping && self.elapsed >= self.duration
    }
}

// =============================================================================
// Interpolate
// =============================================================================

/// Types that can be interpolated.
pub trait Interpolate {
    /// Interpolate between two values.
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self;
}

impl Interpolate for f64 {
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self {
        (to - from).mul_add(t, *from)
    }
}

impl Interpolate for f32 {
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self {
        (*to - *from).mul_add(t as Self, *from)
    }
}

impl Interpolate for Color {
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self {
        from.lerp(to, t as f32)
    }
}

// =============================================================================
// Animator capability
// =============================================================================

/// Handle to one `animate` request, used to observe when it settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationHandle<K> {
    /// Animated property
    pub key: K,
    generation: u64,
}

/// Lifecycle of an animation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationStatus {
    /// Still interpolating (or looping)
    Running,
    /// Reached its target value
    Settled,
    /// Replaced by a newer request or cancelled
    Interrupted,
}

/// Interpolates named scalar properties over time.
///
/// "Given a target value and a duration, smoothly move the property there
/// and report when it settles."
pub trait Animator<K> {
    /// Move `key` to `target` over `duration_secs` starting from its current
    /// value. Requesting the target a property is already heading to keeps
    /// the running animation untouched.
    fn animate(&mut self, key: K, target: f64, duration_secs: f64) -> AnimationHandle<K>;

    /// Status of a previous request.
    fn status(&self, handle: &AnimationHandle<K>) -> AnimationStatus;

    /// Whether a previous request reached its target.
    fn is_settled(&self, handle: &AnimationHandle<K>) -> bool {
        self.status(handle) == AnimationStatus::Settled
    }

    /// Current value of a property.
    fn value(&self, key: K) -> Option<f64>;

    /// Advance time. Returns the properties that settled during this step.
    fn tick(&mut self, dt: f64) -> Vec<K>;

    /// Stop and forget every animation.
    fn cancel_all(&mut self);
}

#[derive(Debug, Clone)]
enum Track {
    Eased(EasedValue),
    Looping(KeyframeTrack<f64>),
}

impl Track {
    fn value(&self) -> f64 {
        match self {
            Self::Eased(e) => e.value(),
            Self::Looping(k) => k.value().unwrap_or_default(),
        }
    }

    fn is_complete(&self) -> bool {
        match self {
            Self::Eased(e) => e.is_complete(),
            Self::Looping(k) => k.is_complete(),
        }
    }

    fn target(&self) -> Option<f64> {
        match self {
            Self::Eased(e) => Some(e.to),
            Self::Looping(_) => None,
        }
    }
}

#[derive(Debug, Clone)]
struct Slot {
    track: Track,
    generation: u64,
}

/// [`Animator`] backed by eased values and keyframe tracks.
#[derive(Debug, Clone)]
pub struct AnimationController<K: Ord> {
    slots: BTreeMap<K, Slot>,
    next_generation: u64,
    easing: Easing,
}

impl<K: Ord> Default for AnimationController<K> {
    fn default() -> Self {
        Self {
            slots: BTreeMap::new(),
            next_generation: 0,
            easing: Easing::EaseInOut,
        }
    }
}

impl<K: Copy + Ord + Debug> AnimationController<K> {
    /// Create a new controller.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Easing used by [`Animator::animate`].
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    fn install(&mut self, key: K, track: Track) -> AnimationHandle<K> {
        self.next_generation += 1;
        let generation = self.next_generation;
        self.slots.insert(key, Slot { track, generation });
        AnimationHandle { key, generation }
    }

    /// Put `key` at rest on `value` without animating.
    pub fn set_immediate(&mut self, key: K, value: f64) -> AnimationHandle<K> {
        self.install(key, Track::Eased(EasedValue::settled(value)))
    }

    /// Start a keyframe track on `key`, replacing whatever ran there.
    pub fn start_keyframes(&mut self, key: K, track: KeyframeTrack<f64>) -> AnimationHandle<K> {
        tracing::trace!(?key, duration = track.duration, looping = track.looping, "keyframes");
        self.install(key, Track::Looping(track))
    }

    /// Whether `key` currently runs a looping keyframe track.
    #[must_use]
    pub fn is_looping(&self, key: K) -> bool {
        matches!(
            self.slots.get(&key),
            Some(Slot { track: Track::Looping(k), .. }) if k.looping
        )
    }

    /// Target of the eased animation on `key`, if any.
    #[must_use]
    pub fn target(&self, key: K) -> Option<f64> {
        self.slots.get(&key).and_then(|s| s.track.target())
    }

    /// Whether any animation is still running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.active_count() > 0
    }

    /// Number of running animations.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.slots.values().filter(|s| !s.track.is_complete()).count()
    }
}

impl<K: Copy + Ord + Debug> Animator<K> for AnimationController<K> {
    fn animate(&mut self, key: K, target: f64, duration_secs: f64) -> AnimationHandle<K> {
        let current = match self.slots.get(&key) {
            Some(slot) => {
                if let Some(existing) = slot.track.target() {
                    if (existing - target).abs() < f64::EPSILON {
                        return AnimationHandle {
                            key,
                            generation: slot.generation,
                        };
                    }
                }
                slot.track.value()
            }
            None => return self.set_immediate(key, target),
        };

        if !duration_secs.is_finite() || duration_secs <= 0.0 {
            return self.set_immediate(key, target);
        }

        tracing::trace!(?key, from = current, target, duration_secs, "animate");
        let eased = EasedValue::new(current, target, duration_secs).with_easing(self.easing);
        self.install(key, Track::Eased(eased))
    }

    fn status(&self, handle: &AnimationHandle<K>) -> AnimationStatus {
        match self.slots.get(&handle.key) {
            Some(slot) if slot.generation == handle.generation => {
                if slot.track.is_complete() {
                    AnimationStatus::Settled
                } else {
                    AnimationStatus::Running
                }
            }
            _ => AnimationStatus::Interrupted,
        }
    }

    fn value(&self, key: K) -> Option<f64> {
        self.slots.get(&key).map(|s| s.track.value())
    }

    fn tick(&mut self, dt: f64) -> Vec<K> {
        let mut settled = Vec::new();
        for (key, slot) in &mut self.slots {
            if slot.track.is_complete() {
                continue;
            }
            match &mut slot.track {
                Track::Eased(e) => e.update(dt),
                Track::Looping(k) => k.update(dt),
            }
            if slot.track.is_complete() {
                settled.push(*key);
            }
        }
        settled
    }

    fn cancel_all(&mut self) {
        if !self.slots.is_empty() {
            tracing::trace!(count = self.slots.len(), "cancel all animations");
        }
        self.slots.clear();
    }
}
