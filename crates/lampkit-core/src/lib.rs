//! Core types and traits for the Lampkit widget toolkit.
//!
//! This crate provides the foundation the widgets and the demo host build on:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`] with hex parsing and CSS output
//! - Layout constraints: [`Constraints`]
//! - Input: [`Event`]
//! - Painting: [`Canvas`], [`RecordingCanvas`], [`DrawCommand`]
//! - Animation: [`Animator`], [`AnimationController`], [`KeyframeTrack`]
//! - State: [`State`], [`Store`]

pub mod animation;
mod canvas;
mod color;
mod constraints;
pub mod draw;
mod event;
mod geometry;
mod state;
pub mod widget;

pub use animation::{
    AnimationController, AnimationHandle, AnimationStatus, Animator, EasedValue, Easing,
    Interpolate, Keyframe, KeyframeTrack,
};
pub use canvas::RecordingCanvas;
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use draw::{DrawCommand, Fill, Shadow, Transform2D};
pub use event::{Event, MouseButton, TouchId};
pub use geometry::{Point, Rect, Size};
pub use state::{State, Store, Update};
pub use widget::{
    AccessibleRole, Canvas, FontWeight, LayoutResult, TextStyle, TypeId, Widget, WidgetMessage,
};
