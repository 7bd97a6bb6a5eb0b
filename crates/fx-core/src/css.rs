//! Inline style values written by the front end.

use crate::tilt::{BaseTransform, TiltFrame};
use crate::wiggle::WiggleParams;
use glam::Vec2;

pub fn translate(offset: Vec2) -> String {
    format!("translate({}px, {}px)", offset.x, offset.y)
}

pub fn translate3d(offset: Vec2) -> String {
    format!("translate3d({}px, {}px, 0)", offset.x, offset.y)
}

pub fn translate3d_y(y: f32) -> String {
    format!("translate3d(0, {}px, 0)", y)
}

pub fn blob_transform(offset: Vec2, scale: f32) -> String {
    format!("{} scale({})", translate3d(offset), scale)
}

/// Card transform; `base` re-applies an icon's fixed rotation and scale.
pub fn tilt_transform(frame: &TiltFrame, base: Option<&BaseTransform>) -> String {
    let mut out = format!(
        "{} rotateX({:.2}deg) rotateY({:.2}deg)",
        translate(frame.offset),
        frame.rotate_x,
        frame.rotate_y
    );
    if let Some(b) = base {
        out.push(' ');
        out.push_str(&base_transform(b));
    }
    out
}

pub fn base_transform(base: &BaseTransform) -> String {
    format!("rotate({}deg) scale({})", base.rotate_deg, base.scale)
}

pub fn percent(v: f32) -> String {
    format!("{}%", v)
}

pub fn px(v: f32) -> String {
    format!("{}px", v)
}

pub fn deg(v: f32) -> String {
    format!("{}deg", v)
}

pub fn cube_transform(angle: Vec2) -> String {
    format!("rotateX({}deg) rotateY({}deg)", angle.x, angle.y)
}

pub fn wiggle_animation(keyframes: &str, params: &WiggleParams) -> String {
    format!(
        "{} {:.2}s ease-in-out infinite alternate",
        keyframes, params.duration_sec
    )
}

pub fn opacity(v: f32) -> String {
    format!("{}", v)
}
