//! Platform-free state and math behind the page effects.
//!
//! Nothing in this crate touches the DOM. The web front end reads element
//! geometry and pointer input, feeds them to these types once per frame and
//! writes the returned values back as inline styles.

pub mod config;
pub mod constants;
pub mod css;
pub mod cube;
pub mod follower;
pub mod geometry;
pub mod parallax;
pub mod popover;
pub mod tilt;
pub mod trail;
pub mod wiggle;

pub use config::*;
pub use cube::CubeRotation;
pub use follower::CursorFollower;
pub use geometry::{finite_or_zero, lerp, lerp_vec2, Rect, Viewport};
pub use parallax::{HeroParallax, ScrollCoalescer};
pub use popover::{ClickTarget, Popover, PopoverState};
pub use tilt::{BaseTransform, ProximityTilt, TiltFrame};
pub use trail::Trail;
pub use wiggle::{WiggleParams, WiggleSet};

pub use glam::Vec2;
