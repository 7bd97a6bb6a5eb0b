// Tuning constants for every effect. `FxConfig::default()` is built from these.

// Proximity tilt (cards and icons)
pub const GLOW_RADIUS: f32 = 200.0; // pointer distance that marks an element active
pub const TILT_INTENSITY: f32 = 50.0; // degrees of tilt for a full-viewport offset
pub const TILT_SMOOTHING: f32 = 0.08; // per-frame lerp rate of the applied offset

// Force curve: max(0, PEAK - d / FALLOFF) * GAIN
pub const FORCE_PEAK: f32 = 15.0;
pub const FORCE_FALLOFF: f32 = 80.0;
pub const FORCE_GAIN: f32 = 2.0;

// Trail
pub const TRAIL_COUNT: usize = 30; // number of dots
pub const TRAIL_SMOOTHING: f32 = 0.2; // lag of each slot behind its predecessor
pub const TRAIL_SIZE_START: f32 = 150.0; // biggest dot (slot 0), px
pub const TRAIL_SIZE_END: f32 = 3.0; // smallest dot, px
pub const TRAIL_INLINE: usize = 32; // inline capacity of the trail path

// Hero pointer parallax
pub const BLOB_BASE_INTENSITY: f32 = 12.0;
pub const BLOB_INTENSITY_STEP: f32 = 6.0; // added per blob index
pub const BLOB_SCALE_STEP: f32 = 0.02; // added per blob index
pub const CHARACTER_INTENSITY: [f32; 2] = [18.0, 10.0];

// Cursor follower
pub const FOLLOWER_RATE: f32 = 0.1;
pub const FOLLOWER_RECENTER: [f32; 2] = [45.0, 45.0]; // half the follower's box

// Wiggle
pub const WIGGLE_MAX_ROTATION_DEG: f32 = 3.0;
pub const WIGGLE_MAX_TRANSLATE_PX: f32 = 5.0;
pub const WIGGLE_DURATION_MIN_SEC: f32 = 1.0;
pub const WIGGLE_DURATION_MAX_SEC: f32 = 5.0;

// Cube
pub const CUBE_SPEED_FACTOR: f32 = 0.5; // pointer px -> degrees per frame
pub const CUBE_BLEND: f32 = 0.1;
pub const CUBE_DECAY: f32 = 0.92; // velocity multiplier per frame
