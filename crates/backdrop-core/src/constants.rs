// Tuning constants for the backdrop simulation. These are chosen for visual
// feel, not derived from a physical model; `EngineConfig::default()` reads
// them so hosts can override any of them at runtime.

// Distortion grid
pub const GRID_SPACING: f32 = 18.0; // px between lattice points
pub const DISTORTION_RADIUS: f32 = 80.0; // pointer repulsion radius (px)
pub const DISTORTION_STRENGTH: f32 = 12.0; // peak repulsion force at the pointer
pub const IMPULSE_SCALE: f32 = 0.1; // force -> per-tick velocity impulse
pub const SPRING_STRENGTH: f32 = 0.05; // Hookean pull toward rest
pub const DAMPING: f32 = 0.85; // per-tick velocity retention, must stay < 1

// Grid dot appearance
pub const DOT_BASE_RADIUS: f32 = 0.6;
pub const DOT_RADIUS_PER_DISTORTION: f32 = 0.03;
pub const DISTORTED_THRESHOLD: f32 = 1.0; // px of displacement before the dot recolors

// Ambient particles
pub const AMBIENT_AREA_PER_PARTICLE: f32 = 15_000.0; // px² of viewport per particle
pub const AMBIENT_SPEED_SPAN: f32 = 0.3;
pub const AMBIENT_UPWARD_BIAS: f32 = 0.1; // slight upward drift
pub const AMBIENT_SIZE_MIN: f32 = 1.0;
pub const AMBIENT_SIZE_SPAN: f32 = 2.0;
pub const AMBIENT_OPACITY_MIN: f32 = 0.1;
pub const AMBIENT_OPACITY_SPAN: f32 = 0.3;
pub const AMBIENT_PHASE_SPAN: f32 = 1000.0; // initial age spread so jitter/pulse are out of phase
pub const AMBIENT_JITTER_FREQ: f32 = 0.02;
pub const AMBIENT_JITTER_AMP: f32 = 0.2;
pub const AMBIENT_PULSE_FREQ: f32 = 0.03;
pub const AMBIENT_PULSE_AMP: f32 = 0.1;

// Trail particles
pub const TRAIL_SPAWN_THRESHOLD: f32 = 2.0; // px of pointer motion per event
pub const TRAIL_SPAWN_RATIO: f32 = 5.0; // px of motion per spawned particle
pub const TRAIL_SPAWN_CAP: usize = 3; // per pointer-move event
pub const TRAIL_MAX_LIVE: usize = 600;
pub const TRAIL_POSITION_JITTER: f32 = 20.0;
pub const TRAIL_BLOWBACK: f32 = 0.1; // fraction of pointer motion fed back as velocity
pub const TRAIL_VELOCITY_JITTER: f32 = 2.0;
pub const TRAIL_SIZE_MIN: f32 = 1.0;
pub const TRAIL_SIZE_SPAN: f32 = 3.0;
pub const TRAIL_SPAWN_OPACITY: f32 = 0.6;
pub const TRAIL_LIFE_MIN: f32 = 60.0; // frames
pub const TRAIL_LIFE_SPAN: f32 = 40.0; // frames
pub const TRAIL_DRAG: f32 = 0.96;
pub const TRAIL_FADE_SCALE: f32 = 0.5;

// Pointer
pub const POINTER_SMOOTHING: f32 = 0.5;
pub const POINTER_OFFSCREEN: f32 = -1000.0;

// Glow
pub const GLOW_RADIUS: f32 = 100.0;

// Diagnostics
pub const FRAME_REPORT_INTERVAL_SEC: f32 = 5.0;
