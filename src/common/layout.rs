//! Static platform layout.
//!
//! The world is a finite list of platforms in screen coordinates (origin
//! top-left, y down), spaced far enough apart that forward progress needs the
//! world-shift scroll. Ground segments alternate with floating platforms at
//! three heights.

/// Logical screen size. Simulation coordinates are pinned to this.
pub const WIDTH: f32 = 800.0;
pub const HEIGHT: f32 = 600.0;

const GROUND: f32 = HEIGHT - 40.0;
const LOW: f32 = HEIGHT / 1.5;
const MID: f32 = HEIGHT / 1.7;
const HIGH: f32 = HEIGHT / 3.3;

/// Platform rows as `(x, y, width, height)`, y being the top edge.
pub const PLATFORMS: [(f32, f32, f32, f32); 25] = [
    // Ground segments, with gaps the player can fall through.
    (0.0, GROUND, 2000.0, 40.0),
    (2300.0, GROUND, 2000.0, 40.0),
    (4600.0, GROUND, 2000.0, 40.0),
    (6900.0, GROUND, 2000.0, 40.0),
    (9000.0, GROUND, 2000.0, 40.0),
    // Floating platforms.
    (WIDTH / 3.0, MID, 200.0, 30.0),
    (800.0, MID, 200.0, 30.0),
    (1200.0, HIGH, 100.0, 30.0),
    (1900.0, LOW, 200.0, 30.0),
    (2200.0, HIGH, 100.0, 30.0),
    (2600.0, LOW, 200.0, 30.0),
    (3100.0, MID, 200.0, 30.0),
    (3700.0, HIGH, 100.0, 30.0),
    (4300.0, LOW, 200.0, 30.0),
    (4900.0, HIGH, 100.0, 30.0),
    (5300.0, LOW, 200.0, 30.0),
    (5700.0, MID, 200.0, 30.0),
    (6000.0, HIGH, 100.0, 30.0),
    (6500.0, LOW, 200.0, 30.0),
    (6900.0, HIGH, 100.0, 30.0),
    (7200.0, LOW, 200.0, 30.0),
    (7600.0, MID, 200.0, 30.0),
    (8000.0, HIGH, 100.0, 30.0),
    (8500.0, LOW, 200.0, 30.0),
    (9000.0, HIGH, 100.0, 30.0),
];
