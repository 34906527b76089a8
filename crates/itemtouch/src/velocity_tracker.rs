//! Pointer velocity estimation for fling-swipe detection.
//!
//! Impulse-strategy estimator (the algorithm behind Jetpack Compose's
//! VelocityTracker1D): velocity is derived from the kinetic energy the recent
//! pointer samples impart, which is robust against the uneven event spacing
//! real input streams have. One 1D tracker per axis.

/// Ring buffer size for velocity samples.
const HISTORY_SIZE: usize = 20;

/// Only samples within the last 100ms contribute to the estimate.
const HORIZON_MS: i64 = 100;

/// A gap this long between samples means the pointer stopped.
const ASSUME_STOPPED_MS: i64 = 40;

#[derive(Clone, Copy, Default)]
struct Sample {
    time_ms: i64,
    position: f32,
}

/// Impulse-based 1D velocity estimator over absolute positions.
#[derive(Clone)]
struct AxisTracker {
    samples: [Option<Sample>; HISTORY_SIZE],
    index: usize,
}

impl AxisTracker {
    fn new() -> Self {
        Self {
            samples: [None; HISTORY_SIZE],
            index: 0,
        }
    }

    fn add(&mut self, time_ms: i64, position: f32) {
        self.index = (self.index + 1) % HISTORY_SIZE;
        self.samples[self.index] = Some(Sample { time_ms, position });
    }

    fn reset(&mut self) {
        self.samples = [None; HISTORY_SIZE];
        self.index = 0;
    }

    /// Velocity in units/second. Zero when there are not enough recent samples.
    fn velocity(&self) -> f32 {
        let mut positions = [0.0f32; HISTORY_SIZE];
        let mut times = [0.0f32; HISTORY_SIZE];
        let mut sample_count = 0;

        let newest = match self.samples[self.index] {
            Some(sample) => sample,
            None => return 0.0,
        };

        let mut current_index = self.index;
        let mut previous = newest;

        while let Some(sample) = self.samples[current_index] {
            let age = (newest.time_ms - sample.time_ms) as f32;
            let delta = (sample.time_ms - previous.time_ms).abs() as f32;
            previous = sample;

            if age > HORIZON_MS as f32 || delta > ASSUME_STOPPED_MS as f32 {
                break;
            }

            positions[sample_count] = sample.position;
            times[sample_count] = -age;

            current_index = if current_index == 0 {
                HISTORY_SIZE - 1
            } else {
                current_index - 1
            };

            sample_count += 1;
            if sample_count >= HISTORY_SIZE {
                break;
            }
        }

        if sample_count < 2 {
            return 0.0;
        }

        impulse_velocity(&positions, &times, sample_count) * 1000.0
    }
}

/// Converts kinetic energy to velocity using E = 0.5 * m * v^2 (with m = 1).
#[inline]
fn kinetic_energy_to_velocity(kinetic_energy: f32) -> f32 {
    kinetic_energy.signum() * (2.0 * kinetic_energy.abs()).sqrt()
}

fn impulse_velocity(
    positions: &[f32; HISTORY_SIZE],
    times: &[f32; HISTORY_SIZE],
    sample_count: usize,
) -> f32 {
    if sample_count < 2 {
        return 0.0;
    }

    let mut work = 0.0f32;
    let start = sample_count - 1;
    let mut next_time = times[start];

    for i in (1..=start).rev() {
        let current_time = next_time;
        next_time = times[i - 1];
        if current_time == next_time {
            continue;
        }

        let delta = positions[i] - positions[i - 1];
        let v_curr = delta / (current_time - next_time);
        let v_prev = kinetic_energy_to_velocity(work);
        work += (v_curr - v_prev) * v_curr.abs();
        if i == start {
            work *= 0.5;
        }
    }

    kinetic_energy_to_velocity(work)
}

/// Two-axis pointer velocity tracker.
///
/// Fed every pointer event while a gesture is live, read once on release to
/// decide whether the gesture was a fling.
#[derive(Clone)]
pub struct VelocityTracker {
    x: AxisTracker,
    y: AxisTracker,
}

impl Default for VelocityTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self {
            x: AxisTracker::new(),
            y: AxisTracker::new(),
        }
    }

    pub fn add_movement(&mut self, time_ms: u64, x: f32, y: f32) {
        self.x.add(time_ms as i64, x);
        self.y.add(time_ms as i64, y);
    }

    pub fn reset(&mut self) {
        self.x.reset();
        self.y.reset();
    }

    /// Horizontal velocity in px/sec, clamped to `[-max, max]`.
    pub fn x_velocity(&self, max: f32) -> f32 {
        clamp_velocity(self.x.velocity(), max)
    }

    /// Vertical velocity in px/sec, clamped to `[-max, max]`.
    pub fn y_velocity(&self, max: f32) -> f32 {
        clamp_velocity(self.y.velocity(), max)
    }
}

fn clamp_velocity(velocity: f32, max: f32) -> f32 {
    if !max.is_finite() || max <= 0.0 {
        return 0.0;
    }
    if velocity.is_nan() {
        return 0.0;
    }
    velocity.clamp(-max, max)
}
