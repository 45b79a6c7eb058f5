//! Spring physics
//!
//! Damped harmonic oscillator integrated with semi-implicit Euler over
//! fixed substeps, so a long frame never destabilizes a stiff spring.

/// Largest integration step in seconds
const MAX_SUBSTEP: f32 = 1.0 / 240.0;

/// Spring parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    /// Distance from target under which the spring may settle
    pub rest_distance: f32,
    /// Speed under which the spring may settle
    pub rest_velocity: f32,
}

impl SpringConfig {
    pub const fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
            rest_distance: 0.01,
            rest_velocity: 0.1,
        }
    }

    /// Critically damped spring: fast, never overshoots its target
    pub fn snappy() -> Self {
        // Critical damping = 2 * sqrt(stiffness * mass) = 2 * sqrt(600) ≈ 49
        Self::new(600.0, 49.0, 1.0)
    }

    /// Stiff spring with a barely visible overshoot
    pub fn stiff() -> Self {
        Self::new(400.0, 30.0, 1.0)
    }

    /// Soft, slow spring
    pub fn gentle() -> Self {
        Self::new(120.0, 14.0, 1.0)
    }

    /// Under-damped spring with visible oscillation
    pub fn wobbly() -> Self {
        Self::new(180.0, 12.0, 1.0)
    }

    /// Damping ratio (1.0 = critical)
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::snappy()
    }
}

/// A single animated value pulled toward a target
#[derive(Clone, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
    settled: bool,
}

impl Spring {
    /// Create a spring at rest on `initial`
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
            settled: true,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn config(&self) -> &SpringConfig {
        &self.config
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Retarget the spring, keeping its current velocity
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
        self.settled = self.at_rest();
    }

    /// Jump to a value and stop
    pub fn snap_to(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
        self.settled = true;
    }

    /// Advance the simulation by `dt` seconds
    pub fn step(&mut self, dt: f32) {
        if self.settled || dt.is_nan() || dt <= 0.0 {
            return;
        }

        let mut remaining = dt;
        while remaining > 0.0 {
            let h = remaining.min(MAX_SUBSTEP);
            let displacement = self.value - self.target;
            let force = -self.config.stiffness * displacement - self.config.damping * self.velocity;
            self.velocity += force / self.config.mass * h;
            self.value += self.velocity * h;
            remaining -= h;
        }

        if self.at_rest() {
            self.value = self.target;
            self.velocity = 0.0;
            self.settled = true;
        }
    }

    fn at_rest(&self) -> bool {
        (self.value - self.target).abs() < self.config.rest_distance
            && self.velocity.abs() < self.config.rest_velocity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(spring: &mut Spring, seconds: f32) {
        let frames = (seconds * 60.0) as usize;
        for _ in 0..frames {
            spring.step(1.0 / 60.0);
        }
    }

    #[test]
    fn test_new_spring_is_settled() {
        let spring = Spring::new(SpringConfig::default(), 10.0);
        assert!(spring.is_settled());
        assert_eq!(spring.value(), 10.0);
    }

    #[test]
    fn test_spring_reaches_target() {
        let mut spring = Spring::new(SpringConfig::snappy(), 0.0);
        spring.set_target(200.0);
        assert!(!spring.is_settled());

        run(&mut spring, 2.0);

        assert!(spring.is_settled());
        assert_eq!(spring.value(), 200.0);
    }

    #[test]
    fn test_snappy_spring_never_overshoots() {
        let mut spring = Spring::new(SpringConfig::snappy(), 150.0);
        spring.set_target(0.0);

        for _ in 0..120 {
            spring.step(1.0 / 60.0);
            assert!(spring.value() >= -0.01, "overshoot to {}", spring.value());
        }
    }

    #[test]
    fn test_wobbly_spring_overshoots() {
        let mut spring = Spring::new(SpringConfig::wobbly(), 0.0);
        spring.set_target(100.0);

        let mut peak: f32 = 0.0;
        for _ in 0..120 {
            spring.step(1.0 / 60.0);
            peak = peak.max(spring.value());
        }
        assert!(peak > 100.0);
    }

    #[test]
    fn test_snap_to_stops_motion() {
        let mut spring = Spring::new(SpringConfig::default(), 0.0);
        spring.set_target(50.0);
        spring.step(1.0 / 60.0);

        spring.snap_to(10.0);
        assert!(spring.is_settled());
        assert_eq!(spring.velocity(), 0.0);
        assert_eq!(spring.target(), 10.0);
    }

    #[test]
    fn test_damping_ratio() {
        assert!((SpringConfig::snappy().damping_ratio() - 1.0).abs() < 0.01);
        assert!(SpringConfig::wobbly().damping_ratio() < 1.0);
    }
}
