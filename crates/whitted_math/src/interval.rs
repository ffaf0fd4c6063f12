/// A closed parametric range `[min, max]` along a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// The range used for every scene query: from the self-intersection
    /// epsilon out to the largest finite distance.
    pub fn from_epsilon() -> Self {
        Self::new(Self::EPSILON, f32::MAX)
    }

    /// Returns true if x is within the interval [min, max] (inclusive).
    ///
    /// NaN is never contained.
    pub fn contains(&self, x: f32) -> bool {
        self.min <= x && x <= self.max
    }

    /// Returns a copy of this interval with its upper bound replaced.
    pub fn with_max(&self, max: f32) -> Interval {
        Interval::new(self.min, max)
    }

    /// Clamps x to be within the interval [min, max].
    pub fn clamp(&self, x: f32) -> f32 {
        x.clamp(self.min, self.max)
    }

    /// Smallest `t` accepted by scene queries, keeps secondary rays from
    /// re-hitting the surface they start on.
    pub const EPSILON: f32 = 1e-4;

    /// The unit interval [0, 1].
    pub const UNIT: Interval = Interval { min: 0.0, max: 1.0 };
}
