use glam::Vec2;

/// One-pole smoothing step with a snap rule.
///
/// Moves `current` by `factor` of the remaining distance to `target`, and
/// lands exactly on `target` once the gap is below `epsilon`. `factor` is
/// expected in `(0, 1]`; values outside are clamped so a step can never
/// overshoot.
#[inline]
pub fn approach(current: f32, target: f32, factor: f32, epsilon: f32) -> f32 {
    let diff = target - current;
    if diff.abs() < epsilon {
        return target;
    }
    current + diff * factor.clamp(0.0, 1.0)
}

/// Per-axis [`approach`] for 2D positions.
#[inline]
pub fn approach_vec2(current: Vec2, target: Vec2, factor: f32, epsilon: f32) -> Vec2 {
    Vec2::new(
        approach(current.x, target.x, factor, epsilon),
        approach(current.y, target.y, factor, epsilon),
    )
}

/// Upper bound on the ticks [`approach`] needs to close a gap of `gap`.
///
/// After `n` ticks the remaining distance is `gap * (1 - factor)^n`; once
/// that drops below `epsilon` the next tick snaps.
pub fn ticks_to_converge(gap: f32, factor: f32, epsilon: f32) -> u32 {
    let gap = gap.abs();
    if gap < epsilon {
        return 1;
    }
    let keep = 1.0 - factor.clamp(f32::EPSILON, 1.0);
    if keep <= 0.0 {
        return 1;
    }
    ((epsilon / gap).ln() / keep.ln()).ceil().max(0.0) as u32 + 1
}

/// A rendered element whose position trails a target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    pub current: Vec2,
    pub target: Vec2,
}

impl Anchor {
    pub fn at(position: Vec2) -> Self {
        Self {
            current: position,
            target: position,
        }
    }

    /// Set the target and advance one tick toward it.
    #[inline]
    pub fn follow(&mut self, target: Vec2, factor: f32, epsilon: f32) {
        self.target = target;
        self.current = approach_vec2(self.current, target, factor, epsilon);
    }

    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }
}

/// Per-frame follow factors for the three cursor layers.
#[derive(Clone, Copy, Debug)]
pub struct FollowFactors {
    pub dot: f32,
    pub ring: f32,
    pub glow: f32,
    pub epsilon: f32,
}

/// Dot, ring and glow anchors smoothed as a chain.
///
/// The dot chases the raw pointer, the ring chases the dot's freshly
/// updated position and the glow chases the dot as well, which gives the
/// ring its trailing feel without a spring simulation.
#[derive(Clone, Copy, Debug)]
pub struct AnchorChain {
    pub dot: Anchor,
    pub ring: Anchor,
    pub glow: Anchor,
}

impl AnchorChain {
    pub fn at(position: Vec2) -> Self {
        Self {
            dot: Anchor::at(position),
            ring: Anchor::at(position),
            glow: Anchor::at(position),
        }
    }

    pub fn step(&mut self, pointer: Vec2, f: &FollowFactors) {
        self.dot.follow(pointer, f.dot, f.epsilon);
        let dot = self.dot.current;
        self.ring.follow(dot, f.ring, f.epsilon);
        self.glow.follow(dot, f.glow, f.epsilon);
    }

    pub fn is_settled(&self) -> bool {
        self.dot.is_settled() && self.ring.is_settled() && self.glow.is_settled()
    }
}
