use std::time::Duration;

/// Configuration for a single property transition.
#[derive(Debug, Clone, Copy)]
pub struct TransitionConfig {
    pub duration: Duration,
    pub easing: Easing,
}

impl TransitionConfig {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }
}

/// Easing function for transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Apply easing to progress (0.0 to 1.0).
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// Color transitions an element opts into. The choice list uses these for
/// the highlight recolor on selection.
#[derive(Debug, Clone, Copy, Default)]
pub struct Transitions {
    pub background: Option<TransitionConfig>,
    pub foreground: Option<TransitionConfig>,
}

impl Transitions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, duration: Duration, easing: Easing) -> Self {
        self.background = Some(TransitionConfig::new(duration, easing));
        self
    }

    pub fn foreground(mut self, duration: Duration, easing: Easing) -> Self {
        self.foreground = Some(TransitionConfig::new(duration, easing));
        self
    }

    /// Transition both colors together.
    pub fn colors(self, duration: Duration, easing: Easing) -> Self {
        self.background(duration, easing)
            .foreground(duration, easing)
    }

    pub fn has_any(&self) -> bool {
        self.background.is_some() || self.foreground.is_some()
    }
}
