use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::element::{Content, Element};
use crate::transitions::{Easing, TransitionConfig};
use crate::types::{Color, Rgb};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Channel {
    Background,
    Foreground,
}

#[derive(Debug, Clone)]
struct ActiveTransition {
    from: Color,
    to: Color,
    start: Instant,
    duration: Duration,
    easing: Easing,
}

impl ActiveTransition {
    fn value_at(&self, now: Instant) -> Option<Rgb> {
        let elapsed = now.duration_since(self.start);
        if elapsed >= self.duration {
            return self.to.to_rgb();
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let t = self.easing.apply(t);
        // A transparent endpoint cannot be interpolated; snap to the target.
        if self.from.is_transparent() || self.to.is_transparent() {
            return self.to.to_rgb();
        }
        self.from.clone().mix(self.to.clone(), t).to_rgb()
    }
}

/// Tracks per-element colors across frames and interpolates the ones that
/// opted into transitions. Call [`AnimationState::update`] once per rendered
/// frame, before drawing.
#[derive(Debug, Default)]
pub struct AnimationState {
    snapshots: HashMap<String, (Color, Option<Color>)>,
    active: HashMap<(String, Channel), ActiveTransition>,
}

impl AnimationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_active_transitions(&self) -> bool {
        !self.active.is_empty()
    }

    /// Walk the tree, start transitions for changed colors, prune finished
    /// ones, and refresh snapshots.
    pub fn update(&mut self, root: &Element) {
        let now = Instant::now();
        self.active
            .retain(|_, t| now.duration_since(t.start) < t.duration);
        self.update_element(root, now);
    }

    fn update_element(&mut self, element: &Element, now: Instant) {
        let style = element.effective_style();
        let current = (style.background.clone(), style.foreground.clone());

        if let Some((prev_bg, prev_fg)) = self.snapshots.get(&element.id).cloned() {
            if let Some(config) = element.transitions.background {
                if prev_bg != current.0 {
                    self.start(&element.id, Channel::Background, prev_bg, current.0.clone(), config, now);
                }
            }
            if let Some(config) = element.transitions.foreground {
                if let (Some(prev), Some(curr)) = (prev_fg, current.1.clone()) {
                    if prev != curr {
                        self.start(&element.id, Channel::Foreground, prev, curr, config, now);
                    }
                }
            }
        }

        self.snapshots.insert(element.id.clone(), current);

        if let Content::Children(children) = &element.content {
            for child in children {
                self.update_element(child, now);
            }
        }
    }

    fn start(
        &mut self,
        id: &str,
        channel: Channel,
        from: Color,
        to: Color,
        config: TransitionConfig,
        now: Instant,
    ) {
        let key = (id.to_string(), channel);
        // If a transition is already running, continue from its current value
        // so a rapid toggle does not jump.
        let from = match self.active.get(&key) {
            Some(running) => running
                .value_at(now)
                .map(|rgb| Color::rgb(rgb.r, rgb.g, rgb.b))
                .unwrap_or(from),
            None => from,
        };
        self.active.insert(
            key,
            ActiveTransition {
                from,
                to,
                start: now,
                duration: config.duration,
                easing: config.easing,
            },
        );
    }

    /// Current background for an element, if a transition is running.
    pub fn background(&self, id: &str) -> Option<Rgb> {
        self.active
            .get(&(id.to_string(), Channel::Background))
            .and_then(|t| t.value_at(Instant::now()))
    }

    /// Current foreground for an element, if a transition is running.
    pub fn foreground(&self, id: &str) -> Option<Rgb> {
        self.active
            .get(&(id.to_string(), Channel::Foreground))
            .and_then(|t| t.value_at(Instant::now()))
    }
}
