use std::time::Instant;

use crate::deck::Direction;

pub const TRANSITION_DURATION: f32 = 0.3;

/// How much the outgoing/incoming slide is scaled down at the edges of a
/// `Slide` transition.
pub const TRANSITION_MIN_SCALE: f32 = 0.95;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// Directional horizontal slide with cross-fade and a slight scale.
    Slide,
    Fade,
    None,
}

impl TransitionKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            "fade" => Self::Fade,
            "none" => Self::None,
            _ => Self::Slide,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Slide => "Slide",
            Self::Fade => "Fade",
            Self::None => "None",
        }
    }

    pub fn cycled(&self) -> Self {
        match self {
            Self::Slide => Self::Fade,
            Self::Fade => Self::None,
            Self::None => Self::Slide,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionDirection {
    Forward,
    Backward,
}

impl From<Direction> for TransitionDirection {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Backward => Self::Backward,
            Direction::Forward | Direction::None => Self::Forward,
        }
    }
}

/// A transition in flight between two slides. Purely visual: the navigator
/// has already moved to `to` by the time this exists.
pub struct ActiveTransition {
    pub from: usize,
    pub to: usize,
    pub kind: TransitionKind,
    pub direction: TransitionDirection,
    start: Instant,
}

impl ActiveTransition {
    pub fn new(from: usize, to: usize, kind: TransitionKind, direction: TransitionDirection) -> Self {
        Self {
            from,
            to,
            kind,
            direction,
            start: Instant::now(),
        }
    }

    pub fn progress(&self) -> f32 {
        let raw = self.start.elapsed().as_secs_f32() / TRANSITION_DURATION;
        ease_in_out(raw.clamp(0.0, 1.0))
    }

    pub fn is_complete(&self) -> bool {
        self.start.elapsed().as_secs_f32() >= TRANSITION_DURATION
    }
}

pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_endpoints() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_ease_is_monotonic() {
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = ease_in_out(i as f32 / 100.0);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn test_kind_cycle_returns_to_start() {
        let start = TransitionKind::Slide;
        assert_eq!(start.cycled().cycled().cycled(), start);
    }

    #[test]
    fn test_direction_hint_maps_to_forward_by_default() {
        assert_eq!(
            TransitionDirection::from(Direction::None),
            TransitionDirection::Forward
        );
        assert_eq!(
            TransitionDirection::from(Direction::Backward),
            TransitionDirection::Backward
        );
    }
}
