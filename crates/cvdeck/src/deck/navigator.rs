use std::time::{Duration, Instant};

/// How long each slide stays up while auto-play is on.
pub const AUTO_ADVANCE_INTERVAL: Duration = Duration::from_secs(10);

/// Transition orientation hint derived from the last navigation operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    None,
    Forward,
    Backward,
}

/// Owns the deck's cursor position and playback mode.
///
/// The cursor stays within `[0, slide_count)` under every operation sequence:
/// `next`/`previous` wrap at the ends and `go_to` ignores out-of-range
/// indices. Auto-play is a deadline rather than a timer thread; the caller
/// feeds the clock in through [`Navigator::tick`], which keeps the state
/// machine synchronous and leaves nothing to outlive its owner.
#[derive(Debug)]
pub struct Navigator {
    slide_count: usize,
    current: usize,
    direction: Direction,
    auto_advance_at: Option<Instant>,
}

impl Navigator {
    pub fn new(slide_count: usize) -> Self {
        assert!(slide_count > 0, "a deck needs at least one slide");
        Self {
            slide_count,
            current: 0,
            direction: Direction::None,
            auto_advance_at: None,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn is_auto_playing(&self) -> bool {
        self.auto_advance_at.is_some()
    }

    /// Advance one slide, wrapping to the first after the last.
    pub fn next(&mut self) {
        self.direction = Direction::Forward;
        self.current = (self.current + 1) % self.slide_count;
    }

    /// Retreat one slide, wrapping to the last before the first.
    pub fn previous(&mut self) {
        self.direction = Direction::Backward;
        self.current = (self.current + self.slide_count - 1) % self.slide_count;
    }

    /// Jump straight to `index`. Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) {
        if index >= self.slide_count {
            return;
        }
        self.direction = if index > self.current {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.current = index;
    }

    pub fn toggle_auto_play(&mut self, now: Instant) {
        self.auto_advance_at = match self.auto_advance_at {
            Some(_) => None,
            None => Some(now + AUTO_ADVANCE_INTERVAL),
        };
    }

    /// Fire the auto-advance if its deadline has passed. Returns whether the
    /// cursor moved. At most one advance happens per call; the deadline
    /// re-arms relative to `now`, so a stalled frame does not burst through
    /// several slides at once.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(deadline) = self.auto_advance_at else {
            return false;
        };
        if now < deadline {
            return false;
        }
        self.next();
        self.auto_advance_at = Some(now + AUTO_ADVANCE_INTERVAL);
        true
    }

    /// Time left until the next auto-advance, for frame scheduling.
    pub fn time_until_advance(&self, now: Instant) -> Option<Duration> {
        self.auto_advance_at
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps_forward() {
        let mut nav = Navigator::new(6);
        for expected in [1, 2, 3, 4, 5] {
            nav.next();
            assert_eq!(nav.current(), expected);
        }
        nav.next();
        assert_eq!(nav.current(), 0);
        assert_eq!(nav.direction(), Direction::Forward);
    }

    #[test]
    fn test_previous_wraps_backward() {
        let mut nav = Navigator::new(6);
        nav.previous();
        assert_eq!(nav.current(), 5);
        assert_eq!(nav.direction(), Direction::Backward);
    }

    #[test]
    fn test_cursor_stays_in_range_under_mixed_sequences() {
        let mut nav = Navigator::new(6);
        // A long pseudo-arbitrary walk: two forward, one back, repeated.
        for step in 0..1000 {
            if step % 3 == 2 {
                nav.previous();
            } else {
                nav.next();
            }
            assert!(nav.current() < nav.slide_count());
        }
    }

    #[test]
    fn test_single_slide_deck_never_leaves_zero() {
        let mut nav = Navigator::new(1);
        nav.next();
        assert_eq!(nav.current(), 0);
        nav.previous();
        assert_eq!(nav.current(), 0);
    }

    #[test]
    fn test_go_to_jumps_exactly() {
        let mut nav = Navigator::new(6);
        nav.go_to(4);
        assert_eq!(nav.current(), 4);
        assert_eq!(nav.direction(), Direction::Forward);
        nav.go_to(1);
        assert_eq!(nav.current(), 1);
        assert_eq!(nav.direction(), Direction::Backward);
    }

    #[test]
    fn test_go_to_out_of_range_is_ignored() {
        let mut nav = Navigator::new(6);
        nav.go_to(2);
        nav.go_to(6);
        assert_eq!(nav.current(), 2);
        nav.go_to(usize::MAX);
        assert_eq!(nav.current(), 2);
        assert_eq!(nav.direction(), Direction::Forward);
    }

    #[test]
    fn test_end_jumps_to_last_in_one_step() {
        let mut nav = Navigator::new(6);
        nav.go_to(nav.slide_count() - 1);
        assert_eq!(nav.current(), 5);
    }

    #[test]
    fn test_toggle_auto_play_twice_restores_mode() {
        let now = Instant::now();
        let mut nav = Navigator::new(6);
        assert!(!nav.is_auto_playing());
        nav.toggle_auto_play(now);
        assert!(nav.is_auto_playing());
        nav.toggle_auto_play(now);
        assert!(!nav.is_auto_playing());
    }

    #[test]
    fn test_tick_advances_once_per_interval() {
        let start = Instant::now();
        let mut nav = Navigator::new(6);
        nav.toggle_auto_play(start);

        // Before the deadline nothing happens.
        assert!(!nav.tick(start + AUTO_ADVANCE_INTERVAL / 2));
        assert_eq!(nav.current(), 0);

        // At the deadline: exactly one advance.
        assert!(nav.tick(start + AUTO_ADVANCE_INTERVAL));
        assert_eq!(nav.current(), 1);

        // Immediately afterwards the deadline has re-armed.
        assert!(!nav.tick(start + AUTO_ADVANCE_INTERVAL));
        assert_eq!(nav.current(), 1);

        assert!(nav.tick(start + AUTO_ADVANCE_INTERVAL * 2));
        assert_eq!(nav.current(), 2);
    }

    #[test]
    fn test_no_advance_after_toggle_off() {
        let start = Instant::now();
        let mut nav = Navigator::new(6);
        nav.toggle_auto_play(start);
        nav.toggle_auto_play(start + AUTO_ADVANCE_INTERVAL / 2);

        // Well past the original deadline: the cleared deadline must not fire.
        assert!(!nav.tick(start + AUTO_ADVANCE_INTERVAL * 3));
        assert_eq!(nav.current(), 0);
        assert_eq!(nav.time_until_advance(start), None);
    }

    #[test]
    fn test_auto_play_interacts_with_manual_navigation() {
        let start = Instant::now();
        let mut nav = Navigator::new(6);
        nav.toggle_auto_play(start);
        nav.go_to(3);
        assert!(nav.tick(start + AUTO_ADVANCE_INTERVAL));
        assert_eq!(nav.current(), 4);
    }

    #[test]
    fn test_time_until_advance_counts_down() {
        let start = Instant::now();
        let mut nav = Navigator::new(6);
        assert_eq!(nav.time_until_advance(start), None);
        nav.toggle_auto_play(start);
        assert_eq!(nav.time_until_advance(start), Some(AUTO_ADVANCE_INTERVAL));
        assert_eq!(
            nav.time_until_advance(start + AUTO_ADVANCE_INTERVAL / 2),
            Some(AUTO_ADVANCE_INTERVAL / 2)
        );
        // Saturates at zero once the deadline has passed.
        assert_eq!(
            nav.time_until_advance(start + AUTO_ADVANCE_INTERVAL * 2),
            Some(Duration::ZERO)
        );
    }
}
