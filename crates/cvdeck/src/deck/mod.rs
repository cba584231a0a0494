pub mod navigator;

pub use navigator::{AUTO_ADVANCE_INTERVAL, Direction, Navigator};

/// The fixed slide sequence of the deck, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideKind {
    Intro,
    CurrentRole,
    TechExpertise,
    ExperienceTimeline,
    Projects,
    Closing,
}

impl SlideKind {
    pub const ALL: [SlideKind; 6] = [
        SlideKind::Intro,
        SlideKind::CurrentRole,
        SlideKind::TechExpertise,
        SlideKind::ExperienceTimeline,
        SlideKind::Projects,
        SlideKind::Closing,
    ];
}
