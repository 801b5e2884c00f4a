use log::Level;

/// Testimonial autoplay period.
pub const AUTOPLAY_INTERVAL_MS: u32 = 6_000;

/// A drag must travel further than this (in px) to change slides.
pub const SWIPE_COMMIT_PX: i32 = 100;

/// Stand-in for the round trip of a real contact endpoint.
pub const SUBMIT_DELAY_MS: u32 = 1_500;

/// Header switches to its solid background past this scroll offset.
pub const HEADER_SCROLL_THRESHOLD: f64 = 50.0;

pub const CONTACT_EMAIL: &str = "info@xenetron.io";
pub const CONTACT_PHONE_DISPLAY: &str = "+1 (123) 456-7890";
pub const CONTACT_PHONE_HREF: &str = "tel:+11234567890";

/// Office hours, local to `OFFICE_TIMEZONE`. Closed on weekends.
pub const OFFICE_TIMEZONE: chrono_tz::Tz = chrono_tz::America::New_York;
pub const OFFICE_OPENS_HOUR: u32 = 9;
pub const OFFICE_CLOSES_HOUR: u32 = 17;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Chatty while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
