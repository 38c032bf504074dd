use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose lifecycle logging when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(debug_assertions)]
pub fn booking_url() -> &'static str {
    "https://calendly.com/marshallcoach/alignment-call?hide_gdpr_banner=1&preview=1"
}

#[cfg(not(debug_assertions))]
pub fn booking_url() -> &'static str {
    "https://calendly.com/marshallcoach/alignment-call?hide_gdpr_banner=1"
}

/// Header switches to its opaque treatment once the page is scrolled past this.
pub const SCROLL_THRESHOLD_PX: f64 = 20.0;

/// Fraction of the viewport height an element's top edge must cross to be revealed.
pub const REVEAL_TRIGGER_RATIO: f64 = 0.9;

/// Width below which the burger toggle and overlay are used. Mirrored in the header CSS.
pub const MOBILE_BREAKPOINT_PX: u32 = 768;

pub const SCHEDULER_SCRIPT_SRC: &str = "https://assets.calendly.com/assets/external/widget.js";

pub const CONTACT_EMAIL: &str = "robert@marshallcoach.com";

pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/robertmarshall";
