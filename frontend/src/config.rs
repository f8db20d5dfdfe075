use log::Level;

/// Where the contact form posts. `SUBTROPIC_FORM_ENDPOINT` at build time
/// points a staging build at a test form instead.
pub fn form_endpoint() -> &'static str {
    option_env!("SUBTROPIC_FORM_ENDPOINT").unwrap_or("https://formspree.io/f/xjkrarpl")
}

/// Scheduling page shown inside the booking modal.
pub fn booking_url() -> &'static str {
    option_env!("SUBTROPIC_BOOKING_URL").unwrap_or("https://calendly.com/jessehughes/60min")
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_https() {
        assert!(form_endpoint().starts_with("https://"));
        assert!(booking_url().starts_with("https://"));
    }
}
