
#[cfg(debug_assertions)]
pub fn get_form_endpoint() -> &'static str {
    "http://localhost:3001/api/waitlist"  // Local stub while developing
}

#[cfg(not(debug_assertions))]
pub fn get_form_endpoint() -> &'static str {
    // Baked in at build time; a release bundle without it would post nowhere
    env!("MENPRAC_FORM_ENDPOINT", "set MENPRAC_FORM_ENDPOINT to the form-intake URL for release builds")
}

pub const HERO_ANIMATION_URL: &str = "https://assets2.lottiefiles.com/packages/lf20_jcikwtux.json";
pub const SUCCESS_ANIMATION_URL: &str = "https://assets2.lottiefiles.com/packages/lf20_jbrw3hcz.json";

/// How long a success/error confirmation stays up before hiding itself.
pub const CONFIRMATION_DISMISS_MS: u32 = 3_000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_is_absolute_http_url() {
        let endpoint = get_form_endpoint();
        assert!(endpoint.starts_with("http://") || endpoint.starts_with("https://"));
    }

    #[test]
    fn dismiss_delay_is_three_seconds() {
        assert_eq!(CONFIRMATION_DISMISS_MS, 3000);
    }
}
