// Build-time settings. Set SPLLIT_SITE_URL when building for another host.

pub fn get_site_url() -> &'static str {
    option_env!("SPLLIT_SITE_URL").unwrap_or("https://spllit.in")
}

/// Story phase cadence.
pub const PHASE_INTERVAL_MS: u32 = 4_000;
/// Outgoing story beat and caption exit.
pub const PHASE_EXIT_MS: u32 = 500;
/// Jar shake after each save.
pub const SHAKE_MS: u32 = 500;
/// Confetti and ribbon lifetime, counted from the latest milestone.
pub const CELEBRATION_MS: u32 = 3_000;
/// Coin flight from the button into the jar.
pub const COIN_FLIGHT_MS: u32 = 1_200;
/// Recipient exit animation in the split simulator.
pub const RECIPIENT_EXIT_MS: u32 = 300;
