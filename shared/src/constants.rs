pub const API_BASE_URL: &str = "http://127.0.0.1:3000";
pub const SPIN_ENTRIES_COLLECTION: &str = "spin_entries";
pub const LOCAL_CACHE_KEY: &str = "simplykhushi_spin";

pub const AUTO_OPEN_DELAY_MS: u32 = 1500;
pub const SPIN_DURATION_MS: u32 = 3000;
pub const REVEAL_DELAY_MS: u32 = 800;
pub const ANNOUNCE_DELAY_MS: u32 = 3000;
pub const ANNOUNCEMENT_LIFETIME_MS: u32 = 1000;
pub const SUBMIT_TIMEOUT_MS: u32 = 8000;
pub const FULL_REVOLUTIONS: u32 = 5;

pub const SUBMIT_FAILED_ERROR: &str = "Something went wrong. Please try again.";
pub const REQUIRED_FIELD_ERROR: &str = "This field is required";
pub const SUCCESS_MESSAGE: &str = "Show this at the counter and claim your offer";
