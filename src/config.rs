// Site-wide constants. Everything user-facing that is plain data lives here
// so the components stay free of magic strings.

/// How long the preloader splash stays up after mount.
pub const PRELOAD_DELAY_MS: u32 = 1_500;

/// Default duration of a stat count-up animation.
pub const COUNT_UP_DURATION_MS: u32 = 2_000;

pub const PLAY_STORE_URL: &str = "https://play.google.com/store/apps/details?id=com.flito.app";
pub const WHATSAPP_URL: &str = "https://wa.me/916382104561";

pub const CONTACT_ADDRESS: &str = "No.12, Bike Street, Automotive City";
pub const CONTACT_PHONE: &str = "+91 63821 04561";
pub const CONTACT_EMAIL: &str = "support@flito.in";

/// Numbered screenshots under /app-img/ap-{n}.png.
pub const APP_SCREENSHOT_COUNT: u32 = 6;
