//! Wall clock for token expiry checks.

use session::Clock;

/// `Date.now()` in the browser, the system clock elsewhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn now_secs(&self) -> u64 {
        #[cfg(feature = "hydrate")]
        {
            (js_sys::Date::now() / 1000.0).floor() as u64
        }
        #[cfg(not(feature = "hydrate"))]
        {
            session::SystemClock.now_secs()
        }
    }
}
