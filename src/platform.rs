//! Device capability gate
//!
//! The game needs a physical keyboard and room for a 505x606 canvas, so touch
//! devices and small viewports get a polite message instead of a broken game.

/// Outcome of the boot-time device check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceSupport {
    Supported,
    TouchScreen,
    ScreenTooSmall,
}

impl DeviceSupport {
    /// Message shown in place of the game, if unsupported
    pub fn message(self) -> Option<&'static str> {
        match self {
            DeviceSupport::Supported => None,
            DeviceSupport::TouchScreen => {
                Some("Sorry, this game cannot be played on a touchscreen. \u{1F614}")
            }
            DeviceSupport::ScreenTooSmall => {
                Some("Sorry, this game needs a larger screen for playing. \u{1F614}")
            }
        }
    }
}

/// Check the current browser environment. Touch support is checked before
/// viewport size, so a small touchscreen reports as a touchscreen.
#[cfg(target_arch = "wasm32")]
pub fn detect(window: &web_sys::Window) -> DeviceSupport {
    if window.navigator().max_touch_points() > 0 {
        return DeviceSupport::TouchScreen;
    }
    let matches = |query: &str| {
        window
            .match_media(query)
            .ok()
            .flatten()
            .map(|list| list.matches())
            .unwrap_or(false)
    };
    if matches("(max-width: 519px)") || matches("(max-height: 769px)") {
        return DeviceSupport::ScreenTooSmall;
    }
    DeviceSupport::Supported
}
