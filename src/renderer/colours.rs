/// ANSI colour codes used by the terminal dashboard.
pub(crate) struct Colours {
    pub header: &'static str,
    pub text: &'static str,
    pub moisture: &'static str,
    pub humidity: &'static str,
    pub temperature: &'static str,
    pub muted: &'static str,
    pub offline: &'static str,
}

impl Default for Colours {
    fn default() -> Self {
        Self {
            header: "\x1b[1;32m",      // Bold green
            text: "\x1b[0;37m",        // Off-white
            moisture: "\x1b[0;34m",    // Blue
            humidity: "\x1b[0;36m",    // Cyan
            temperature: "\x1b[0;33m", // Amber
            muted: "\x1b[0;90m",       // Grey
            offline: "\x1b[0;31m",     // Red
        }
    }
}

pub(crate) const RESET: &str = "\x1b[0m";
