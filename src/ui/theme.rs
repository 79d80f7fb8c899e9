use crossterm::tty::IsTty;
use std::io;

const ANSI_GREEN: &str = "\x1b[32m";
const ANSI_GRAY: &str = "\x1b[90m";
const ANSI_RESET: &str = "\x1b[0m";

/// Two-tone ANSI palette for the usage bar: an active color for the filled
/// portion, a muted color for the rest, and a reset emitted after each bar.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub active: &'static str,
    pub muted: &'static str,
    pub reset: &'static str,
}

impl Palette {
    pub fn colored() -> Self {
        Palette {
            active: ANSI_GREEN,
            muted: ANSI_GRAY,
            reset: ANSI_RESET,
        }
    }

    pub fn plain() -> Self {
        Palette {
            active: "",
            muted: "",
            reset: "",
        }
    }

    /// Colored output when stdout is a terminal, plain otherwise.
    pub fn auto(no_color: bool) -> Self {
        if no_color || !io::stdout().is_tty() {
            Self::plain()
        } else {
            Self::colored()
        }
    }
}
