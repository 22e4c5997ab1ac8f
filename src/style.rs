//! Styling capability for rendered tables.
//!
//! Two pieces live here:
//!
//! - [`ColorChoice`]: the `auto`/`on`/`off` selector the surrounding CLI
//!   parses from its configuration. Unknown selectors are rejected at parse
//!   time with a descriptive error rather than surfacing later.
//! - [`Styler`]: the decoration applied to section titles and header rows
//!   during rendering. Cell content is never decorated, and decoration is
//!   applied after column widths are computed, so it cannot affect
//!   alignment.
//!
//! ## Examples
//!
//! ```rust
//! use multitable::ColorChoice;
//!
//! let choice: ColorChoice = "off".parse().unwrap();
//! assert_eq!(choice, ColorChoice::Off);
//! assert!("purple".parse::<ColorChoice>().is_err());
//! ```

use crate::Error;
use console::Style;
use std::str::FromStr;

/// Whether rendered output is ANSI-decorated.
///
/// `Auto` defers to terminal detection, `On` forces escape codes even when
/// the sink is not a terminal, `Off` emits plain text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ColorChoice {
    #[default]
    Auto,
    On,
    Off,
}

impl ColorChoice {
    /// Returns the selector string for this choice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ColorChoice::Auto => "auto",
            ColorChoice::On => "on",
            ColorChoice::Off => "off",
        }
    }
}

impl FromStr for ColorChoice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(ColorChoice::Auto),
            "on" => Ok(ColorChoice::On),
            "off" => Ok(ColorChoice::Off),
            other => Err(Error::UnknownColorChoice(other.to_string())),
        }
    }
}

/// Decorates section titles and header rows.
///
/// The colorized variant carries its `console` styles so forcing is decided
/// once, at construction, rather than per write.
#[derive(Clone, Debug)]
pub enum Styler {
    Plain,
    Colorized { title: Style, header: Style },
}

impl Styler {
    /// Builds the styler matching a color choice.
    ///
    /// `Auto` yields a colorized styler whose escape codes are emitted only
    /// when the process is attached to a terminal; `On` forces them; `Off`
    /// yields the plain styler.
    #[must_use]
    pub fn for_choice(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Off => Styler::Plain,
            ColorChoice::Auto => Styler::Colorized {
                title: Style::new().bold(),
                header: Style::new().underlined(),
            },
            ColorChoice::On => Styler::Colorized {
                title: Style::new().force_styling(true).bold(),
                header: Style::new().force_styling(true).underlined(),
            },
        }
    }

    /// Decorates a section title.
    #[must_use]
    pub fn title(&self, text: &str) -> String {
        match self {
            Styler::Plain => text.to_string(),
            Styler::Colorized { title, .. } => title.apply_to(text).to_string(),
        }
    }

    /// Decorates one header-row cell.
    #[must_use]
    pub fn header(&self, text: &str) -> String {
        match self {
            Styler::Plain => text.to_string(),
            Styler::Colorized { header, .. } => header.apply_to(text).to_string(),
        }
    }
}
