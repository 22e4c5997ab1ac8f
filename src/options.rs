//! Configuration options for table rendering.
//!
//! This module provides [`RenderOptions`], the knobs the surrounding CLI
//! exposes for table output:
//!
//! - the column separator character (default `|`)
//! - the indent width, in spaces per nesting level (default 2)
//! - the color choice (auto, on, off)
//!
//! ## Examples
//!
//! ```rust
//! use multitable::{ColorChoice, RenderOptions};
//!
//! // Defaults: '|' separator, 2-space indent, automatic color detection
//! let options = RenderOptions::new();
//!
//! // Custom configuration
//! let options = RenderOptions::new()
//!     .with_separator(':')
//!     .with_indent(4)
//!     .with_color(ColorChoice::Off);
//! ```

use crate::ColorChoice;

/// Configuration options for table rendering.
///
/// # Examples
///
/// ```rust
/// use multitable::{ColorChoice, RenderOptions};
///
/// let options = RenderOptions::new().with_color(ColorChoice::On);
/// assert_eq!(options.separator, '|');
/// assert_eq!(options.indent, 2);
/// ```
#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// Character written between columns.
    pub separator: char,
    /// Spaces per indent level for nested sections.
    pub indent: usize,
    /// Whether titles and headers are ANSI-decorated.
    pub color: ColorChoice,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            separator: '|',
            indent: 2,
            color: ColorChoice::default(),
        }
    }
}

impl RenderOptions {
    /// Creates default options (`|` separator, 2-space indent, auto color).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the column separator character.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use multitable::RenderOptions;
    ///
    /// let options = RenderOptions::new().with_separator(':');
    /// assert_eq!(options.separator, ':');
    /// ```
    #[must_use]
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Sets the indentation width (number of spaces per nesting level).
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Sets the color choice.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use multitable::{ColorChoice, RenderOptions};
    ///
    /// let options = RenderOptions::new().with_color(ColorChoice::Off);
    /// ```
    #[must_use]
    pub fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }
}
