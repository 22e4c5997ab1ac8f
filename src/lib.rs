//! # multitable
//!
//! Render arbitrarily nested, schema-less data as aligned multi-section
//! tables for terminal display.
//!
//! ## What does it do?
//!
//! CLI tools that print service responses rarely know the shape of those
//! responses in advance. `multitable` takes any nested-data value — maps,
//! ordered sequences, scalars — and infers a table structure from it:
//! columns, sections, and nested sub-tables, with no schema describing
//! which fields are scalar, repeated, or nested.
//!
//! ## Key Features
//!
//! - **Schema-less**: lists of records become header+rows tables, nested
//!   structures become indented sub-sections, all discovered by walking
//!   the data
//! - **Deterministic**: column order is the lexicographically sorted key
//!   set, independent of input key order
//! - **Serde Compatible**: feed any `T: Serialize` through [`to_value`],
//!   or parse JSON straight into [`Value`]
//! - **Terminal Friendly**: monospace alignment, optional ANSI decoration
//!   of titles and headers, silent handling of closed pipes
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! multitable = "0.1"
//! ```
//!
//! ### Rendering nested data
//!
//! ```rust
//! use multitable::{render_to_string_with_options, value, ColorChoice, RenderOptions};
//!
//! let data = value!({
//!     "Name": "web-1",
//!     "Tags": [
//!         {"Key": "env", "Value": "prod"},
//!         {"Key": "team", "Value": "infra"}
//!     ]
//! });
//!
//! let options = RenderOptions::new().with_color(ColorChoice::Off);
//! let text = render_to_string_with_options(Some("Instance"), &data, options).unwrap();
//! assert_eq!(text, "\
//! Instance
//! Name | web-1
//!   Tags
//!   Key  | Value
//!   env  | prod
//!   team | infra
//! ");
//! ```
//!
//! ### Rendering typed data
//!
//! ```rust
//! use multitable::{render_to_string_with_options, to_value, ColorChoice, RenderOptions};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct User {
//!     id: u32,
//!     name: String,
//! }
//!
//! let users = vec![
//!     User { id: 1, name: "Alice".to_string() },
//!     User { id: 2, name: "Bob".to_string() },
//! ];
//!
//! let value = to_value(&users).unwrap();
//! let options = RenderOptions::new().with_color(ColorChoice::Off);
//! let text = render_to_string_with_options(Some("Users"), &value, options).unwrap();
//! assert!(text.contains("id | name"));
//! ```
//!
//! ## Streaming to a sink
//!
//! [`render_to_writer`] writes to any `io::Write` (commonly standard
//! output). When the reading end of a pipe closes early — `tool | head`
//! — rendering stops silently instead of failing.
//!
//! ## Scope
//!
//! This crate owns layout inference and rendering only. Argument parsing,
//! response acquisition, pagination, filtering, and alternative encodings
//! (JSON and friends) belong to the surrounding tool.

pub mod builder;
pub mod error;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod style;
pub mod table;
pub mod value;

pub use builder::TreeBuilder;
pub use error::{Error, Result};
pub use map::Map;
pub use options::RenderOptions;
pub use ser::ValueSerializer;
pub use style::{ColorChoice, Styler};
pub use table::{MultiTable, Row, Section};
pub use value::{Number, Shape, Value};

use serde::Serialize;
use std::io;

/// Renders `value` as a table and returns the text.
///
/// Uses default options: `|` separator, 2-space indent, automatic color
/// detection. An empty value produces an empty string.
///
/// # Examples
///
/// ```rust
/// use multitable::{render_to_string, value};
///
/// let text = render_to_string(Some("Empty"), &value!([])).unwrap();
/// assert_eq!(text, "");
/// ```
///
/// # Errors
///
/// Returns an error if the in-memory sink fails, which does not happen in
/// practice.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn render_to_string(title: Option<&str>, value: &Value) -> Result<String> {
    render_to_string_with_options(title, value, RenderOptions::default())
}

/// Renders `value` as a table with custom options and returns the text.
///
/// # Errors
///
/// Returns an error if the in-memory sink fails, which does not happen in
/// practice.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn render_to_string_with_options(
    title: Option<&str>,
    value: &Value,
    options: RenderOptions,
) -> Result<String> {
    let mut buffer = Vec::new();
    render_to_writer_with_options(&mut buffer, title, value, options)?;
    String::from_utf8(buffer).map_err(Error::custom)
}

/// Renders `value` as a table into `writer` with default options.
///
/// # Examples
///
/// ```rust
/// use multitable::{render_to_writer, value};
///
/// let data = value!({"Name": "web-1"});
/// let mut out = Vec::new();
/// render_to_writer(&mut out, Some("Instance"), &data).unwrap();
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if the sink fails. A closed pipe is not an
/// error: writing stops and `Ok(())` is returned.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn render_to_writer<W>(writer: W, title: Option<&str>, value: &Value) -> Result<()>
where
    W: io::Write,
{
    render_to_writer_with_options(writer, title, value, RenderOptions::default())
}

/// Renders `value` as a table into `writer` with custom options.
///
/// Builds a fresh table model, walks the value once, renders once, and
/// flushes the writer. When the value is empty nothing is written at all.
///
/// # Errors
///
/// Returns [`Error::Io`] if the sink fails. A closed pipe is not an
/// error: writing stops and `Ok(())` is returned.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn render_to_writer_with_options<W>(
    writer: W,
    title: Option<&str>,
    value: &Value,
    options: RenderOptions,
) -> Result<()>
where
    W: io::Write,
{
    let mut table = MultiTable::new(options);
    if TreeBuilder::new(&mut table).build(title, value, 0) {
        table.render(writer)
    } else {
        Ok(())
    }
}

/// Converts any `T: Serialize` to a [`Value`].
///
/// This is the input boundary for typed data: serialize a response struct
/// once, then hand the resulting value to the renderer.
///
/// # Examples
///
/// ```rust
/// use multitable::{to_value, Value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_object());
/// ```
///
/// # Errors
///
/// Returns an error for values that have no nested-data representation
/// (payload-carrying enum variants, non-string map keys).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}
