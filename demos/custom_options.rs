//! Customizing the separator, indent width, and color choice.
//!
//! Run with: cargo run --example custom_options

use multitable::{render_to_writer_with_options, value, ColorChoice, RenderOptions};
use std::error::Error;
use std::io;

fn main() -> Result<(), Box<dyn Error>> {
    let data = value!({
        "Region": "eu-west-1",
        "Buckets": [
            {"Name": "logs", "Objects": 10482},
            {"Name": "backups", "Objects": 77}
        ]
    });

    // Forced color, ':' separator, wide indent.
    let options = RenderOptions::new()
        .with_color(ColorChoice::On)
        .with_separator(':')
        .with_indent(4);
    render_to_writer_with_options(io::stdout(), Some("ListBuckets"), &data, options)?;

    println!();

    // Plain output, defaults otherwise.
    let options = RenderOptions::new().with_color(ColorChoice::Off);
    render_to_writer_with_options(io::stdout(), Some("ListBuckets"), &data, options)?;
    Ok(())
}
