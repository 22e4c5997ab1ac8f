//! First steps: render one nested value to stdout.
//!
//! Run with: cargo run --example simple

use multitable::{render_to_writer, value};
use std::error::Error;
use std::io;

fn main() -> Result<(), Box<dyn Error>> {
    let instance = value!({
        "Name": "web-1",
        "State": "running",
        "Zone": "us-east-1a",
        "Tags": [
            {"Key": "env", "Value": "prod"},
            {"Key": "team", "Value": "infra"}
        ]
    });

    render_to_writer(io::stdout(), Some("DescribeInstance"), &instance)?;
    Ok(())
}
