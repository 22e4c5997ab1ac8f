//! Lists of records become header+rows tables, with nested sub-tables
//! grouped under the record they belong to.
//!
//! Run with: cargo run --example records

use multitable::{render_to_writer, to_value};
use serde::Serialize;
use std::error::Error;
use std::io;

#[derive(Serialize)]
struct Volume {
    id: String,
    size_gb: u32,
    attachments: Vec<Attachment>,
}

#[derive(Serialize)]
struct Attachment {
    instance: String,
    device: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let volumes = vec![
        Volume {
            id: "vol-1".into(),
            size_gb: 100,
            attachments: vec![Attachment {
                instance: "i-1".into(),
                device: "/dev/sda1".into(),
            }],
        },
        Volume {
            id: "vol-2".into(),
            size_gb: 250,
            attachments: vec![],
        },
    ];

    let value = to_value(&volumes)?;
    render_to_writer(io::stdout(), Some("DescribeVolumes"), &value)?;
    Ok(())
}
