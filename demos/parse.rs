//! Parsing a typed configuration and branching on value types.
//!
//! Run with: cargo run --example parse

use std::error::Error;
use xini::{parse_str, Value};

const CONFIG: &str = "\
; demo configuration
[server]
host = \"example.com\"
ports = [80, 443]
debug = false

[limits]
soft, hard = 1024
rate = 2.5
";

fn main() -> Result<(), Box<dyn Error>> {
    let config = parse_str("demo.ini", CONFIG)?;

    for (name, section) in &config {
        println!("[{}]", name);
        for (key, value) in section {
            match value {
                Value::List(items) => {
                    println!("  {} is a list with {} items", key, items.len())
                }
                Value::Str(s) => println!("  {} is the string {:?}", key, s),
                other => println!("  {} = {} ({})", key, other, other.type_name()),
            }
        }
    }

    // Rendering produces source syntax again.
    println!("\nrendered:\n{}", config);

    Ok(())
}
