//! Verifying a configuration against expected defaults.
//!
//! Run with: cargo run --example verify

use std::error::Error;
use xini::{parse_str, verify};

const EXPECTED: &str = "\
[server]
host = \"\"
ports = []
debug = false
";

const ACTUAL: &str = "\
[server]
host = \"example.com\"
ports = 8080
debug = true

[cache]
size = 64
";

fn main() -> Result<(), Box<dyn Error>> {
    let expected = parse_str("schema.ini", EXPECTED)?;
    let actual = parse_str("app.ini", ACTUAL)?;

    // Lenient accumulation: only type mismatches are reported.
    let report = verify(&actual, &expected, false, false)?;
    println!("lenient mismatches:\n{}", report);

    // Strict accumulation: unknown sections and keys count too.
    let report = verify(&actual, &expected, true, false)?;
    println!("strict mismatches:\n{}", report);

    // Fail-fast mode surfaces the first mismatch as an error.
    match verify(&actual, &expected, true, true) {
        Ok(_) => println!("verified clean"),
        Err(err) => println!("verification failed: {}", err),
    }

    Ok(())
}
