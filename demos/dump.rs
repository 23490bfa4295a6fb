//! Winding dump — generates one winding and prints it as JSON.
//!
//! Usage:
//! ```text
//! cargo run --example dump                      # defaults, left-center
//! cargo run --example dump -- left-top          # other start position
//! cargo run --example dump -- left-bottom 3     # start position + turns
//! RUST_LOG=planar_winding=trace cargo run --example dump
//! ```

use planar_winding::{generate, SegmentList, SpiralParameters, StartPosition};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Default: WARN for everything, INFO for planar_winding.
    // Override with RUST_LOG env var.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("planar_winding=info".parse().unwrap_or_default());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let position = match args.next() {
        Some(name) => name.parse::<StartPosition>()?,
        None => StartPosition::default(),
    };
    let mut params = SpiralParameters::default();
    if let Some(turns) = args.next() {
        params = params.with_turns(turns.parse()?);
    }

    let mut list = SegmentList::new();
    generate(position, &params, &mut list)?;

    println!("{}", serde_json::to_string_pretty(&list)?);
    Ok(())
}
