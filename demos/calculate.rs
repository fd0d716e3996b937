//! Evaluate one area request from the command line.
//!
//!     cargo run --example calculate --features tracing -- sector radius=2m angle=90
//!
//! Set `RUST_LOG=areacalc=debug` to see evaluation logs.

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let input = if args.is_empty() {
        "rectangle length=2m width=3m".to_string()
    } else {
        args.join(" ")
    };

    match areacalc::calculate(&input) {
        Ok(result) => println!("{}", result),
        Err(report) => {
            eprintln!("{:?}", report);
            std::process::exit(1);
        }
    }
}
