//! Month picker CLI application.
//!
//! # Usage
//! ```ignore
//! monthselect                              // Current year, nothing selected
//! monthselect --default-date 2019-04-20    // April 2019 preselected
//! monthselect --mode range click:2 click:6 // February to June
//! echo next | monthselect --stdin          // Events from standard input
//! ```

use std::io::BufRead;

use monthselect::args::{Args, parse_events};
use monthselect::clock::SystemClock;
use monthselect::error::ConfigError;
use monthselect::formatter::print_picker;
use monthselect::host::{Event, Picker};
use monthselect::types::PickerContext;

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("monthselect: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), ConfigError> {
    let ctx = PickerContext::new(args)?;
    let mut events = parse_events(args)?;

    if args.stdin {
        for line in std::io::stdin().lock().lines() {
            let line = line?;
            let line = line.trim();
            // Blank lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            events.push(line.parse::<Event>()?);
        }
    }

    let mut picker = Picker::new(&ctx, Box::new(SystemClock));
    log::info!("replaying {} events", events.len());

    for event in events {
        picker.dispatch(event);
        if ctx.trace {
            println!("> {}", event);
            print_picker(&ctx, &picker);
            println!();
        }
    }

    if !ctx.trace {
        print_picker(&ctx, &picker);
    }

    Ok(())
}
