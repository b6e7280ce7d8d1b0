//! Bin a list of phases into a rose plot and print the statistics.
//!
//! Phases are read as whitespace separated numbers from a file or from STDIN. They are pushed
//! through the phase feed from a separate thread, the same way a processing thread would, and then
//! drained by the canvas.

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::thread;

use phase_rose::{phase_feed, util, RoseCanvas, VisualizerSettings, DEFAULT_FEED_CAPACITY};

#[derive(Parser, Debug)]
#[command(name = "phase_rose")]
#[command(about = "Circular phase histogram", long_about = None)]
struct Args {
    /// File to read phases from. Reads from STDIN if omitted.
    input: Option<PathBuf>,

    /// Interpret the phases as degrees instead of radians.
    #[arg(short, long)]
    degrees: bool,

    /// Number of bins.
    #[arg(short, long)]
    bins: Option<usize>,

    /// Phase reference in degrees.
    #[arg(short, long, allow_hyphen_values = true)]
    reference: Option<String>,

    /// Visualizer settings JSON to apply before `--bins` and `--reference`.
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Print the visualizer settings as JSON after binning.
    #[arg(long)]
    save_settings: bool,

    /// Log more. Once for info, twice for debug, three times for trace. Release builds only log up
    /// to info.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    util::setup_logger(util::verbosity_to_level(args.verbose));

    let text = match &args.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Could not read '{}'", path.display()))?,
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Could not read from STDIN")?;
            text
        }
    };
    let phases = parse_phases(&text, args.degrees)?;

    let (sender, receiver) = phase_feed(phases.len().max(DEFAULT_FEED_CAPACITY));
    let mut canvas = RoseCanvas::new(receiver);
    canvas
        .set_event_channel(Some(1))
        .context("Could not select the event channel")?;

    if let Some(path) = &args.settings {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Could not read '{}'", path.display()))?;
        let settings = VisualizerSettings::from_json(&json)
            .with_context(|| format!("Invalid settings in '{}'", path.display()))?;
        canvas.load_settings(&settings);
    }
    if let Some(num_bins) = args.bins {
        if !canvas.set_num_bins(num_bins) && canvas.histogram().num_bins() != num_bins {
            return Err(anyhow!(
                "The number of bins must be between 1 and {}",
                phase_rose::MAX_BINS
            ));
        }
    }
    if let Some(reference) = &args.reference {
        canvas.set_reference_text(reference)?;
    }

    let producer = thread::spawn(move || {
        for phase in phases {
            sender.try_push(phase);
        }
        sender.dropped()
    });
    let dropped = producer
        .join()
        .map_err(|_| anyhow!("The producer thread panicked"))?;
    if dropped > 0 {
        log::warn!("{dropped} phases did not fit in the queue");
    }

    let report = canvas.refresh();
    log::info!(
        "Inserted {} phases, rejected {}",
        report.inserted,
        report.rejected
    );

    let snapshot_output = canvas.snapshot_output();
    let mut snapshot_output = snapshot_output
        .lock()
        .map_err(|_| anyhow!("The snapshot buffer is poisoned"))?;
    let snapshot = snapshot_output.read();

    println!("{}", snapshot.summary);
    println!("Phase reference: {}\u{b0}", canvas.reference_text());
    println!();
    let bin_width = 360.0 / snapshot.num_bins() as f64;
    for (bin, count) in snapshot.bin_counts.iter().enumerate() {
        let start = bin as f64 * bin_width;
        println!(
            "{:>7.2}\u{b0} .. {:>7.2}\u{b0}  {:>6}  {}",
            start,
            start + bin_width,
            count,
            "#".repeat((snapshot.radius_fraction(bin) * 40.0).round() as usize)
        );
    }

    if args.save_settings {
        println!();
        println!("{}", canvas.save_settings().to_json()?);
    }

    Ok(())
}

/// Parse whitespace separated phases, converting them to radians.
fn parse_phases(text: &str, degrees: bool) -> Result<Vec<f64>> {
    text.split_whitespace()
        .enumerate()
        .map(|(idx, token)| {
            let value: f64 = token
                .parse()
                .with_context(|| format!("Phase {} ('{token}') is not a number", idx + 1))?;
            Ok(if degrees { value.to_radians() } else { value })
        })
        .collect()
}
