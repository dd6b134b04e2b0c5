use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tputviz::domain::{BenchResult, FactorLevels, Measurement, Pattern, Throughput};
use tputviz::format::write_result;

#[derive(Parser)]
struct Args {
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Parser)]
enum Cmd {
    /// Write a synthetic result file for trying out the chart views
    GenSample {
        #[arg(long, default_value = "sample.txt")]
        output: PathBuf,
        /// 1 = request size sweep, 2 = queue depth x request size grid
        #[arg(long, default_value = "2", value_parser = clap::value_parser!(u8).range(1..=2))]
        factors: u8,
        #[arg(long)]
        random: bool,
        #[arg(long)]
        write: bool,
    },
}

const REQUEST_SIZES: [u64; 6] = [512, 4096, 16384, 65536, 262_144, 1_048_576];
const QUEUE_DEPTHS: [u64; 4] = [1, 4, 16, 32];

fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Cmd::GenSample { output, factors, random, write } => {
            let pattern = Pattern { is_consecutive: !random, is_read: !write };
            gen_sample(&output, pattern, factors == 2)?;
        }
    }

    Ok(())
}

fn gen_sample(output: &Path, pattern: Pattern, with_queue_depth: bool) -> Result<()> {
    let depths: &[u64] = if with_queue_depth { &QUEUE_DEPTHS } else { &[1] };

    let mut measurements = Vec::new();
    let mut index = 0;
    for &qd in depths {
        for &rs in &REQUEST_SIZES {
            let mut factors = FactorLevels::new();
            if with_queue_depth {
                factors.set("QD", qd);
            }
            factors.set("RS", rs);
            let throughput = synthetic_throughput(pattern, qd, rs, index);
            measurements.push(Measurement { factors, throughput });
            index += 1;
        }
    }

    let result = BenchResult { pattern, measurements };
    let file = File::create(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    let mut out = BufWriter::new(file);
    write_result(&result, &mut out).context("Failed to write sample")?;
    out.flush().context("Failed to write sample")?;

    println!("✓ Sample written");
    println!("  Path: {}", output.display());
    println!("  Measurements: {}", result.measurements.len());

    Ok(())
}

/// Saturating curve over request size, scaled by queue depth. The spread
/// cycles through every variance bucket.
fn synthetic_throughput(pattern: Pattern, qd: u64, rs: u64, index: u64) -> Throughput {
    let ceiling: u64 = if pattern.is_consecutive { 2_000_000_000 } else { 400_000_000 };
    let per_request = rs.saturating_mul(20_000).saturating_mul(qd.min(16));
    let mean = per_request.min(ceiling);
    let spread_percent = (index * 37) % 60;
    Throughput { mean, std: mean / 100 * spread_percent }
}
