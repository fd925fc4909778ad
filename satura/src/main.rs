use anyhow::{Context, Result};
use clap::Parser;
use satura::color::{
    ColorError, Engine, SaturateOptions, SaturationModel, pix_saturate_flip_with_options,
    pix_saturate_with_options,
};
use satura::{DecoderOrder, DisplayOrder, Pix};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::{Duration, Instant};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "satura", version, about = "Adjust the saturation of a PNG image")]
struct Cli {
    /// Input PNG image
    input: PathBuf,

    /// Where to write the result; nothing is written when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Saturation factor; 1.0 leaves colors unchanged, 0.0 gives gray
    #[arg(short, long, default_value_t = 1.0)]
    saturation: f32,

    /// hsv, hsl, luminance-srgb, luminance-linear or fused
    #[arg(short, long, default_value = "fused")]
    model: Pass,

    /// Engine for the fused pass: scalar or vector
    #[arg(short, long, default_value = "vector")]
    engine: Engine,

    /// Exchange the red and blue channels before saturating
    #[arg(long, default_value_t = false)]
    swap_channels: bool,

    /// Flip the result top to bottom
    #[arg(long, default_value_t = false)]
    flip: bool,

    /// Run the pass this many times and report timings
    #[arg(long)]
    benchmark: Option<u32>,
}

/// Which saturation pass to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pass {
    /// Luminance saturate + flip in display order, flipped back afterwards
    Fused,
    /// Model-selectable pass in decoder order
    Model(SaturationModel),
}

impl FromStr for Pass {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("fused") {
            Ok(Pass::Fused)
        } else {
            s.parse().map(Pass::Model)
        }
    }
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pass::Fused => f.write_str("fused"),
            Pass::Model(model) => f.write_str(model.name()),
        }
    }
}

/// A buffer prepared for one pass, in the lane order that pass expects
enum Work {
    Display(Pix<DisplayOrder>),
    Decoder(Pix<DecoderOrder>),
}

impl Work {
    fn prepare(pix: &Pix<DecoderOrder>, pass: Pass) -> Self {
        match pass {
            Pass::Fused => Work::Display(pix.clone().swap_lane_order()),
            Pass::Model(_) => Work::Decoder(pix.clone()),
        }
    }

    fn run(&mut self, options: &SaturateOptions) -> Result<()> {
        match self {
            Work::Display(pix) => pix_saturate_flip_with_options(&mut pix.grid(), options)?,
            Work::Decoder(pix) => pix_saturate_with_options(&mut pix.grid(), options)?,
        }
        Ok(())
    }

    /// Back to decoder order with rows the right way up.
    fn finish(self) -> Pix<DecoderOrder> {
        match self {
            Work::Display(mut pix) => {
                pix.flip_tb();
                pix.swap_lane_order()
            }
            Work::Decoder(pix) => pix,
        }
    }
}

fn swap_channels(pix: Pix<DecoderOrder>) -> Result<Pix<DecoderOrder>> {
    let (width, height) = (pix.width(), pix.height());
    // Reading display-order bytes as decoder order exchanges red and blue.
    let data = pix.swap_lane_order().into_vec();
    Ok(Pix::from_vec(data, width, height)?)
}

fn saturate(
    pix: &Pix<DecoderOrder>,
    pass: Pass,
    options: &SaturateOptions,
) -> Result<Pix<DecoderOrder>> {
    let mut work = Work::prepare(pix, pass);
    work.run(options)?;
    Ok(work.finish())
}

fn benchmark(
    pix: &Pix<DecoderOrder>,
    pass: Pass,
    options: &SaturateOptions,
    iterations: u32,
) -> Result<()> {
    let mut lowest = Duration::MAX;
    let mut total = Duration::ZERO;
    for _ in 0..iterations {
        let mut work = Work::prepare(pix, pass);
        let start = Instant::now();
        work.run(options)?;
        let elapsed = start.elapsed();
        lowest = lowest.min(elapsed);
        total += elapsed;
    }
    let ms = |d: Duration| d.as_secs_f64() * 1000.0;
    info!(
        iterations,
        lowest_ms = ms(lowest),
        average_ms = ms(total) / iterations as f64,
        total_ms = ms(total),
        "benchmark"
    );
    Ok(())
}

fn main() -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    let options = SaturateOptions::default()
        .with_factor(cli.saturation)
        .with_engine(cli.engine);
    let options = match cli.model {
        Pass::Model(model) => options.with_model(model),
        Pass::Fused => options,
    };
    options.validate().context("invalid saturation")?;

    let mut pix = satura::io::read_image(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    info!(
        path = %cli.input.display(),
        width = pix.width(),
        height = pix.height(),
        "loaded image"
    );

    if cli.swap_channels {
        pix = swap_channels(pix)?;
    }

    if let Some(iterations) = cli.benchmark.filter(|&n| n > 0) {
        info!(
            pass = %cli.model,
            engine = %cli.engine,
            factor = cli.saturation,
            "running benchmark"
        );
        benchmark(&pix, cli.model, &options, iterations)?;
    }

    let mut out = saturate(&pix, cli.model, &options)?;
    if cli.flip {
        out.flip_tb();
    }

    if let Some(path) = &cli.output {
        satura::io::write_image(&out, path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), "wrote image");
    }

    Ok(())
}
