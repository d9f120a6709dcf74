//! tinct - color value command line tool
//!
//! Inspects, converts and transforms colors, builds perceptual gradients
//! and resolves WCAG contrast.

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use tinct_color::{Direction, Notation};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod commands;

use commands::Output;

#[derive(Parser)]
#[command(name = "tinct")]
#[command(author, version, about = "Color value engine CLI")]
#[command(long_about = "
Inspect, convert and transform colors.

Colors are given as hex (#rrggbb, #rrggbbaa), functional notation
(rgb(), rgba(), hsl(), hsla(), cmyk(), cmyka()) or a CSS color name.

Examples:
  tinct info '#3366cc'                     # Every notation at once
  tinct convert tomato --to hsl            # hsl(9,100%,64%)
  tinct adjust '#3366cc' lighten 0.3       # Perceptual lighten
  tinct adjust '#3366cc' rotate -- -30     # Negative amounts after --
  tinct gradient black white --steps 5
  tinct rainbow red --to blue -d cc --steps 7
  tinct contrast '#777777' white --level AA
  tinct -vv --json blend red blue          # Debug logs, JSON output
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose logging to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Track CMYK on every parsed color
    #[arg(long, global = true)]
    cmyk: bool,

    /// Output notation: hex, hexa, rgb, rgba, hsl, hsla, cmyk, cmyka
    #[arg(short, long, global = true, default_value = "hex")]
    format: Notation,

    /// Machine-readable output (JSON)
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a color in every notation
    #[command(visible_alias = "i")]
    Info(InfoArgs),

    /// Print a color in another notation
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Apply a single operation to a color
    #[command(visible_alias = "a")]
    Adjust(AdjustArgs),

    /// Blend two colors halfway
    Blend(BlendArgs),

    /// Perceptually even steps between two colors
    #[command(visible_alias = "g")]
    Gradient(GradientArgs),

    /// Travel around the hue circle toward a target
    Rainbow(RainbowArgs),

    /// Recolor through a tint, keeping relative brightness
    Monotone(MonotoneArgs),

    /// Random perturbation of a color
    Random(RandomArgs),

    /// Contrast ratio, or adjust text to meet a WCAG level
    Contrast(ContrastArgs),
}

#[derive(Args)]
struct InfoArgs {
    /// Color(s) to inspect
    #[arg(required = true)]
    color: Vec<String>,
}

#[derive(Args)]
struct ConvertArgs {
    /// Input color
    color: String,

    /// Target notation (overrides --format)
    #[arg(short, long)]
    to: Option<Notation>,
}

#[derive(Args)]
struct AdjustArgs {
    /// Input color
    color: String,

    /// Operation: lighten, darken, saturate, desaturate, vivid, grey,
    /// rotate, invert, complement, opaque, transparent, alpha, hue,
    /// lightness, saturation
    op: String,

    /// Operation amount (omit for the operation's default)
    #[arg(allow_hyphen_values = true)]
    amount: Option<f64>,

    /// Linear lighten/darken instead of perceptual
    #[arg(long)]
    linear: bool,
}

#[derive(Args)]
struct BlendArgs {
    /// First color
    a: String,

    /// Second color (default: black)
    b: Option<String>,

    /// Plain midpoint instead of the perceptual one
    #[arg(long)]
    linear: bool,
}

#[derive(Args)]
struct GradientArgs {
    /// Start color
    from: String,

    /// End color
    to: String,

    /// Number of colors, endpoints included
    #[arg(short = 'n', long, default_value = "5")]
    steps: usize,
}

#[derive(Args)]
struct RainbowArgs {
    /// Start color
    color: String,

    /// Target color (default: the start color, a full turn)
    #[arg(short, long)]
    to: Option<String>,

    /// How far to travel, 0..1
    #[arg(short, long, default_value = "0.5")]
    strength: f64,

    /// Direction: s (shortest), c (clockwise), cc (counter-clockwise), l (longest)
    #[arg(short, long, default_value = "s", allow_hyphen_values = true)]
    direction: Direction,

    /// Emit a series of N colors instead of one
    #[arg(short = 'n', long)]
    steps: Option<usize>,

    /// Linear hue travel instead of perceptual
    #[arg(long)]
    linear: bool,
}

#[derive(Args)]
struct MonotoneArgs {
    /// Input color
    color: String,

    /// Tint color
    tint: String,

    /// Blend strength toward the tinted result, 0..1
    #[arg(short, long)]
    strength: Option<f64>,
}

#[derive(Args)]
struct RandomArgs {
    /// Input color
    color: String,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Number of colors to generate
    #[arg(short = 'n', long, default_value = "1")]
    count: usize,

    /// Only move the hue, by this fraction of the circle
    #[arg(long)]
    hue_only: Option<f64>,

    /// Alpha amount (alpha is left alone by default)
    #[arg(long, default_value = "0")]
    alpha: f64,
}

#[derive(Args)]
struct ContrastArgs {
    /// Text color
    text: String,

    /// Background color
    background: String,

    /// WCAG level: AA, AAA, AA18, AAA18 (omit for the raw ratio)
    #[arg(short, long)]
    level: Option<String>,

    /// Where to land in the passing range: 0 smallest change, 1 strongest
    #[arg(short, long, default_value = "0")]
    scale: f64,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let out = Output {
        format: cli.format,
        json: cli.json,
        cmyk: cli.cmyk,
    };

    match cli.command {
        Commands::Info(args) => commands::info::run(args, &out),
        Commands::Convert(args) => commands::convert::run(args, &out),
        Commands::Adjust(args) => commands::adjust::run(args, &out),
        Commands::Blend(args) => commands::mix::run_blend(args, &out),
        Commands::Gradient(args) => commands::mix::run_gradient(args, &out),
        Commands::Rainbow(args) => commands::rainbow::run(args, &out),
        Commands::Monotone(args) => commands::mix::run_monotone(args, &out),
        Commands::Random(args) => commands::random::run(args, &out),
        Commands::Contrast(args) => commands::contrast::run(args, &out),
    }
}
