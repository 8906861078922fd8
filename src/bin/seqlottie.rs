use std::path::PathBuf;

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "seqlottie", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode a directory of images into an image-sequence descriptor.
    Encode(EncodeArgs),
    /// Validate an existing descriptor and print a summary.
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
struct EncodeArgs {
    /// Directory holding the frames (webp, png, jpg, jpeg).
    #[arg(long)]
    images: PathBuf,

    /// Output JSON path. Parent directories are created.
    #[arg(long)]
    out: PathBuf,

    /// Frame rate recorded in the descriptor.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Canvas width in pixels.
    #[arg(long, default_value_t = 1880)]
    width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = 920)]
    height: u32,

    /// Prefix recorded on every asset.
    #[arg(long, default_value = "images/")]
    url_prefix: String,

    /// Use the pixel size of the first frame as canvas size.
    #[arg(long, conflicts_with_all = ["width", "height"])]
    canvas_from_first: bool,

    /// Pretty-print the JSON.
    #[arg(long)]
    pretty: bool,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Descriptor JSON to check.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Encode(args) => cmd_encode(args),
        Command::Inspect(args) => cmd_inspect(args),
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn cmd_encode(args: EncodeArgs) -> anyhow::Result<()> {
    let opts = seqlottie::EncodeOpts {
        fps: args.fps,
        width: args.width,
        height: args.height,
        url_prefix: args.url_prefix,
        canvas_from_first_image: args.canvas_from_first,
        pretty: args.pretty,
    };

    let summary = seqlottie::encode(&args.images, &args.out, &opts).with_context(|| {
        format!(
            "encode '{}' into '{}'",
            args.images.display(),
            args.out.display()
        )
    })?;

    eprintln!("{summary}");
    Ok(())
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let anim = seqlottie::Animation::from_path(&args.in_path)?;
    anim.validate()
        .with_context(|| format!("check descriptor '{}'", args.in_path.display()))?;

    eprintln!("{}:", args.in_path.display());
    eprintln!("  version:  {}", anim.version);
    eprintln!("  frames:   {}", anim.frame_count());
    eprintln!("  fps:      {}", anim.frame_rate.0);
    eprintln!("  canvas:   {}x{}", anim.width, anim.height);
    if let (Some(first), Some(last)) = (anim.assets.first(), anim.assets.last()) {
        eprintln!("  prefix:   {}", first.url_prefix);
        eprintln!("  first:    {}", first.file_name);
        eprintln!("  last:     {}", last.file_name);
    }
    Ok(())
}
