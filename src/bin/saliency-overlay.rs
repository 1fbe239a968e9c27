use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use saliency_overlay::{IconSet, OverlayConfig, OverlayRenderer, PixelBuffer, RenderFlags};

#[derive(Parser, Debug)]
#[command(name = "saliency-overlay", version)]
struct Cli {
    /// Log debug events (flat saliency maps, skipped icons, frame size drift).
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Composite the overlay onto one frame and write it as PNG.
    Render(RenderArgs),
    /// Write the watch region at model input resolution as PNG.
    Observe(ObserveArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input frame image.
    #[arg(long)]
    frame: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Overlay config JSON. Defaults to the frame size with a 100x50 watch input.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    frame: FrameArgs,

    /// Saliency map: JSON array of rows, or a grayscale image.
    #[arg(long)]
    saliency: Option<PathBuf>,

    /// Direction probabilities in model output order.
    #[arg(long, value_delimiter = ',')]
    probs: Option<Vec<f32>>,

    /// Directory holding left_arrow.png, up_arrow.png and right_arrow.png.
    #[arg(long)]
    icons: Option<PathBuf>,

    #[arg(long)]
    no_salient: bool,

    #[arg(long)]
    no_prob: bool,

    #[arg(long)]
    no_border: bool,
}

#[derive(Parser, Debug)]
struct ObserveArgs {
    #[command(flatten)]
    frame: FrameArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Observe(args) => cmd_observe(args),
    }
}

fn read_config(path: Option<&Path>, frame: &PixelBuffer) -> anyhow::Result<OverlayConfig> {
    match path {
        Some(p) => OverlayConfig::from_json_file(p)
            .with_context(|| format!("load config '{}'", p.display())),
        None => Ok(OverlayConfig::new(
            frame.height,
            frame.width,
            frame.channels,
            50,
            100,
        )),
    }
}

fn load_frame(args: &FrameArgs) -> anyhow::Result<(PixelBuffer, OverlayConfig)> {
    let frame = saliency_overlay::load_pixels(&args.frame)?;
    let cfg = read_config(args.config.as_deref(), &frame)?;
    // Decoded frames are RGB; honour a config asking for another layout.
    let frame = match cfg.channels {
        3 => frame,
        1 => frame.to_gray(),
        n => anyhow::bail!("cli frames are decoded as rgb or gray, config asks for {n} channels"),
    };
    Ok((frame, cfg))
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let (frame, cfg) = load_frame(&args.frame)?;
    let icons = match &args.icons {
        Some(dir) => IconSet::from_dir(dir)
            .with_context(|| format!("load icons from '{}'", dir.display()))?,
        None => IconSet::builtin(),
    };

    let mut renderer = OverlayRenderer::with_icons(cfg, icons)?;
    renderer.set_frame(frame)?;
    if let Some(path) = &args.saliency {
        renderer.set_salient(saliency_overlay::load_weight_map(path)?)?;
    }
    if let Some(probs) = &args.probs {
        let probs: [f32; 3] = probs
            .as_slice()
            .try_into()
            .context("--probs expects exactly three values")?;
        renderer.set_direction(probs);
    }

    let out = renderer.render(RenderFlags {
        salient: !args.no_salient,
        prob: !args.no_prob,
        border: !args.no_border,
    })?;
    saliency_overlay::save_png(&out, &args.frame.out)?;
    eprintln!("wrote {}", args.frame.out.display());
    Ok(())
}

fn cmd_observe(args: ObserveArgs) -> anyhow::Result<()> {
    let (frame, cfg) = load_frame(&args.frame)?;
    let mut renderer = OverlayRenderer::new(cfg)?;
    renderer.set_frame(frame)?;
    let obs = renderer.observation()?;
    saliency_overlay::save_png(&obs, &args.frame.out)?;
    eprintln!("wrote {}", args.frame.out.display());
    Ok(())
}
