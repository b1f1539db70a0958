use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "epicycles", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the frame reached after a number of ticks as a PNG.
    Frame(FrameArgs),
    /// Render a run of frames as numbered PNGs.
    Sequence(SequenceArgs),
    /// Print a scene JSON (the default demo unless --config is given).
    Config(ConfigArgs),
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct RunLength {
    /// Number of ticks to run (one degree each).
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    ticks: Option<u64>,

    /// Animation time to run, converted with the scene fps.
    #[arg(long)]
    seconds: Option<f64>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Scene JSON; the built-in demo chain when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(flatten)]
    duration: RunLength,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct SequenceArgs {
    /// Scene JSON; the built-in demo chain when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// First frame to write (0-based).
    #[arg(long, default_value_t = 0)]
    from: u64,

    /// End of the written range (exclusive).
    #[arg(long)]
    to: u64,

    /// Write every Nth frame of the range.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    every: u64,

    /// Output directory for `frame_NNNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Parser, Debug)]
struct ConfigArgs {
    /// Scene JSON to validate and print normalized.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Sequence(args) => cmd_sequence(args),
        Command::Config(args) => cmd_config(args),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<epicycles::SceneConfig> {
    match path {
        Some(p) => epicycles::SceneConfig::from_path(p)
            .with_context(|| format!("load scene '{}'", p.display())),
        None => Ok(epicycles::SceneConfig::default()),
    }
}

fn new_session(
    cfg: &epicycles::SceneConfig,
) -> anyhow::Result<epicycles::EpicycleSession<epicycles::Framebuffer>> {
    Ok(epicycles::EpicycleSession::new(
        cfg,
        epicycles::Framebuffer::new(cfg.canvas),
    )?)
}

fn write_png(path: &Path, frame: &epicycles::FrameRGBA) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_deref())?;

    let ticks = match (args.duration.ticks, args.duration.seconds) {
        (Some(t), _) => t,
        (None, Some(s)) => {
            if !(s.is_finite() && s > 0.0) {
                anyhow::bail!("--seconds must be a positive number, got {s}");
            }
            cfg.fps.secs_to_frames_floor(s).max(1)
        }
        (None, None) => anyhow::bail!("one of --ticks or --seconds is required"),
    };

    let mut session = new_session(&cfg)?;
    session.run(ticks)?;
    write_png(&args.out, session.surface().frame())?;

    eprintln!(
        "wrote {} (tick {}, angle {})",
        args.out.display(),
        ticks,
        session.angle()
    );
    Ok(())
}

fn cmd_sequence(args: SequenceArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_deref())?;
    let range = epicycles::FrameRange::new(
        epicycles::FrameIndex(args.from),
        epicycles::FrameIndex(args.to),
    )?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let mut session = new_session(&cfg)?;
    let mut written = 0u64;
    while session.frame() < range.end {
        let idx = session.step()?;
        if range.contains(idx) && (idx.0 - range.start.0) % args.every == 0 {
            let path = args.out_dir.join(format!("frame_{:05}.png", idx.0));
            write_png(&path, session.surface().frame())?;
            written += 1;
        }
    }

    eprintln!("wrote {written} frame(s) to {}", args.out_dir.display());
    Ok(())
}

fn cmd_config(args: ConfigArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_deref())?;
    let json = serde_json::to_string_pretty(&cfg).context("serialize scene")?;
    println!("{json}");
    Ok(())
}
