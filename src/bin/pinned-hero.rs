use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use pinned_hero::{
    CssSurface, ElementId, HeroConfig, HeroSection, Progress, RuntimeOpts, ScrollRuntime,
    Viewport, asset_manifest, compute_visual_state, inline_style, render_hero_html, styles_for,
};

#[derive(Parser, Debug)]
#[command(name = "pinned-hero", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the visual state at one progress value.
    State(StateArgs),
    /// Print visual states at evenly spaced progress values (JSON lines).
    Sample(SampleArgs),
    /// Print the cube face asset manifest.
    Assets(AssetsArgs),
    /// Print the hero markup with the progress-0 frame inlined.
    Html(HtmlArgs),
    /// Simulate wheel scrolling through the pinned section (JSON lines).
    Simulate(SimulateArgs),
    /// Print the default configuration.
    Config,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Json,
    Css,
}

#[derive(Parser, Debug)]
struct StateArgs {
    /// Pin progress, nominally 0..=1.
    #[arg(long, allow_negative_numbers = true)]
    progress: f64,

    /// Hero config JSON (defaults when omitted).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Number of intervals; prints `steps + 1` states.
    #[arg(long, default_value_t = 10)]
    steps: u32,

    /// Hero config JSON (defaults when omitted).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct AssetsArgs {
    /// Directory the face images are served from.
    #[arg(long, default_value = "/images")]
    base: String,
}

#[derive(Parser, Debug)]
struct HtmlArgs {
    /// Hero config JSON (defaults when omitted).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory the face images are served from.
    #[arg(long, default_value = "/images")]
    base: String,

    /// Write to this file instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Hero config JSON (defaults when omitted).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Viewport width, px.
    #[arg(long, default_value_t = 1440.0)]
    viewport_width: f64,

    /// Viewport height, px.
    #[arg(long, default_value_t = 900.0)]
    viewport_height: f64,

    /// Page content height without pin spacing, px.
    #[arg(long, default_value_t = 1800.0)]
    content_height: f64,

    /// Wheel delta fed per wheel event, px.
    #[arg(long, default_value_t = 120.0, allow_negative_numbers = true)]
    wheel: f64,

    /// Frames between wheel events.
    #[arg(long, default_value_t = 4)]
    every: u32,

    /// Frames to simulate (60 fps).
    #[arg(long, default_value_t = 600)]
    frames: u32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::State(args) => cmd_state(args),
        Command::Sample(args) => cmd_sample(args),
        Command::Assets(args) => cmd_assets(args),
        Command::Html(args) => cmd_html(args),
        Command::Simulate(args) => cmd_simulate(args),
        Command::Config => {
            println!("{}", HeroConfig::default().to_json_pretty()?);
            Ok(())
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<HeroConfig> {
    match path {
        Some(p) => {
            HeroConfig::from_path(p).with_context(|| format!("load config '{}'", p.display()))
        }
        None => Ok(HeroConfig::default()),
    }
}

fn cmd_state(args: StateArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_ref())?;
    let state = compute_visual_state(&cfg.cubes, &cfg.timeline, Progress::new(args.progress));
    match args.format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&state)?),
        Format::Css => {
            for (id, style) in styles_for(&state) {
                println!("#{} {{ {} }}", id.dom_id(), inline_style(&style));
            }
        }
    }
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.steps > 0, "--steps must be > 0");
    let cfg = load_config(args.config.as_ref())?;
    for i in 0..=args.steps {
        let p = f64::from(i) / f64::from(args.steps);
        let state = compute_visual_state(&cfg.cubes, &cfg.timeline, Progress::new(p));
        println!("{}", serde_json::to_string(&state)?);
    }
    Ok(())
}

fn cmd_assets(args: AssetsArgs) -> anyhow::Result<()> {
    let manifest = asset_manifest(&args.base);
    println!("{}", serde_json::to_string_pretty(&manifest)?);
    Ok(())
}

fn cmd_html(args: HtmlArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_ref())?;
    let state = compute_visual_state(&cfg.cubes, &cfg.timeline, Progress::START);
    let html = render_hero_html(&state, &cfg.copy, &args.base)?;
    match args.out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(&out, html).with_context(|| format!("write '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => print!("{html}"),
    }
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.every > 0, "--every must be > 0");
    let cfg = load_config(args.config.as_ref())?;
    let viewport = Viewport::new(args.viewport_width, args.viewport_height)?;
    let mut opts = RuntimeOpts::new(viewport, args.content_height);
    opts.smooth = cfg.smooth;
    opts.ticker = cfg.ticker;

    let mut runtime = ScrollRuntime::new(opts)?;
    let surface = CssSurface::with_all_elements();
    let hero = HeroSection::mount(&mut runtime, &cfg, surface.clone(), 0.0)?;

    let frame_ms = 1000.0 / 60.0;
    let mut last = hero.stats().frames;
    for i in 0..args.frames {
        if i % args.every == 0 {
            runtime.wheel(args.wheel);
        }
        let tick = runtime.frame(f64::from(i) * frame_ms);
        let stats = hero.stats();
        if stats.frames != last {
            last = stats.frames;
            let line = serde_json::json!({
                "frame": tick.frame,
                "time_s": tick.time_s,
                "scroll": runtime.scroll(),
                "progress": stats.last_progress.get(),
                "logo": surface.style_text(ElementId::Logo),
                "heading_2": surface.style_text(ElementId::Heading2),
            });
            println!("{line}");
        }
    }

    let stats = hero.unmount(&mut runtime);
    runtime.shutdown()?;
    eprintln!(
        "frames applied: {}, writes: {}, skipped: {}",
        stats.frames, stats.written, stats.skipped
    );
    Ok(())
}
