use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use image::GrayImage;
use image::imageops::{self, FilterType};
use log::info;
use serde::Serialize;
use sk_core::{FOREGROUND, Grid, count_components};
use sk_thin::{Discipline, IterationStats, Strategy, ThinConfig, ThinMetrics, thin};

#[derive(Parser, Debug)]
#[command(name = "sk_gallery")]
#[command(about = "Skeletonize binarized image files and dump results")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run one engine and write the skeleton plus its metrics.
    #[command(name = "thin")]
    Thin(ThinArgs),
    /// Run every engine on the same input and tabulate their metrics.
    #[command(name = "compare")]
    Compare(CompareArgs),
}

#[derive(Args, Debug, Clone)]
struct CommonArgs {
    #[arg(long, required = true)]
    input: PathBuf,
    #[arg(long, default_value = "out")]
    out: PathBuf,
    /// Luma values strictly above this become foreground.
    #[arg(long, default_value_t = 128)]
    threshold: u8,
    /// Resize to a `size x size` square (nearest neighbor) before binarizing.
    #[arg(long)]
    size: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Engine {
    Level,
    Depth,
    Priority,
    FullPass,
}

impl From<Engine> for Strategy {
    fn from(engine: Engine) -> Self {
        match engine {
            Engine::Level => Strategy::Frontier(Discipline::LevelOrder),
            Engine::Depth => Strategy::Frontier(Discipline::DepthOrder),
            Engine::Priority => Strategy::Frontier(Discipline::PriorityOrder),
            Engine::FullPass => Strategy::FullPass,
        }
    }
}

#[derive(Args, Debug, Clone)]
struct ThinArgs {
    #[command(flatten)]
    common: CommonArgs,
    #[arg(long, value_enum, default_value_t = Engine::Level)]
    engine: Engine,
    /// Include per-iteration counters in meta.json.
    #[arg(long, default_value_t = false)]
    history: bool,
}

#[derive(Args, Debug, Clone)]
struct CompareArgs {
    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Debug, Clone, Serialize)]
struct MetricsDto {
    strategy: &'static str,
    iterations: usize,
    pixels_removed: usize,
    predicate_evaluations: usize,
    peak_frontier_size: usize,
    elapsed_secs: f64,
    foreground_before: usize,
    foreground_after: usize,
    components_before: usize,
    components_after: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    history: Vec<IterationStats>,
}

#[derive(Debug, Clone, Serialize)]
struct MetaInput {
    path: String,
    rows: usize,
    cols: usize,
    threshold: u8,
    resized_to: Option<u32>,
    pixel_rule: &'static str,
}

#[derive(Debug, Clone, Serialize)]
struct MetaThin {
    input: MetaInput,
    result: MetricsDto,
}

#[derive(Debug, Clone, Serialize)]
struct MetaCompare {
    input: MetaInput,
    results: Vec<MetricsDto>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.cmd {
        Command::Thin(args) => run_thin(args),
        Command::Compare(args) => run_compare(args),
    }
}

fn run_thin(args: ThinArgs) -> Result<()> {
    let out_dir = prepare_out_dir(&args.common, "thin")?;
    let grid = load_binary_grid(&args.common)?;
    save_grid(out_dir.join("input.png"), &grid)?;

    let strategy = Strategy::from(args.engine);
    let skeleton_path = out_dir.join(skeleton_file_name(None));
    let dto = run_engine(&grid, strategy, args.history, &skeleton_path)?;
    print_summary(&dto);

    write_json(
        out_dir.join("meta.json"),
        &MetaThin {
            input: meta_input(&args.common, &grid),
            result: dto,
        },
    )
}

fn run_compare(args: CompareArgs) -> Result<()> {
    let out_dir = prepare_out_dir(&args.common, "compare")?;
    let grid = load_binary_grid(&args.common)?;
    save_grid(out_dir.join("input.png"), &grid)?;

    let mut results = Vec::with_capacity(Strategy::ALL.len());
    for strategy in Strategy::ALL {
        let skeleton_path = out_dir.join(skeleton_file_name(Some(strategy)));
        let dto = run_engine(&grid, strategy, false, &skeleton_path)?;
        print_summary(&dto);
        results.push(dto);
    }

    write_json(
        out_dir.join("compare.json"),
        &MetaCompare {
            input: meta_input(&args.common, &grid),
            results,
        },
    )
}

fn run_engine(
    grid: &Grid,
    strategy: Strategy,
    history: bool,
    skeleton_path: &Path,
) -> Result<MetricsDto> {
    let components_before = count_components(grid);
    let cfg = ThinConfig::with_strategy(strategy).with_history(history);
    let out = thin(grid.clone(), &cfg);

    info!(
        "{strategy}: {} -> {} foreground pixels",
        out.metrics.foreground_before, out.metrics.foreground_after
    );

    save_grid(skeleton_path.to_path_buf(), &out.grid)?;
    Ok(metrics_dto(
        strategy,
        out.metrics,
        components_before,
        count_components(&out.grid),
    ))
}

/// `skeleton.png` for a single run, `skeleton_<engine>.png` when comparing.
fn skeleton_file_name(strategy: Option<Strategy>) -> String {
    match strategy {
        Some(s) => format!("skeleton_{}.png", s.name()),
        None => "skeleton.png".to_string(),
    }
}

fn metrics_dto(
    strategy: Strategy,
    m: ThinMetrics,
    components_before: usize,
    components_after: usize,
) -> MetricsDto {
    MetricsDto {
        strategy: strategy.name(),
        iterations: m.iterations,
        pixels_removed: m.pixels_removed,
        predicate_evaluations: m.predicate_evaluations,
        peak_frontier_size: m.peak_frontier_size,
        elapsed_secs: m.elapsed_secs(),
        foreground_before: m.foreground_before,
        foreground_after: m.foreground_after,
        components_before,
        components_after,
        history: m.history,
    }
}

fn print_summary(dto: &MetricsDto) {
    println!("[{}]", dto.strategy);
    println!("  iterations:            {}", dto.iterations);
    println!("  pixels removed:        {}", dto.pixels_removed);
    println!("  predicate evaluations: {}", dto.predicate_evaluations);
    println!("  peak frontier size:    {}", dto.peak_frontier_size);
    println!("  elapsed (s):           {:.4}", dto.elapsed_secs);
}

fn prepare_out_dir(common: &CommonArgs, case_name: &str) -> Result<PathBuf> {
    ensure_file_exists(&common.input, "input")?;

    let out_dir = common.out.join(case_name);
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;
    Ok(out_dir)
}

fn load_binary_grid(common: &CommonArgs) -> Result<Grid> {
    let path = &common.input;
    let dyn_img =
        image::open(path).with_context(|| format!("opening input image {}", path.display()))?;
    let mut luma = dyn_img.to_luma8();
    if let Some(size) = common.size {
        if size < 3 {
            bail!("--size must be at least 3, got {size}.");
        }
        luma = imageops::resize(&luma, size, size, FilterType::Nearest);
    }

    let (w, h) = luma.dimensions();
    let data = luma
        .into_raw()
        .into_iter()
        .map(|v| u8::from(v > common.threshold))
        .collect();

    Grid::from_vec(h as usize, w as usize, data)
        .with_context(|| format!("constructing binary grid from {}", path.display()))
}

fn meta_input(common: &CommonArgs, grid: &Grid) -> MetaInput {
    MetaInput {
        path: common.input.display().to_string(),
        rows: grid.rows(),
        cols: grid.cols(),
        threshold: common.threshold,
        resized_to: common.size,
        pixel_rule: "foreground iff luma > threshold",
    }
}

fn save_grid(path: PathBuf, grid: &Grid) -> Result<()> {
    let data = grid
        .data()
        .iter()
        .map(|&v| if v == FOREGROUND { 255 } else { 0 })
        .collect();
    let gray = GrayImage::from_raw(grid.cols() as u32, grid.rows() as u32, data)
        .context("constructing GrayImage from grid cells")?;
    gray.save(&path)
        .with_context(|| format!("saving image {}", path.display()))
}

fn write_json(path: PathBuf, value: &impl Serialize) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(value).context("serializing json")?;
    fs::write(&path, bytes).with_context(|| format!("writing json {}", path.display()))
}

fn ensure_file_exists(path: &Path, what: &str) -> Result<()> {
    if !path.exists() {
        bail!("{} file does not exist: {}", what, path.display());
    }
    if !path.is_file() {
        bail!("{} path is not a file: {}", what, path.display());
    }
    Ok(())
}
