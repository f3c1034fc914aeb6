use clap::{Parser, Subcommand, ValueEnum};
use heatmap_core::{BoundsCache, Ramp, WeeklySampleSet};
use mapstyle_lib::StyleConfig;
use stationmap::canvas::colors::hex_to_rgb;
use stationmap::{render_grid, HeatmapGrid};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "stationmap", about = "Render weekly activity heatmaps and encode map styles")]
struct Cli {
    /// Log debug output (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a week of samples as a grid of cell colors
    Heatmap {
        /// JSON file mapping day names to sample lists ("-" for stdin)
        input: PathBuf,

        /// Color ramp: main or alt (default: STATIONMAP_RAMP or main)
        #[arg(long)]
        ramp: Option<Ramp>,

        /// Output format (default: STATIONMAP_FORMAT or text)
        #[arg(long, value_enum)]
        format: Option<Format>,
    },
    /// Encode a custom map style as a query parameter value
    Style {
        /// JSON file with "elements" and/or "settings" ("-" for stdin)
        input: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
    Ansi,
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    let _ = builder.try_init();
}

fn read_input(path: &Path) -> Result<String, String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("Failed to read stdin: {e}"))?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {e}", path.display()))
}

fn default_ramp() -> Result<Ramp, String> {
    match std::env::var("STATIONMAP_RAMP") {
        Ok(name) => name.parse().map_err(|e| format!("STATIONMAP_RAMP: {e}")),
        Err(_) => Ok(Ramp::default()),
    }
}

fn default_format() -> Result<Format, String> {
    match std::env::var("STATIONMAP_FORMAT") {
        Ok(name) => Format::from_str(&name, true).map_err(|e| format!("STATIONMAP_FORMAT: {e}")),
        Err(_) => Ok(Format::Text),
    }
}

fn exit_with(e: String) -> ! {
    eprintln!("Error: {e}");
    std::process::exit(1);
}

fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Heatmap { input, ramp, format } => {
            let ramp = ramp.map_or_else(default_ramp, Ok).unwrap_or_else(|e| exit_with(e));
            let format = format.map_or_else(default_format, Ok).unwrap_or_else(|e| exit_with(e));

            let json = read_input(&input).unwrap_or_else(|e| exit_with(e));
            let week: WeeklySampleSet = serde_json::from_str(&json)
                .unwrap_or_else(|e| exit_with(format!("Invalid sample file: {e}")));
            log::info!("Rendering {} samples with the {ramp} ramp", week.samples().count());

            let grid = render_grid(&week, ramp, &mut BoundsCache::new());
            match format {
                Format::Text => print_text(&grid),
                Format::Ansi => print_ansi(&grid),
                Format::Json => {
                    let out = serde_json::to_string_pretty(&grid)
                        .unwrap_or_else(|e| exit_with(format!("Serialize error: {e}")));
                    println!("{out}");
                }
            }
        }

        Commands::Style { input } => {
            let json = read_input(&input).unwrap_or_else(|e| exit_with(e));
            let style: StyleConfig = serde_json::from_str(&json)
                .unwrap_or_else(|e| exit_with(format!("Invalid style file: {e}")));

            match mapstyle_lib::encode(&style) {
                Ok(Some(param)) => println!("{param}"),
                Ok(None) => log::info!("Style has no elements or settings; nothing to encode"),
                Err(e) => exit_with(format!("Invalid map style: {e}")),
            }
        }
    }
}

fn print_text(grid: &HeatmapGrid) {
    for row in &grid.rows {
        let colors: Vec<&str> = row.cells.iter().map(|c| c.color.as_str()).collect();
        println!("{}\t{}", row.label, colors.join("\t"));
    }
}

fn print_ansi(grid: &HeatmapGrid) {
    for row in &grid.rows {
        print!("{} ", row.label);
        for cell in &row.cells {
            match hex_to_rgb(&cell.color) {
                Some(rgb) => {
                    let [r, g, b] = rgb.0;
                    print!("\x1b[48;2;{r};{g};{b}m    \x1b[0m");
                }
                None => print!("    "),
            }
        }
        println!();
    }
}
