//! spangrid CLI - render tables with merged cells as reST grid tables

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use spangrid::{
    input::parse_options_toml, parse_table, InputFormat, LayoutError, LayoutResult, RenderOptions,
};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "spangrid")]
#[command(version)]
#[command(about = "Render tables with merged cells as reST grid tables", long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input file path (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Input format
    #[arg(short, long, value_enum, default_value_t = Format::Auto)]
    format: Format,

    /// Mark the first row as header (`=` separator)
    #[arg(long)]
    headers: bool,

    /// Use cell text exactly as given (no cleaning or trimming)
    #[arg(long)]
    raw: bool,

    /// TOML file with render options
    #[arg(short, long)]
    config: Option<String>,

    /// Log layout decisions to stderr (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Print the normalized spans, column widths and row heights as JSON
    Layout {
        /// Input file path
        input: Option<String>,

        /// Input format
        #[arg(short, long, value_enum, default_value_t = Format::Auto)]
        format: Format,

        /// Pretty print the JSON
        #[arg(short, long)]
        pretty: bool,
    },

    /// Show version and feature info
    Info,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Detect from the file extension, then the content
    Auto,
    /// JSON table document
    Json,
    /// CSV grid without merges
    Csv,
}

#[cfg(feature = "cli")]
impl Format {
    fn resolve(self, path: Option<&str>, content: &str) -> InputFormat {
        match self {
            Format::Auto => InputFormat::detect(path, content),
            Format::Json => InputFormat::Json,
            Format::Csv => InputFormat::Csv,
        }
    }
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

#[cfg(feature = "cli")]
fn run(cli: Cli) -> LayoutResult<()> {
    // Handle subcommands first
    if let Some(cmd) = cli.command {
        return handle_subcommand(cmd);
    }

    let content = read_input(cli.input_file.as_deref())?;
    let format = cli.format.resolve(cli.input_file.as_deref(), &content);
    let document = parse_table(&content, format)?;

    let mut options = match cli.config {
        Some(ref path) => parse_options_toml(&fs::read_to_string(path)?)?,
        None if cli.raw => RenderOptions::raw(),
        None => RenderOptions::new(),
    };
    if cli.headers {
        options.use_headers = true;
    }

    let result = document.render(&options)?;
    write_output(cli.output.as_deref(), &result)
}

#[cfg(feature = "cli")]
fn handle_subcommand(cmd: Commands) -> LayoutResult<()> {
    match cmd {
        Commands::Layout {
            input,
            format,
            pretty,
        } => {
            let content = read_input(input.as_deref())?;
            let format = format.resolve(input.as_deref(), &content);
            let grid = parse_table(&content, format)?.layout()?;

            let json = if pretty {
                serde_json::to_string_pretty(&grid)
            } else {
                serde_json::to_string(&grid)
            }
            .map_err(|err| LayoutError::invalid(err.to_string()))?;
            println!("{}", json);
        }

        Commands::Info => {
            println!("spangrid - span-aware grid table layout");
            println!("Version: {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Features:");
            println!("  ✓ Merge normalization with overlap/rectangle validation");
            println!("  ✓ Column width and row height solving for merged cells");
            println!("  ✓ reST grid table rendering");
            println!("  ✓ JSON (grid + spans, or rows with colspan/rowspan) and CSV input");
            println!("  ✓ TOML render options");
            println!();
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn read_input(path: Option<&str>) -> LayoutResult<String> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

#[cfg(feature = "cli")]
fn write_output(path: Option<&str>, result: &str) -> LayoutResult<()> {
    match path {
        Some(path) => {
            let mut file = fs::File::create(path)?;
            writeln!(file, "{}", result)?;
            eprintln!("✓ Output written to: {}", path);
        }
        None => {
            println!("{}", result);
        }
    }
    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install spangrid --features cli");
    eprintln!("  spangrid [OPTIONS] [INPUT_FILE]");
}
