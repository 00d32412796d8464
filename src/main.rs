use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use unitconv::convert;
use unitconv::session::{Config, Edit};
use unitconv::units::{self, Category, Scale};

#[derive(Parser)]
#[command(name = "unitconv")]
#[command(about = "Convert values between units of length, weight and temperature", long_about = None)]
struct Cli {
    /// Config file (display placeholder and default selections)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a single value
    Convert {
        /// Category (Length, Weight, Temperature)
        category: String,

        /// Unit to convert from (e.g., "Meters")
        from: String,

        /// Unit to convert to (e.g., "Centimeters")
        to: String,

        /// Value as typed
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Print the conversion as JSON
        #[arg(long)]
        json: bool,
    },

    /// List categories and their units
    Units {
        /// Only list this category
        category: Option<String>,

        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },

    /// Read edits from stdin, one per line, and print the result after each
    Live,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let result = load_config(cli.config.as_deref()).and_then(|config| match cli.command {
        Commands::Convert {
            category,
            from,
            to,
            value,
            json,
        } => convert_value(&config, &category, &from, &to, &value, json),
        Commands::Units { category, json } => list_units(category.as_deref(), json),
        Commands::Live => run_live(&config),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&std::path::Path>) -> Result<Config, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            Ok(Config::load_from_file(path)?)
        }
        None => Ok(Config::empty()),
    }
}

fn convert_value(
    config: &Config,
    category: &str,
    from: &str,
    to: &str,
    value: &str,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // Unknown names are converted with the documented fallbacks, but flagged
    match category.parse::<Category>() {
        Ok(parsed) => {
            for unit in [from, to] {
                if units::find_unit(parsed, unit).is_none() {
                    tracing::warn!("unknown unit '{}' for {}, using fallback", unit, parsed);
                }
            }
        }
        Err(e) => tracing::warn!("{}, using neutral factors", e),
    }

    let display = convert::convert_str(category, from, to, value);

    if json {
        let result = if display.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::Value::String(display)
        };
        let output = serde_json::json!({
            "category": category,
            "from": from,
            "to": to,
            "input": value,
            "result": result,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if display.is_empty() {
        println!("{}", config.display.placeholder);
    } else if config.display.show_unit {
        println!("{} {}", display, to);
    } else {
        println!("{}", display);
    }

    Ok(())
}

fn list_units(category: Option<&str>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let categories = match category {
        Some(name) => vec![name.parse::<Category>()?],
        None => Category::ALL.to_vec(),
    };

    if json {
        let mut listing = serde_json::Map::new();
        for category in &categories {
            listing.insert(
                category.name().to_string(),
                serde_json::to_value(units::units(*category))?,
            );
        }
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    for category in categories {
        println!("{}:", category);
        for unit in units::units(category) {
            match unit.scale {
                Scale::Linear(factor) => println!("  - {} (factor: {})", unit.name, factor),
                Scale::Temperature(_) => println!("  - {}", unit.name),
            }
        }
    }

    Ok(())
}

fn run_live(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = config.initial_state()?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line?;
        let edit = match Edit::parse_line(&line) {
            Ok(edit) => edit,
            Err(e) => {
                eprintln!("Error: {}", e);
                continue;
            }
        };

        if let Err(e) = state.apply(edit) {
            eprintln!("Error: {}", e);
            continue;
        }

        writeln!(stdout, "{}", state.display_with(&config.display))?;
        stdout.flush()?;
    }

    Ok(())
}
