//! tiva-prep CLI - Prepare the TiVA value-added chart payload
//!
//! # Main Command
//!
//! ```bash
//! tiva-prep                          # oecd-skva-origin.csv -> web/data.json (2022)
//! tiva-prep export.csv -o out.json   # Custom paths
//! tiva-prep --year 2020              # Another reference year
//! ```
//!
//! # Debug Commands
//!
//! ```bash
//! tiva-prep inspect export.csv       # Encoding, delimiter, columns, periods
//! tiva-prep lookup DEU C10T12 WXD    # Reference metadata for codes
//! ```

use clap::{Args, Parser, Subcommand};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tiva::logs::{self, log_error, LogFormat};
use tiva::parser::ParseResult;
use tiva::reference::industries::INDUSTRIES;
use tiva::transform::observations::{REQUIRED_COLUMNS, TIME_PERIOD};
use tiva::transform::pipeline::format_delimiter;
use tiva::{
    country_name, country_region, industry_meta, next_steps, parse_csv_file_auto, prepare_with,
    PrepareOptions, DEFAULT_CSV_PATH, DEFAULT_OUT_PATH, REFERENCE_YEAR,
};

#[derive(Parser)]
#[command(name = "tiva-prep")]
#[command(about = "Aggregate an OECD TiVA CSV into the chart's data.json", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    prepare: PrepareArgs,

    /// Only print warnings and errors
    #[arg(short, long, global = true, env = "TIVA_QUIET")]
    quiet: bool,

    /// Log output format
    #[arg(long, value_enum, global = true, default_value = "pretty", env = "TIVA_LOG_FORMAT")]
    log_format: LogFormat,
}

#[derive(Args)]
struct PrepareArgs {
    /// Input CSV file
    #[arg(env = "TIVA_INPUT", default_value = DEFAULT_CSV_PATH)]
    input: PathBuf,

    /// Output JSON file
    #[arg(short, long, env = "TIVA_OUTPUT", default_value = DEFAULT_OUT_PATH)]
    output: PathBuf,

    /// Reference year kept from TIME_PERIOD
    #[arg(short, long, env = "TIVA_YEAR", default_value_t = REFERENCE_YEAR)]
    year: i32,

    /// Keep every period instead of filtering by year
    #[arg(long)]
    all_years: bool,

    /// Skip the output contract check
    #[arg(long)]
    no_validate: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show how a CSV file is read, without aggregating
    Inspect {
        /// Input CSV file
        input: PathBuf,
    },

    /// Show reference metadata for industry or country codes
    Lookup {
        /// Industry codes (e.g. C10T12) or ISO3 country codes (e.g. DEU)
        #[arg(required = true)]
        codes: Vec<String>,
    },
}

fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logs::init(cli.log_format, cli.quiet);

    let result = match cli.command {
        None => cmd_prepare(cli.prepare),
        Some(Commands::Inspect { input }) => cmd_inspect(&input),
        Some(Commands::Lookup { codes }) => cmd_lookup(&codes),
    };

    if let Err(e) = result {
        log_error(format!("Error: {}", e));
        std::process::exit(1);
    }
}

fn cmd_prepare(args: PrepareArgs) -> Result<(), Box<dyn std::error::Error>> {
    let options = PrepareOptions {
        csv_path: args.input,
        out_path: args.output,
        year: (!args.all_years).then_some(args.year),
        skip_validation: args.no_validate,
    };

    let report = prepare_with(&options)?;

    eprintln!(
        "\n📊 {} industries, {} countries from {} rows",
        report.industry_count, report.country_count, report.stats.rows_in_period
    );
    println!("{}", next_steps(&report.out_path));
    Ok(())
}

fn cmd_inspect(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Inspecting: {}", input.display());

    let table = parse_csv_file_auto(input)?;

    println!("Encoding:  {}", table.encoding);
    println!("Delimiter: '{}'", format_delimiter(table.delimiter));
    println!("Rows:      {}", table.records.len());
    println!("Columns:");
    for (i, col) in table.headers.iter().enumerate() {
        println!("  [{:2}] {}", i + 1, col);
    }

    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|c| !table.has_column(c))
        .collect();
    if missing.is_empty() {
        println!("Required columns: all present");
    } else {
        println!("Required columns missing: {}", missing.join(", "));
    }

    match table.column(TIME_PERIOD) {
        Some(index) => {
            let mut periods: BTreeMap<&str, usize> = BTreeMap::new();
            for record in &table.records {
                *periods.entry(ParseResult::cell(record, index)).or_default() += 1;
            }
            println!("Periods:");
            for (period, count) in periods {
                println!("  {}: {} rows", period, count);
            }
        }
        None => println!("No {} column: every row is used", TIME_PERIOD),
    }

    Ok(())
}

fn cmd_lookup(codes: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    for code in codes {
        println!("{}", code);
        if INDUSTRIES.iter().any(|m| m.code == code.as_str()) {
            let meta = industry_meta(code);
            println!("  industry: {} [{}] {}", meta.label, meta.group, meta.color);
        }
        let (region, label) = country_region(code);
        println!(
            "  country:  {} ({} / {}) {}",
            country_name(code),
            region.as_str(),
            label,
            region.color()
        );
    }
    Ok(())
}
