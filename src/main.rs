use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use gf_tables::{FieldRegistry, FieldTable, RegistryConfig, Symbol, MAX_WIDTH};
use tracing_subscriber::EnvFilter;

/// Widest field whose tables are printed by `tables`.
const MAX_DUMP_WIDTH: u8 = 8;

#[derive(Parser, Debug)]
#[command(name = "gf-tables", about = "Table-driven arithmetic over GF(2^w)")]
struct Cli {
    /// Largest field width the registry will build.
    #[arg(long, global = true, default_value_t = MAX_WIDTH)]
    max_width: u8,
    /// Verify log/antilog invariants after building each table.
    #[arg(long, global = true)]
    verify: bool,
    /// Log table construction at debug level.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Multiply two symbols.
    Mul {
        /// Field width w.
        #[arg(short, long)]
        width: u8,
        a: Symbol,
        b: Symbol,
    },
    /// Divide `a` by `b`.
    Div {
        /// Field width w.
        #[arg(short, long)]
        width: u8,
        a: Symbol,
        b: Symbol,
    },
    /// Raise `a` to the power `e`.
    Pow {
        /// Field width w.
        #[arg(short, long)]
        width: u8,
        a: Symbol,
        e: u32,
    },
    /// Summarize a field: size, polynomial, fingerprint.
    Info {
        /// Field width w.
        #[arg(short, long)]
        width: u8,
    },
    /// Print the log and antilog tables of a small field.
    Tables {
        /// Field width w.
        #[arg(short, long)]
        width: u8,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = RegistryConfig::default()
        .with_max_width(cli.max_width)
        .context("invalid --max-width")?
        .with_verification(cli.verify);
    let registry = FieldRegistry::with_config(config);

    match cli.command {
        Commands::Mul { width, a, b } => {
            let field = load(&registry, width)?;
            let product = field
                .multiply(a, b)
                .with_context(|| format!("{} * {} in GF(2^{})", a, b, width))?;
            println!("{}", product);
        }
        Commands::Div { width, a, b } => {
            let field = load(&registry, width)?;
            let quotient = field
                .divide(a, b)
                .with_context(|| format!("{} / {} in GF(2^{})", a, b, width))?;
            println!("{}", quotient);
        }
        Commands::Pow { width, a, e } => {
            let field = load(&registry, width)?;
            let power = field
                .exponentiate(a, e)
                .with_context(|| format!("{}^{} in GF(2^{})", a, e, width))?;
            println!("{}", power);
        }
        Commands::Info { width } => {
            let field = load(&registry, width)?;
            print_info(&field);
        }
        Commands::Tables { width } => {
            check_dump_width(width)?;
            let field = load(&registry, width)?;
            print_tables(&field);
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn check_dump_width(width: u8) -> Result<()> {
    if width > MAX_DUMP_WIDTH {
        bail!(
            "refusing to print GF(2^{}) tables; tables are printed up to width {}",
            width,
            MAX_DUMP_WIDTH
        );
    }
    Ok(())
}

fn load(registry: &FieldRegistry, width: u8) -> Result<Arc<FieldTable>> {
    registry
        .get_field(width)
        .with_context(|| format!("failed to build GF(2^{})", width))
}

fn print_info(field: &FieldTable) {
    let verified = match field.verify() {
        Ok(()) => "ok".to_string(),
        Err(err) => err.to_string(),
    };
    println!(
        "GF(2^{})\tsize={}\torder={}\tpoly={:#x}\tverify={}\tfingerprint={}",
        field.width(),
        field.size(),
        field.order(),
        field.polynomial(),
        verified,
        field.fingerprint().to_hex()
    );
}

fn print_tables(field: &FieldTable) {
    println!("element\tlog\texponent\tantilog");
    for (idx, (log, antilog)) in field
        .log_table()
        .iter()
        .zip(field.antilog_table())
        .enumerate()
    {
        // log of zero is undefined
        let log = if idx == 0 { "-".to_string() } else { log.to_string() };
        println!("{}\t{}\t{}\t{}", idx, log, idx, antilog);
    }
}
