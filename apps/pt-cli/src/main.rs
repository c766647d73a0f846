use clap::{Parser, Subcommand};
use pt_engine::{EngineResult, PropertyEngine, PropertyMap, Schema};
use pt_tables::MemTableSet;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pt-cli")]
#[command(about = "proptab CLI - tabulated fluid property lookup", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the columns of a table
    Columns {
        /// Path to the JSON table set file
        table_file: PathBuf,
        /// Table name (case-insensitive)
        table: String,
    },
    /// Single-axis lookup: interpolate every property at a known value
    Lookup {
        /// Path to the JSON table set file
        table_file: PathBuf,
        /// Table name (case-insensitive)
        table: String,
        /// Known property name (case-insensitive)
        property: String,
        /// Known property value
        value: f64,
    },
    /// Dual-axis lookup on a pressure-first grid table
    LookupDual {
        /// Path to the JSON table set file
        table_file: PathBuf,
        /// Table name (case-insensitive)
        table: String,
        /// Query pressure (units of the table's pressure column)
        pressure: f64,
        /// Secondary property name (T, V, H or S)
        property: String,
        /// Secondary property value
        value: f64,
    },
}

fn main() -> EngineResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Columns { table_file, table } => cmd_columns(&table_file, &table),
        Commands::Lookup {
            table_file,
            table,
            property,
            value,
        } => cmd_lookup(&table_file, &table, &property, value),
        Commands::LookupDual {
            table_file,
            table,
            pressure,
            property,
            value,
        } => cmd_lookup_dual(&table_file, &table, pressure, &property, value),
    }
}

fn load(path: &Path) -> EngineResult<MemTableSet> {
    let set = MemTableSet::from_json_file(path)?;
    tracing::debug!(
        "loaded {} table(s) from {}",
        set.table_names().count(),
        path.display()
    );
    Ok(set)
}

fn cmd_columns(path: &Path, table: &str) -> EngineResult<()> {
    let set = load(path)?;
    let schema = Schema::introspect(&set, table)?;
    for name in schema.stored_names() {
        println!("{name}");
    }
    Ok(())
}

fn cmd_lookup(path: &Path, table: &str, property: &str, value: f64) -> EngineResult<()> {
    let set = load(path)?;
    let mut engine = PropertyEngine::new(&set);
    print_state(&engine.search(table, property, value)?);
    Ok(())
}

fn cmd_lookup_dual(
    path: &Path,
    table: &str,
    pressure: f64,
    property: &str,
    value: f64,
) -> EngineResult<()> {
    let set = load(path)?;
    let engine = PropertyEngine::new(&set);
    print_state(&engine.search_dual(table, pressure, property, value)?);
    Ok(())
}

fn print_state(state: &PropertyMap) {
    for (name, value) in state {
        println!("{name} = {value}");
    }
}
