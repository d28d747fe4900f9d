//! Econ Ledger - Binary Entry Point
//!
//! Thin glue around the library: argument handling, input checks, the batch
//! pipeline and the interactive loop.

use std::env;
use std::path::{Path, PathBuf};
use std::process;

use econ_ledger::reader::{InventoryLogReader, LogReader, MoneyLogReader};
use econ_ledger::types::LedgerResult;
use econ_ledger::writer::{CombinedLogWriter, ReportWriter};
use econ_ledger::{LogProcessor, QueryConsole};

const DEFAULT_INVENTORY_FILE: &str = "sources_files/inventory_logs.txt";
const DEFAULT_MONEY_FILE: &str = "sources_files/money_logs.txt";
const COMBINED_LOG_FILE: &str = "combined_log.txt";
const REPORT_FILE: &str = "output.txt";

fn main() {
    let args: Vec<String> = env::args().collect();

    let (inventory_file, money_file) = match args.len() {
        1 => (
            PathBuf::from(DEFAULT_INVENTORY_FILE),
            PathBuf::from(DEFAULT_MONEY_FILE),
        ),
        3 => (PathBuf::from(&args[1]), PathBuf::from(&args[2])),
        _ => {
            println!("Usage: ledger-cli");
            println!("Or: ledger-cli inventory_logs.txt money_logs.txt");
            return;
        }
    };

    for path in [&inventory_file, &money_file] {
        if !path.exists() {
            println!("File {} not found", path.display());
            println!("Please make sure files are in the sources_files folder");
            return;
        }
    }

    if let Err(e) = run(&inventory_file, &money_file) {
        eprintln!("Error occurred: {}", e);
        process::exit(1);
    }
}

fn run(inventory_file: &Path, money_file: &Path) -> LedgerResult<()> {
    println!("Reading logs...");
    let inventory_logs = InventoryLogReader::new().read_logs(inventory_file)?;
    let money_logs = MoneyLogReader::new().read_logs(money_file)?;

    println!("Processing logs...");
    let mut processor = LogProcessor::new();
    processor.process_logs(inventory_logs, money_logs);

    println!("Creating combined log...");
    let combined = processor.combined_log();
    CombinedLogWriter::new().write_logs(&combined, Path::new(COMBINED_LOG_FILE))?;

    println!("Generating statistics...");
    let stats = processor.generate_statistics();
    ReportWriter::new().write_report(&stats, Path::new(REPORT_FILE))?;

    println!("Starting interactive mode...");
    let mut console = QueryConsole::new();
    console.install_interrupt_handler()?;
    console.run(&processor)?;

    println!("\nProcessing completed!");
    println!(
        "Results saved to {} and {}",
        COMBINED_LOG_FILE, REPORT_FILE
    );
    Ok(())
}
