//! Interactive item lookup console
//!
//! A blocking prompt/read/print loop over stdio. The loop holds an immutable
//! reference to the finished processor state; it can query it but never
//! change it. Ends on the `exit` keyword, end of input, or Ctrl+C.

use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::processor::LogProcessor;
use crate::types::{ItemQuery, LedgerResult};

/// Interactive query loop over stdio
pub struct QueryConsole {
    reader: BufReader<io::Stdin>,
    writer: BufWriter<io::Stdout>,
    interrupted: Arc<AtomicBool>,
}

impl QueryConsole {
    /// Create a console over the process stdio handles
    pub fn new() -> Self {
        Self {
            reader: BufReader::new(io::stdin()),
            writer: BufWriter::new(io::stdout()),
            interrupted: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Install the Ctrl+C handler that ends the loop cleanly
    ///
    /// Can only be called once per process; a second call fails inside
    /// `ctrlc`.
    pub fn install_interrupt_handler(&self) -> LedgerResult<()> {
        let flag = Arc::clone(&self.interrupted);
        ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))?;
        Ok(())
    }

    /// Run the loop (blocking) against the finished aggregation state
    pub fn run(&mut self, processor: &LogProcessor) -> LedgerResult<()> {
        writeln!(self.writer, "\nInteractive mode")?;
        writeln!(self.writer, "Type 'exit' to quit")?;

        let mut line = String::new();
        loop {
            if self.interrupted.load(Ordering::SeqCst) {
                break;
            }

            write!(self.writer, "\nEnter an item_type_id to look up: ")?;
            self.writer.flush()?;

            line.clear();
            match self.reader.read_line(&mut line) {
                Ok(0) => break, // end of input
                Ok(_) => {}
                Err(e) if e.kind() == io::ErrorKind::Interrupted => break,
                Err(e) => return Err(e.into()),
            }
            if self.interrupted.load(Ordering::SeqCst) {
                break;
            }

            let input = line.trim();
            if input.eq_ignore_ascii_case("exit") {
                break;
            }

            match input.parse::<i64>() {
                Ok(item_type_id) => {
                    let result = processor.query_item(item_type_id);
                    self.print_query(&result)?;
                }
                Err(_) => {
                    writeln!(self.writer, "Please enter a valid numeric item_type_id")?;
                }
            }
        }

        self.writer.flush()?;
        Ok(())
    }

    fn print_query(&mut self, result: &ItemQuery) -> LedgerResult<()> {
        writeln!(self.writer, "\nItem {} info:", result.item_type_id)?;
        writeln!(self.writer, "Total in game: {}", result.total_count)?;
        writeln!(self.writer, "Players holding it: {}", result.players_with_item)?;
        writeln!(self.writer, "Top 10 players by count")?;
        writeln!(self.writer, "Player id, item count")?;
        for (player_id, count) in &result.top_holders {
            writeln!(self.writer, "{}, {}", player_id, count)?;
        }
        Ok(())
    }
}

impl Default for QueryConsole {
    fn default() -> Self {
        Self::new()
    }
}
