//! Command-line interface for the romanus utility
//!
//! Without a subcommand the tool runs the classic prompt session: print a
//! prompt, read one line, print its value.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::fs;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use tracing::debug;

use romanus::{ConvertOptions, Converter, NumeralError, SymbolTable, Validator};

/// Prompt printed before reading a numeral in the interactive session
pub const PROMPT: &str = "enter a roman number: ";

/// Romanus - Convert Roman numerals to integers
#[derive(Parser)]
#[command(name = "romanus")]
#[command(about = "A Rust utility to convert Roman numerals to integers")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    /// Symbol table used to read numerals
    #[arg(long, value_enum, default_value_t = TableChoice::Legacy)]
    pub table: TableChoice,
}

impl Cli {
    /// Resolve logging settings; environment variables take precedence
    pub fn logging_settings(&self) -> (String, String) {
        let level = std::env::var("ROMANUS_LOG_LEVEL")
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .unwrap_or_else(|| self.log_level.as_str().to_string());

        let format = std::env::var("ROMANUS_LOG_FORMAT")
            .ok()
            .unwrap_or_else(|| self.log_format.as_str().to_string());

        (level, format)
    }
}

/// Log level options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

/// Symbol table choices
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum TableChoice {
    /// Uppercase glyphs plus lowercase `l` for fifty
    #[default]
    Legacy,
    /// Uppercase glyphs only
    Standard,
}

impl From<TableChoice> for SymbolTable {
    fn from(value: TableChoice) -> Self {
        match value {
            TableChoice::Legacy => SymbolTable::Legacy,
            TableChoice::Standard => SymbolTable::Standard,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a numeral to an integer
    Convert {
        /// Numeral to convert (reads the first line of input when omitted)
        numeral: Option<String>,

        /// Input file whose first line holds the numeral (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Reject numerals that are not well formed
        #[arg(long)]
        strict: bool,
    },

    /// Check that a numeral is well formed
    Validate {
        /// Numeral to check (reads the first line of input when omitted)
        numeral: Option<String>,

        /// Input file whose first line holds the numeral (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Show the symbols of the active table
    Symbols {
        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Serialize)]
struct SymbolEntry {
    glyph: char,
    symbol: String,
    value: i64,
}

/// Main CLI application
pub struct RomanusApp {
    options: ConvertOptions,
}

impl RomanusApp {
    /// Create a new application instance with default settings
    pub fn new() -> Self {
        Self::with_options(ConvertOptions::default())
    }

    pub fn with_options(options: ConvertOptions) -> Self {
        Self { options }
    }

    fn converter(&self) -> Converter {
        Converter::with_table(self.options.table)
    }

    /// Run the application with the given CLI arguments
    pub fn run(&mut self, cli: Cli) -> Result<()> {
        if cli.verbose {
            eprintln!("Romanus v{}", env!("CARGO_PKG_VERSION"));
        }

        self.options.table = cli.table.into();
        debug!(table = %self.options.table, "Resolved symbol table");

        match cli.command {
            None => {
                let stdin = io::stdin();
                let stdout = io::stdout();
                self.prompt_session(stdin.lock(), stdout.lock())
            }
            Some(Commands::Convert {
                numeral,
                input,
                strict,
            }) => {
                self.options.strict = strict;
                self.convert_command(numeral, input, cli.verbose)
            }
            Some(Commands::Validate { numeral, input }) => {
                self.validate_command(numeral, input, cli.verbose)
            }
            Some(Commands::Symbols { json }) => self.symbols_command(json, cli.verbose),
        }
    }

    /// Prompt for one numeral, read a line and print its value
    pub fn prompt_session<R: BufRead, W: Write>(&self, mut reader: R, mut writer: W) -> Result<()> {
        writeln!(writer, "{}", PROMPT)?;
        writer.flush()?;

        let line = read_first_line(&mut reader)?;
        debug!(input_len = line.len(), "Read numeral from prompt");

        writeln!(writer, "{}", self.converter().convert(&line))?;
        writer.flush()?;
        Ok(())
    }

    /// Handle the convert command
    fn convert_command(
        &self,
        numeral: Option<String>,
        input: Option<PathBuf>,
        verbose: bool,
    ) -> Result<()> {
        let numeral = self.resolve_numeral(numeral, input)?;

        if verbose {
            eprintln!("Converting {:?} with the {} table", numeral, self.options.table);
        }

        let value = self.convert_numeral(&numeral)?;
        println!("{}", value);
        Ok(())
    }

    /// Convert according to the configured options
    pub fn convert_numeral(&self, numeral: &str) -> Result<i64> {
        romanus::convert_with_options(numeral, self.options)
    }

    /// Handle the validate command
    fn validate_command(
        &self,
        numeral: Option<String>,
        input: Option<PathBuf>,
        verbose: bool,
    ) -> Result<()> {
        let numeral = self.resolve_numeral(numeral, input)?;

        if verbose {
            eprintln!("Validating {:?} with the {} table", numeral, self.options.table);
        }

        match Validator::with_table(self.options.table).validate(&numeral) {
            Ok(()) => {
                println!("✓ Valid numeral: {}", self.converter().convert(&numeral));
                Ok(())
            }
            Err(e) => {
                println!("✗ Invalid numeral: {}", e);
                Err(e.into())
            }
        }
    }

    /// Handle the symbols command
    fn symbols_command(&self, json: bool, verbose: bool) -> Result<()> {
        if verbose {
            eprintln!("Listing symbols of the {} table", self.options.table);
        }
        print!("{}", self.render_symbols(json)?);
        Ok(())
    }

    /// Render the active symbol table as text or JSON
    pub fn render_symbols(&self, json: bool) -> Result<String> {
        let entries: Vec<SymbolEntry> = self
            .options
            .table
            .entries()
            .iter()
            .map(|(glyph, symbol)| SymbolEntry {
                glyph: *glyph,
                symbol: symbol.to_string(),
                value: symbol.value(),
            })
            .collect();

        if json {
            let document = serde_json::json!({
                "table": self.options.table.to_string(),
                "symbols": entries,
                "total": entries.len(),
            });
            Ok(format!("{}\n", serde_json::to_string_pretty(&document)?))
        } else {
            let mut out = format!("Symbols in the {} table:\n", self.options.table);
            for entry in &entries {
                out.push_str(&format!("  {}  {:>4}\n", entry.glyph, entry.value));
            }
            out.push_str(&format!("\nTotal: {} symbols\n", entries.len()));
            Ok(out)
        }
    }

    /// Take the numeral from the argument, or the first line of input
    fn resolve_numeral(&self, numeral: Option<String>, input: Option<PathBuf>) -> Result<String> {
        match numeral {
            Some(numeral) => Ok(numeral),
            None => self.read_input(input),
        }
    }

    /// Read the first line from file or stdin
    pub fn read_input(&self, input: Option<PathBuf>) -> Result<String> {
        match input {
            Some(path) if path.to_string_lossy() != "-" => {
                let file = fs::File::open(&path).map_err(|e| {
                    anyhow!("Failed to read input file '{}': {}", path.display(), e)
                })?;
                Ok(read_first_line(&mut BufReader::new(file))?)
            }
            _ => Ok(read_first_line(&mut io::stdin().lock())?),
        }
    }

    #[cfg(test)]
    pub fn options(&self) -> ConvertOptions {
        self.options
    }
}

impl Default for RomanusApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Read one line, without its line terminator
///
/// End of input before any data yields an empty line. Bytes that are not
/// valid UTF-8 become U+FFFD, which no symbol table maps.
pub fn read_first_line<R: BufRead>(reader: &mut R) -> Result<String, NumeralError> {
    let mut buf = Vec::new();
    reader.read_until(b'\n', &mut buf)?;
    if buf.ends_with(b"\n") {
        buf.pop();
        if buf.ends_with(b"\r") {
            buf.pop();
        }
    }
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
