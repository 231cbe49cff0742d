use clap::{Parser, Subcommand, ValueEnum};
use schema_lexer::{LexError, Lexer, Token};
use std::io::Read;
use std::path::Path;

#[derive(Parser)]
#[command(name = "schema-lex")]
#[command(about = "Tokenizer for graph schema definitions")]
#[command(version)]
struct Cli {
    /// Show debug logs (honours RUST_LOG when set)
    #[arg(long, short, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all logs
    #[arg(long, short, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the tokens of a schema file
    Tokens {
        /// Input schema file, or `-` for stdin
        path: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Check a schema file for lexical errors without printing tokens
    Check {
        /// Input schema file, or `-` for stdin
        path: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn init_tracing(cli: &Cli) {
    let filter = if cli.quiet {
        tracing_subscriber::EnvFilter::new("off")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into())
    } else {
        tracing_subscriber::EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    match cli.command {
        Command::Tokens { path, format } => cmd_tokens(&path, format),
        Command::Check { path } => cmd_check(&path),
    }
}

fn read_source(path: &str) -> String {
    if path == "-" {
        let mut source = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut source) {
            eprintln!("Error reading stdin: {e}");
            std::process::exit(1);
        }
        return source;
    }

    let p = Path::new(path);
    if !p.exists() {
        eprintln!("Error: file not found: {path}");
        std::process::exit(1);
    }
    match std::fs::read_to_string(p) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {path}: {e}");
            std::process::exit(1);
        }
    }
}

fn lex(path: &str, source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    if let Err(e) = lexer.run() {
        report(path, source, &e);
        std::process::exit(1);
    }
    tracing::debug!(path, tokens = lexer.tokens().len(), "lexed schema");
    lexer.into_tokens()
}

/// Print a lex error with the offending source line and a caret under it.
fn report(path: &str, source: &str, e: &LexError) {
    eprintln!("{path}: {e}");
    if let Some(line) = source.lines().nth(e.span.line - 1) {
        let pointer = caret_padding(line, e.span.column);
        eprintln!("  |\n  | {line}\n  | {pointer}^");
    }
}

/// Padding that lines a caret up under `column`, keeping tabs as tabs.
fn caret_padding(line: &str, column: usize) -> String {
    line.chars()
        .take(column.saturating_sub(1))
        .map(|c| if c == '\t' { '\t' } else { ' ' })
        .collect()
}

fn cmd_tokens(path: &str, format: Format) {
    let source = read_source(path);
    let tokens = lex(path, &source);

    match format {
        Format::Text => {
            for token in &tokens {
                println!("{}", render(token));
            }
        }
        Format::Json => match serde_json::to_string_pretty(&tokens) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error serializing tokens: {e}");
                std::process::exit(1);
            }
        },
    }
}

fn cmd_check(path: &str) {
    let source = read_source(path);
    lex(path, &source);
    eprintln!("OK: {path}");
}

/// One token per line: `kind 'text' @line:column`.
fn render(token: &Token) -> String {
    format!(
        "{:<16} {:?} @{}:{}",
        token.kind.to_string(),
        token.text,
        token.span.line,
        token.span.column
    )
}
