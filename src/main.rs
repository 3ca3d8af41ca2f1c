/*
 * ==========================================================================
 * PAWX - Code with Claws!
 * ==========================================================================
 * 
 * jackp Command-Line Interface
 * 
 * Tokenizes or parses a Jack source file and prints the result. Parse trees
 * print as an indented outline, as XML, or as JSON.
 * 
 * --------------------------------------------------------------------------
 * Author:   Sam Wilcox
 * Email:    sam@pawx-lang.com
 * Website:  https://www.pawx-lang.com
 * Github:   https://github.com/samwilcox/pawx
 * 
 * License:
 * This file is part of the PAWX programming language project.
 * 
 * PAWX is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 * 
 * You may choose either license to govern your use of this software.
 * Full license text available at:
 *    https://license.pawx-lang.com
 * 
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * 
 * ==========================================================================
 */

use anyhow::{Context, Result};
use clap::{ArgAction, Parser as CliParser, Subcommand, ValueEnum};
use jack_parser::{tokenize, DiagnosticPrinter, Error, ParserConfig, Token};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(CliParser)]
#[command(name = "jackp")]
#[command(about = "Jack front end: tokenizer and parse tree printer")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tokenize a .jack file and print its tokens
    Lex {
        /// Input .jack file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print the tokens as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Parse a .jack file and print its parse tree
    Parse {
        /// Input .jack file, or a JSON token array with --tokens
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Read a JSON token array instead of source text
        #[arg(long)]
        tokens: bool,

        /// JSON file with parser settings
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Maximum nesting of expressions and blocks
        #[arg(long)]
        max_depth: Option<usize>,

        /// Accept `skip` in place of an expression
        #[arg(long)]
        allow_skip: bool,

        /// Ignore tokens after the class's closing brace
        #[arg(long)]
        allow_trailing: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Xml,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli.command) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "jack_parser=debug",
        _ => "jack_parser=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands) -> Result<ExitCode> {
    match command {
        Commands::Lex { input, json } => lex_file(&input, json),
        Commands::Parse {
            input,
            format,
            tokens,
            config,
            max_depth,
            allow_skip,
            allow_trailing,
        } => {
            let mut settings = match config {
                Some(path) => load_config(&path)?,
                None => ParserConfig::default(),
            };
            if let Some(depth) = max_depth {
                settings = settings.max_depth(depth);
            }
            if allow_skip {
                settings = settings.allow_skip(true);
            }
            if allow_trailing {
                settings = settings.allow_trailing(true);
            }
            parse_file(&input, format, tokens, settings)
        }
    }
}

fn lex_file(input: &Path, json: bool) -> Result<ExitCode> {
    let source = read(input)?;

    let tokens = match tokenize(&source) {
        Ok(tokens) => tokens,
        Err(err) => return Ok(report(input, &source, err.into())),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&tokens)?);
    } else {
        for token in &tokens {
            println!("{:<16} {}", token.kind, token.value);
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn parse_file(input: &Path, format: Format, from_tokens: bool, config: ParserConfig) -> Result<ExitCode> {
    let text = read(input)?;

    let (source, tokens) = if from_tokens {
        let tokens: Vec<Token> = serde_json::from_str(&text)
            .with_context(|| format!("{} is not a JSON token array", input.display()))?;
        (String::new(), tokens)
    } else {
        match tokenize(&text) {
            Ok(tokens) => (text, tokens),
            Err(err) => return Ok(report(input, &text, err.into())),
        }
    };

    let tree = match jack_parser::parse_with(tokens, config) {
        Ok(tree) => tree,
        Err(err) => return Ok(report(input, &source, err.into())),
    };

    match format {
        Format::Text => print!("{tree}"),
        Format::Xml => print!("{}", tree.to_xml()),
        Format::Json => println!("{}", serde_json::to_string_pretty(&tree)?),
    }

    Ok(ExitCode::SUCCESS)
}

fn load_config(path: &Path) -> Result<ParserConfig> {
    let text = read(path)?;
    ParserConfig::from_json(&text).with_context(|| format!("invalid config in {}", path.display()))
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))
}

fn report(input: &Path, source: &str, err: Error) -> ExitCode {
    DiagnosticPrinter::new(input.display().to_string(), source).print(&err);
    ExitCode::FAILURE
}
