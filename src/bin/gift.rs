//! Command-line interface for gift
//! This binary parses a GIFT quiz file and prints its questions and answers in one of the
//! registered formats.
//!
//! Usage:
//!   gift --file `<path>` [--format `<format>`] [--config `<toml>`]   - Parse and render a file
//!   gift --file `<path>` --tokens                                 - Dump the token stream as JSON
//!   gift --list-formats                                          - List all available formats

use clap::{Arg, ArgAction, Command};
use gift::gift::config::{GiftConfig, Loader};
use gift::gift::formats::FormatRegistry;
use gift::gift::parsing::GiftParser;

fn main() {
    let matches = Command::new("gift")
        .version(env!("CARGO_PKG_VERSION"))
        .about("GIFT quiz file parser")
        .arg_required_else_help(true)
        .arg(
            Arg::new("file")
                .long("file")
                .short('f')
                .help("Path to the GIFT file")
                .required_unless_present("list-formats"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format (default from configuration, usually 'text')"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in configuration"),
        )
        .arg(
            Arg::new("tokens")
                .long("tokens")
                .help("Print the token stream as JSON instead of parsing")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let config = load_config(
        matches.get_one::<String>("config"),
        matches.get_one::<String>("format"),
    );
    let registry = FormatRegistry::from_config(&config.render);

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&registry);
        return;
    }

    let Some(path) = matches.get_one::<String>("file") else {
        eprintln!("Error: --file is required");
        std::process::exit(1);
    };

    if matches.get_flag("tokens") {
        handle_tokens_command(path);
        return;
    }

    handle_parse_command(path, &config.render.format, &registry);
}

fn load_config(path: Option<&String>, format: Option<&String>) -> GiftConfig {
    let mut loader = Loader::new();
    if let Some(path) = path {
        loader = loader.with_file(path);
    }

    let config = match format {
        Some(format) => loader
            .set_override("render.format", format.as_str())
            .and_then(Loader::build),
        None => loader.build(),
    };

    config.unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    })
}

fn read_source(path: &str) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    })
}

/// Handle the default parse-and-render command
fn handle_parse_command(path: &str, format: &str, registry: &FormatRegistry) {
    if !registry.has(format) {
        eprintln!("Format '{}' not found", format);
        eprintln!("Available formats: {}", registry.list_formats().join(", "));
        std::process::exit(1);
    }

    let source = read_source(path);
    let parser = GiftParser::new();
    let tokenized = parser.tokenizer().tokenize(&source);
    for error in &tokenized.errors {
        eprintln!("{}", error);
    }

    let document = parser.reduce(tokenized.tokens).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });

    let output = registry.serialize(&document, format).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });

    print!("{}", output);
}

/// Handle the --tokens command
fn handle_tokens_command(path: &str) {
    let source = read_source(path);
    let tokenized = GiftParser::new().tokenizer().tokenize(&source);
    for error in &tokenized.errors {
        eprintln!("{}", error);
    }

    let json = serde_json::to_string_pretty(&tokenized.tokens).unwrap_or_else(|e| {
        eprintln!("Error formatting tokens: {}", e);
        std::process::exit(1);
    });
    println!("{}", json);
}

/// Handle the --list-formats command
fn handle_list_formats_command(registry: &FormatRegistry) {
    println!("Available formats:\n");

    for name in registry.list_formats() {
        if let Some(formatter) = registry.get(&name) {
            println!("  {}", name);
            println!("    {}", formatter.description());
            println!();
        }
    }
}
