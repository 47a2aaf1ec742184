//! Command-line interface for rxgen
//! Generates random strings from a pattern, or inspects how a pattern is read.
//!
//! Usage:
//!   rxgen generate `<pattern>` [--seed N] [--count N] [--format text|json] [--config FILE]
//!   rxgen tokens `<pattern>`                - Print the token stream
//!   rxgen check `<pattern>` [--ast]         - Validate a pattern, optionally printing its AST
//!
//! Settings are read from the built-in defaults, `./rxgen.toml` if it exists, the
//! `--config` file, `RXGEN_*` environment variables and finally the flags.
//! Logging goes to stderr and is controlled by `RUST_LOG`.

use clap::{Arg, ArgAction, ArgMatches, Command};
use rxgen::config::Loader;
use rxgen::lexer::{token_listing, tokenize};
use rxgen::processor::{GenerationRequest, OutputFormat};

/// Picked up from the working directory when present
const LOCAL_CONFIG: &str = "rxgen.toml";

fn main() {
    env_logger::init();

    let matches = Command::new("rxgen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate random strings from a restricted regular expression")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("generate")
                .about("Generate strings matching a pattern")
                .arg(pattern_arg())
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .short('s')
                        .help("Seed for reproducible output")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    Arg::new("count")
                        .long("count")
                        .short('n')
                        .help("Number of strings to generate")
                        .value_parser(clap::value_parser!(u32)),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format")
                        .value_parser(["text", "json"]),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("Configuration file layered over the defaults"),
                ),
        )
        .subcommand(
            Command::new("tokens")
                .about("Print the tokens of a pattern")
                .arg(pattern_arg()),
        )
        .subcommand(
            Command::new("check")
                .about("Check that a pattern parses")
                .arg(pattern_arg())
                .arg(
                    Arg::new("ast")
                        .long("ast")
                        .help("Print the parsed tree")
                        .action(ArgAction::SetTrue),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("generate", generate_matches)) => handle_generate_command(generate_matches),
        Some(("tokens", tokens_matches)) => handle_tokens_command(&pattern(tokens_matches)),
        Some(("check", check_matches)) => {
            handle_check_command(&pattern(check_matches), check_matches.get_flag("ast"))
        }
        _ => unreachable!(),
    }
}

fn pattern_arg() -> Arg {
    Arg::new("pattern")
        .help("Pattern to read, e.g. 'a(b|c)d{2,3}'")
        .required(true)
        .allow_hyphen_values(true)
        .index(1)
}

fn pattern(matches: &ArgMatches) -> String {
    matches
        .get_one::<String>("pattern")
        .cloned()
        .unwrap_or_default()
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}

/// Handle the generate command
fn handle_generate_command(matches: &ArgMatches) {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    loader = loader.with_environment();
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader
            .set_override("output.format", format.as_str())
            .unwrap_or_else(|e| fail(e));
    }
    if let Some(count) = matches.get_one::<u32>("count") {
        loader = loader
            .set_override("output.count", i64::from(*count))
            .unwrap_or_else(|e| fail(e));
    }
    let config = loader.build().unwrap_or_else(|e| fail(e));

    let request = GenerationRequest {
        pattern: pattern(matches),
        seed: matches.get_one::<u64>("seed").copied(),
        count: config.output.count,
        generator: config.generator,
    };
    let batch = request.run().unwrap_or_else(|e| fail(e));
    let output = batch
        .render(config.output.format)
        .unwrap_or_else(|e| fail(e));

    if config.output.format == OutputFormat::Text && batch.samples.is_empty() {
        return;
    }
    println!("{}", output);
}

/// Handle the tokens command
fn handle_tokens_command(pattern: &str) {
    let tokens = tokenize(pattern).unwrap_or_else(|e| fail(e));
    if !tokens.is_empty() {
        println!("{}", token_listing(&tokens));
    }
}

/// Handle the check command
fn handle_check_command(pattern: &str, show_ast: bool) {
    let ast = rxgen::parse(pattern).unwrap_or_else(|e| fail(e));
    if show_ast {
        print!("{}", ast.outline());
    }
    println!("ok");
}
