//! Command-line interface for markstyle
//! Tokenizes markup and stylesheets, or parses stylesheets and prints the AST in one of several formats.
//!
//! Usage:
//!   markstyle execute `<path>` [--format `<format>`] [--config `<file>`] [--strict]  - Process a file
//!   markstyle list-formats                                                     - List all available formats

use clap::{Arg, ArgAction, ArgMatches, Command};
use markstyle::config::{Loader, MarkstyleConfig};
use markstyle::processor::{available_formats, process_file, ProcessingSpec};
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = Command::new("markstyle")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting markup and stylesheet files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log pipeline activity to stderr")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("execute")
                .about("Process a file and print the result")
                .arg(
                    Arg::new("path")
                        .help("Path to the markup or stylesheet file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Processing spec (e.g., 'ast-css', 'token-json', 'markup-simple')"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("Configuration file layered over the defaults"),
                )
                .arg(
                    Arg::new("strict")
                        .long("strict")
                        .help("Require every declaration to end with ';'")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available processing specs"))
        .get_matches();

    init_logging(matches.get_flag("verbose"));

    match matches.subcommand() {
        Some(("execute", execute_matches)) => handle_execute_command(execute_matches),
        Some(("list-formats", _)) => handle_list_formats_command(),
        _ => unreachable!(),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("markstyle=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Handle the execute command
fn handle_execute_command(matches: &ArgMatches) {
    let config = load_config(matches).unwrap_or_else(|e| fail("Configuration error", e));

    let Some(path) = matches.get_one::<String>("path") else {
        unreachable!("path is a required argument")
    };
    let format = matches
        .get_one::<String>("format")
        .cloned()
        .unwrap_or_else(|| config.output.format.clone());

    let spec = ProcessingSpec::from_string(&format).unwrap_or_else(|e| fail("Format error", e));
    let output = process_file(path, spec, &config).unwrap_or_else(|e| fail("Error", e));

    print!("{}", output);
}

fn load_config(matches: &ArgMatches) -> Result<MarkstyleConfig, config::ConfigError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if matches.get_flag("strict") {
        loader = loader.set_override("parsing.require_semicolon", true)?;
    }
    loader.build()
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available processing specs:\n");
    for format in available_formats() {
        println!("  {}", format);
    }
}

fn fail(context: &str, err: impl std::fmt::Display) -> ! {
    eprintln!("{}: {}", context, err);
    std::process::exit(1);
}
