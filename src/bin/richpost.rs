//! Command-line interface for richpost
//! This binary renders forum post bodies into the supported output formats.
//!
//! Usage:
//!   richpost render `<path>` [--format `<format>`] [--config `<file>`]  - Render a post body (`-` reads stdin)
//!   richpost formats                                               - List available output formats
//!   richpost config [--config `<file>`]                              - Print the effective configuration
//!
//! Configuration is layered: built-in defaults, then `richpost.toml` in the working directory
//! if present, then the `--config` file.

use clap::{Arg, ArgAction, ArgMatches, Command};
use richpost::formats::FormatRegistry;
use richpost::loader::ContentLoader;
use richpost::settings::{Loader, RichpostConfig};

const LOCAL_CONFIG: &str = "richpost.toml";

fn main() {
    let config_arg = Arg::new("config")
        .long("config")
        .short('c')
        .help("TOML file layered over the built-in defaults");

    let matches = Command::new("richpost")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for rendering forum post markup")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .help("Log pipeline progress to stderr")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("render")
                .about("Render a post body")
                .arg(
                    Arg::new("path")
                        .help("Path to the post body, or '-' for stdin")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'html', 'json', 'tag', 'text')")
                        .default_value("html"),
                )
                .arg(config_arg.clone()),
        )
        .subcommand(Command::new("formats").about("List available output formats"))
        .subcommand(
            Command::new("config")
                .about("Print the effective configuration as JSON")
                .arg(config_arg),
        )
        .get_matches();

    init_logging(matches.get_flag("verbose"));

    match matches.subcommand() {
        Some(("render", render_matches)) => {
            let path = render_matches.get_one::<String>("path").unwrap();
            let format = render_matches.get_one::<String>("format").unwrap();
            let config = load_config(render_matches);
            handle_render_command(path, format, &config);
        }
        Some(("formats", _)) => {
            handle_formats_command();
        }
        Some(("config", config_matches)) => {
            let config = load_config(config_matches);
            handle_config_command(&config);
        }
        _ => unreachable!(),
    }
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn load_config(matches: &ArgMatches) -> RichpostConfig {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    loader.build().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    })
}

/// Handle the render command
fn handle_render_command(path: &str, format: &str, config: &RichpostConfig) {
    let loader = if path == "-" {
        let source = std::io::read_to_string(std::io::stdin()).unwrap_or_else(|e| {
            eprintln!("Error: failed to read stdin: {}", e);
            std::process::exit(1);
        });
        ContentLoader::from_string(source)
    } else {
        ContentLoader::from_path(path).unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        })
    };

    let output = loader
        .with_options(config.render_options())
        .serialize(format)
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            eprintln!("\nAvailable formats:");
            for name in FormatRegistry::with_defaults().list_formats() {
                eprintln!("  {}", name);
            }
            std::process::exit(1);
        });

    println!("{}", output);
}

/// Handle the formats command
fn handle_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available output formats:\n");

    for name in registry.list_formats() {
        println!("  {}", name);
        if let Ok(format) = registry.get(&name) {
            println!("    {}", format.description());
        }
        println!();
    }
}

/// Handle the config command
fn handle_config_command(config: &RichpostConfig) {
    let output = serde_json::to_string_pretty(config).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    println!("{}", output);
}
