//! CLI entry point for cspgen.
//!
//! Argument parsing, file IO, logging setup and exit codes. All policy logic
//! lives in `cspgen-app`.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use cspgen_app::{
    exit_code, format_not_found, format_service, format_service_table, parse_category,
    render_output, run_generate, run_list, run_show, GenerateInput, ListFilter, OutputFormat,
    ShowOutput,
};
use cspgen_settings::{parse_rule, Overrides};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG: &str = "cspgen.toml";
const LOG_ENV: &str = "CSPGEN_LOG";

#[derive(Parser, Debug)]
#[command(
    name = "cspgen",
    version,
    about = "Content-Security-Policy generator for third-party services"
)]
struct Cli {
    /// Path to cspgen config TOML (default: ./cspgen.toml if present).
    #[arg(long, global = true)]
    config: Option<Utf8PathBuf>,

    /// Override profile (strict|standard|compat).
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Log debug output to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a policy for the given services.
    Generate(GenerateArgs),

    /// List bundled services.
    List {
        /// Only services in this category.
        #[arg(long)]
        category: Option<String>,

        /// Case-insensitive search over id, name, aliases and description.
        #[arg(long)]
        search: Option<String>,
    },

    /// Show one service by id or alias.
    Show { identifier: String },

    /// Print the config JSON schema.
    Schema,
}

#[derive(clap::Args, Debug)]
struct GenerateArgs {
    /// Service ids or aliases, appended after the configured services.
    services: Vec<String>,

    /// Generate a fresh nonce.
    #[arg(long)]
    nonce: bool,

    /// Use this nonce instead of generating one.
    #[arg(long, conflicts_with = "nonce")]
    nonce_value: Option<String>,

    /// Random bytes for a generated nonce.
    #[arg(long)]
    nonce_length: Option<usize>,

    /// Encoding for a generated nonce (base64|hex).
    #[arg(long)]
    nonce_encoding: Option<String>,

    #[arg(long)]
    report_uri: Option<String>,

    /// Do not add 'self' to the fetch directives.
    #[arg(long)]
    no_self: bool,

    #[arg(long)]
    unsafe_inline: bool,

    #[arg(long)]
    unsafe_eval: bool,

    /// Extra source as DIRECTIVE=SOURCE (repeatable).
    #[arg(long = "rule", value_name = "DIRECTIVE=SOURCE")]
    rules: Vec<String>,

    /// Output format (header|http|meta|nginx|apache|markdown|json).
    #[arg(long, default_value = "header")]
    format: String,

    /// Use the Content-Security-Policy-Report-Only header name.
    #[arg(long)]
    report_only: bool,

    /// Write output here instead of stdout.
    #[arg(long, short)]
    output: Option<Utf8PathBuf>,

    /// Exit 2 when generation produced warnings.
    #[arg(long)]
    deny_warnings: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.cmd {
        Commands::Generate(args) => cmd_generate(&cli, args),
        Commands::List { category, search } => cmd_list(category.as_deref(), search.clone()),
        Commands::Show { identifier } => cmd_show(identifier),
        Commands::Schema => cmd_schema(),
    };

    match result {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("cspgen error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));
    // Logs go to stderr; stdout carries the policy.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn cmd_generate(cli: &Cli, args: &GenerateArgs) -> anyhow::Result<i32> {
    let format: OutputFormat = args.format.parse()?;
    let config_text = read_config(cli.config.as_deref())?;

    let rules = args
        .rules
        .iter()
        .map(|r| parse_rule(r))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let overrides = Overrides {
        profile: cli.profile.clone(),
        services: args.services.clone(),
        nonce: args.nonce.then_some(true),
        nonce_value: args.nonce_value.clone(),
        nonce_length: args.nonce_length,
        nonce_encoding: args.nonce_encoding.clone(),
        report_uri: args.report_uri.clone(),
        include_self: args.no_self.then_some(false),
        unsafe_inline: args.unsafe_inline.then_some(true),
        unsafe_eval: args.unsafe_eval.then_some(true),
        rules,
    };

    let output = run_generate(GenerateInput {
        config_text: &config_text,
        overrides,
    })?;

    for warning in &output.result.warnings {
        eprintln!("warning: {warning}");
    }

    let rendered = render_output(&output.result, format, args.report_only)?;
    match &args.output {
        Some(path) => write_text_file(path, &rendered).context("write output")?,
        None => print!("{rendered}"),
    }

    Ok(exit_code(&output.result, args.deny_warnings))
}

/// An explicit `--config` must exist; the default file is optional.
fn read_config(explicit: Option<&Utf8Path>) -> anyhow::Result<String> {
    match explicit {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("read config: {path}"))
        }
        None => Ok(std::fs::read_to_string(DEFAULT_CONFIG).unwrap_or_default()),
    }
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {path}"))?;
    Ok(())
}

fn cmd_list(category: Option<&str>, search: Option<String>) -> anyhow::Result<i32> {
    let filter = ListFilter {
        category: category.map(parse_category).transpose()?,
        search,
    };
    let services = run_list(&filter)?;
    print!("{}", format_service_table(&services));
    Ok(0)
}

fn cmd_show(identifier: &str) -> anyhow::Result<i32> {
    match run_show(identifier)? {
        ShowOutput::Found(service) => {
            print!("{}", format_service(service));
            Ok(0)
        }
        ShowOutput::NotFound {
            identifier,
            suggestions,
        } => {
            eprint!("{}", format_not_found(&identifier, &suggestions));
            Ok(1)
        }
    }
}

fn cmd_schema() -> anyhow::Result<i32> {
    let schema = cspgen_settings::config_schema();
    let json = serde_json::to_string_pretty(&schema).context("serialize config schema")?;
    println!("{json}");
    Ok(0)
}
