//! cn CLI
//!
//! Entry point for the `cn` command-line tool.

use clap::{Args, Parser, Subcommand};
use cnmerge::config::{user_config_path, REPO_CONFIG_PATH};
use cnmerge::{telemetry, EffectiveConfig, Merger};
use serde_json::{json, Map, Value};
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "cn")]
#[command(about = "Merge utility-first CSS class names", version)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct GlobalArgs {
    /// Path to repo config file (default: .cn/merge.toml)
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    /// Class prefix every utility must carry (e.g. "tw-")
    #[arg(long, global = true)]
    prefix: Option<String>,

    /// Modifier separator (default: ":")
    #[arg(long, global = true)]
    separator: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    log_json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge class names; reads stdin line by line when no classes are given
    Merge {
        /// Output in JSON format
        #[arg(long)]
        json: bool,

        /// Class-name arguments, merged in order (negative utilities like
        /// `-mt-2` are accepted as classes)
        #[arg(allow_hyphen_values = true)]
        classes: Vec<String>,
    },

    /// Explain which classes survive a merge and why
    Explain {
        /// Output in human-readable format instead of JSON
        #[arg(long)]
        human: bool,

        /// The class names to explain (after --)
        #[arg(last = true, required = true)]
        classes: Vec<String>,
    },

    /// List utility groups and the groups they override
    Groups {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Verify the configuration layers and print the effective config
    Verify,
}

fn main() {
    let cli = Cli::parse();
    telemetry::init(cli.global.verbose, cli.global.log_json);

    match cli.command {
        Commands::Merge { json, classes } => run_merge(&cli.global, json, classes),
        Commands::Explain { human, classes } => run_explain(&cli.global, human, classes),
        Commands::Groups { json } => run_groups(&cli.global, json),
        Commands::Verify => run_verify(&cli.global),
    }
}

fn run_merge(global: &GlobalArgs, json_output: bool, classes: Vec<String>) {
    let merger = load_merger(global);

    if !classes.is_empty() {
        print_merged(&merger.merge(classes), json_output);
        return;
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        match line {
            Ok(line) => print_merged(&merger.merge_str(&line), json_output),
            Err(e) => {
                eprintln!("Error reading stdin: {}", e);
                process::exit(1);
            }
        }
    }
}

fn print_merged(output: &str, json_output: bool) {
    if json_output {
        println!("{}", json!({ "output": output }));
    } else {
        println!("{}", output);
    }
}

fn run_explain(global: &GlobalArgs, human: bool, classes: Vec<String>) {
    let merger = load_merger(global);
    let report = merger.report(classes);

    if human {
        println!("{}", report.to_human());
    } else {
        match report.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing output: {}", e);
                process::exit(1);
            }
        }
    }
}

fn run_groups(global: &GlobalArgs, json_output: bool) {
    let merger = load_merger(global);
    let table = merger.classifier().table();

    if json_output {
        let groups: Vec<Value> = table
            .groups()
            .iter()
            .map(|id| {
                let postfix: Vec<&str> = table
                    .conflicts(id, true)
                    .into_iter()
                    .skip(table.conflicts(id, false).len())
                    .collect();
                json!({
                    "id": id,
                    "conflicts": table.conflicts(id, false),
                    "postfix_conflicts": postfix,
                })
            })
            .collect();
        match serde_json::to_string_pretty(&groups) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing output: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    let width = table.groups().iter().map(String::len).max().unwrap_or(0);
    for id in table.groups() {
        let conflicts = table.conflicts(id, false);
        if conflicts.is_empty() {
            println!("{}", id);
        } else {
            println!("{:<width$}  overrides {}", id, conflicts.join(", "), width = width);
        }
    }
    println!();
    println!("{} groups", table.groups().len());
}

fn run_verify(global: &GlobalArgs) {
    let effective = load_effective_config(global);

    // Conflicts are only checked against the group table once it is built.
    if let Err(e) = effective
        .merge_config()
        .and_then(|config| Merger::from_config(&config))
    {
        eprintln!("Configuration error: {}", e);
        process::exit(1);
    }

    println!("Configuration valid");
    for source in &effective.sources {
        match &source.path {
            Some(path) => println!("  {:?}: {}", source.origin, path),
            None => println!("  {:?}", source.origin),
        }
    }
    println!();

    match effective.to_json() {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing output: {}", e);
            process::exit(1);
        }
    }
}

fn cli_overrides(global: &GlobalArgs) -> Option<Value> {
    let mut overrides = Map::new();
    if let Some(ref prefix) = global.prefix {
        overrides.insert("prefix".to_string(), Value::String(prefix.clone()));
    }
    if let Some(ref separator) = global.separator {
        overrides.insert("separator".to_string(), Value::String(separator.clone()));
    }
    if overrides.is_empty() {
        None
    } else {
        Some(Value::Object(overrides))
    }
}

fn load_effective_config(global: &GlobalArgs) -> EffectiveConfig {
    let repo_path = global
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(REPO_CONFIG_PATH));

    if global.config.is_some() && !repo_path.exists() {
        eprintln!("Configuration error: {} not found", repo_path.display());
        process::exit(1);
    }

    let user_path = user_config_path();
    match EffectiveConfig::build(user_path.as_deref(), Some(&repo_path), cli_overrides(global)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            process::exit(1);
        }
    }
}

fn load_merger(global: &GlobalArgs) -> Merger {
    let effective = load_effective_config(global);
    let merger = effective
        .merge_config()
        .and_then(|config| Merger::from_config(&config));

    match merger {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            process::exit(1);
        }
    }
}
