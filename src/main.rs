// Datapoints - Free and Open Source Software Statement
//
// This project, datapoints, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/main.rs
// Version: 1.0.0
//
// Command-line driver for the Datapoints API: one subcommand per endpoint,
// plus an offline formatting demo.

use clap::{Parser, Subcommand};
use datapoints::format::{self, DurationOptions, FormatOptions};
use datapoints::{Client, ClientConfig, GroupData, GroupVars, Result, Var};
use serde_json::Value;

/// Command-line arguments for the Datapoints client
#[derive(Parser, Debug)]
#[command(
    name = "datapoints",
    version,
    about = "Client for the Datapoints dashboard API",
    long_about = "Manages named variables and groups on a Datapoints server.\n\n\
                  Credentials come from --key/--secret or the DATAPOINTS_KEY and\n\
                  DATAPOINTS_SECRET environment variables; the server URL from --url\n\
                  or DATAPOINTS_URL (default https://datapoints.global).\n\n\
                  Examples:\n\
                    datapoints --key K --secret S get-vars\n\
                    datapoints save-var --name temperature --value 21.5\n\
                    datapoints demo"
)]
struct Args {
    /// API key (or DATAPOINTS_KEY)
    #[arg(short, long, value_name = "KEY")]
    key: Option<String>,

    /// API secret (or DATAPOINTS_SECRET)
    #[arg(short, long, value_name = "SECRET")]
    secret: Option<String>,

    /// Server base URL (or DATAPOINTS_URL)
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// API version path segment
    #[arg(long, default_value = "1", value_name = "VERSION")]
    api_version: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List variables, with values rendered through the formatters
    GetVars {
        /// Filter fields as name=value pairs
        #[arg(long, value_name = "NAME=VALUE")]
        query: Vec<String>,
        /// Print the raw JSON response instead of a table
        #[arg(long)]
        raw: bool,
    },
    /// Create or update a variable (pass --uuid to update)
    SaveVar {
        #[arg(long)]
        uuid: Option<String>,
        #[arg(long)]
        name: String,
        #[arg(long)]
        value: String,
        #[arg(long, value_name = "HEX")]
        color: Option<String>,
        #[arg(long)]
        currency: bool,
        #[arg(long)]
        public: bool,
    },
    /// Delete a variable
    DeleteVar {
        #[arg(long)]
        uuid: String,
    },
    /// List groups
    Groups {
        /// Filter fields as name=value pairs
        #[arg(long, value_name = "NAME=VALUE")]
        query: Vec<String>,
    },
    /// Create or update a group (pass --uuid to update)
    SaveGroup {
        #[arg(long)]
        uuid: Option<String>,
        #[arg(long)]
        name: String,
        /// Member variable UUIDs
        #[arg(long = "datapoint", value_name = "UUID")]
        datapoints: Vec<String>,
    },
    /// Add variables to a group
    GroupAddVars {
        #[arg(long)]
        uuid: String,
        #[arg(long = "datapoint", value_name = "UUID")]
        datapoints: Vec<String>,
    },
    /// Remove variables from a group
    GroupRemoveVars {
        #[arg(long)]
        uuid: String,
        #[arg(long = "datapoint", value_name = "UUID")]
        datapoints: Vec<String>,
        /// Remove every variable from the group
        #[arg(long)]
        all: bool,
    },
    /// Delete a group
    DeleteGroup {
        #[arg(long)]
        uuid: String,
    },
    /// Show the formatting utilities on sample values (no server needed)
    Demo,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    if let Command::Demo = args.command {
        run_demo();
        return Ok(());
    }

    let config = ClientConfig {
        url: resolve(args.url, "DATAPOINTS_URL")
            .unwrap_or_else(|| "https://datapoints.global".to_string()),
        version: args.api_version,
        key: resolve(args.key, "DATAPOINTS_KEY").unwrap_or_default(),
        secret: resolve(args.secret, "DATAPOINTS_SECRET").unwrap_or_default(),
    };

    let client = match Client::new(config) {
        Ok(client) => client,
        Err(err) => {
            eprintln!("❌ Error: {}", err);
            std::process::exit(1);
        }
    };

    let result = match &args.command {
        Command::GetVars { query, raw } => {
            let query = parse_query(query)?;
            let pairs: Vec<(&str, &str)> = query
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect();
            let data = client.get_vars(&pairs).await;
            if let Ok(data) = &data {
                if !raw {
                    print_vars(data);
                    return Ok(());
                }
            }
            data
        }
        Command::SaveVar {
            uuid,
            name,
            value,
            color,
            currency,
            public,
        } => {
            let var = Var {
                uuid: uuid.clone(),
                name: name.clone(),
                value: value.clone(),
                color: color.clone(),
                is_currency: currency.then_some(true),
                is_public: public.then_some(true),
                by: None,
            };
            client.save_var(&var).await
        }
        Command::DeleteVar { uuid } => client.delete_var(uuid).await,
        Command::Groups { query } => {
            let query = parse_query(query)?;
            let pairs: Vec<(&str, &str)> = query
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect();
            client.get_groups(&pairs).await
        }
        Command::SaveGroup {
            uuid,
            name,
            datapoints,
        } => {
            let group = GroupData {
                uuid: uuid.clone(),
                name: name.clone(),
                datapoints: datapoints.clone(),
            };
            client.save_group(&group).await
        }
        Command::GroupAddVars { uuid, datapoints } => {
            let change = GroupVars {
                uuid: uuid.clone(),
                datapoints: datapoints.clone(),
                all: false,
            };
            client.add_vars_to_group(&change).await
        }
        Command::GroupRemoveVars {
            uuid,
            datapoints,
            all,
        } => {
            let change = GroupVars {
                uuid: uuid.clone(),
                datapoints: datapoints.clone(),
                all: *all,
            };
            client.remove_vars_from_group(&change).await
        }
        Command::DeleteGroup { uuid } => client.delete_group(uuid).await,
        Command::Demo => unreachable!("handled above"),
    };

    match result {
        Ok(data) => {
            println!("{}", serde_json::to_string_pretty(&data)?);
            Ok(())
        }
        Err(err) => {
            eprintln!("❌ Error: {}", err);
            std::process::exit(1);
        }
    }
}

/// Flag value first, environment variable second.
fn resolve(flag: Option<String>, env_name: &str) -> Option<String> {
    flag.or_else(|| std::env::var(env_name).ok())
}

/// Split repeated `name=value` query flags into pairs.
fn parse_query(raw: &[String]) -> Result<Vec<(String, String)>> {
    raw.iter()
        .map(|entry| {
            entry
                .split_once('=')
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .ok_or_else(|| format!("invalid query field '{}', expected name=value", entry).into())
        })
        .collect()
}

/// Render a get-vars response as a table, formatting numeric values.
fn print_vars(data: &Value) {
    let vars: Vec<Var> = match serde_json::from_value(data.clone()) {
        Ok(vars) => vars,
        Err(_) => {
            // Unexpected shape, fall back to the raw document
            println!("{}", serde_json::to_string_pretty(data).unwrap_or_default());
            return;
        }
    };

    for var in &vars {
        let rendered = match var.value.parse::<f64>() {
            Ok(value) if var.is_currency.unwrap_or(false) => {
                format::format_currency(value, &FormatOptions {
                    symbol: Some("$"),
                    ..FormatOptions::default()
                })
            }
            Ok(value) => format::format_number(value, &FormatOptions::default()),
            Err(_) => var.value.clone(),
        };
        println!(
            "{:<24} {:>16}  {}",
            var.name,
            rendered,
            var.uuid.as_deref().unwrap_or("-")
        );
    }
}

/// Offline showcase of the formatting utilities.
fn run_demo() {
    let opts = FormatOptions::default();
    println!("numbers:");
    println!("  1500            -> {}", format::format_number(1500.0, &opts));
    println!("  -2500           -> {}", format::format_number(-2500.0, &opts));
    println!(
        "  999500 (prec 0) -> {}",
        format::format_number(999_500.0, &FormatOptions { prec: Some(0), ..opts })
    );
    println!("  0.00042         -> {}", format::format_number(0.00042, &opts));

    println!("currency:");
    println!(
        "  2500000         -> {}",
        format::format_currency(2_500_000.0, &FormatOptions { symbol: Some("$"), ..opts })
    );
    println!("  0.0123          -> {}", format::format_currency(0.0123, &opts));

    println!("hashrate:");
    println!("  1500000         -> {}", format::format_hashrate(1_500_000.0, &opts));

    println!("percent:");
    println!("  33.456          -> {}", format::format_percent(33.456, &opts));

    println!("duration:");
    println!(
        "  3725s           -> {}",
        format::format_duration(3725, &DurationOptions::default())
    );
    println!(
        "  90061s (max 10) -> {}",
        format::format_duration(
            90_061,
            &DurationOptions {
                max_length: Some(10),
                ..DurationOptions::default()
            }
        )
    );
}
