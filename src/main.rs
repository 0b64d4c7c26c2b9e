use std::io::Read;
use std::process::ExitCode;

use clap::parser::MatchesError;
use clap::{Arg, ArgAction, Command};
use log::{error, info};
use playlists::config::{OutputFormat, PlaylistsConfig};
use playlists::{PlaylistCollection, Result};

const DEFAULT_CONFIG_PATH: &str = "playlists.config";

struct Args {
    config_path: String,
    input: String,
    format: Option<String>,
    pretty: bool,
    save_config: bool,
}

fn parse_cli_args() -> std::result::Result<Args, MatchesError> {
    let cmd = Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .required(false)
                .default_value(DEFAULT_CONFIG_PATH),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .required(false)
                .value_parser(["summary", "json"]),
        )
        .arg(
            Arg::new("pretty")
                .short('p')
                .long("pretty")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("save-config")
                .long("save-config")
                .help("Write the effective options back to the config file")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("input")
                .help("Saved playlist response body, or - for stdin")
                .required(false)
                .default_value("-"),
        )
        .get_matches();

    let args = Args {
        config_path: cmd
            .try_get_one::<String>("config")?
            .cloned()
            .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string()),
        input: cmd
            .try_get_one::<String>("input")?
            .cloned()
            .unwrap_or_else(|| "-".to_string()),
        format: cmd.try_get_one::<String>("format")?.cloned(),
        pretty: cmd.get_flag("pretty"),
        save_config: cmd.get_flag("save-config"),
    };
    Ok(args)
}

fn read_collection(input: &str, stdin: impl Read) -> Result<PlaylistCollection> {
    if input == "-" {
        PlaylistCollection::from_reader(stdin)
    } else {
        info!("Reading playlists from {}", input);
        let file = std::fs::File::open(input)?;
        PlaylistCollection::from_reader(std::io::BufReader::new(file))
    }
}

fn apply_overrides(config: &mut PlaylistsConfig, args: &Args) -> Result<()> {
    if let Some(format) = &args.format {
        config.format = format.parse::<OutputFormat>()?;
    }
    if args.pretty {
        config.pretty = true;
    }
    Ok(())
}

fn resolve_config(args: &Args) -> Result<PlaylistsConfig> {
    let mut config = PlaylistsConfig::load(&args.config_path)?;
    apply_overrides(&mut config, args)?;
    if args.save_config {
        config.save(&args.config_path)?;
        info!("Saved config to {}", args.config_path);
    }
    Ok(config)
}

fn render(collection: &PlaylistCollection, config: &PlaylistsConfig) -> Result<String> {
    match config.format {
        OutputFormat::Summary => Ok(collection.to_string()),
        OutputFormat::Json if config.pretty => Ok(collection.to_json_pretty()? + "\n"),
        OutputFormat::Json => Ok(collection.to_json()? + "\n"),
    }
}

fn run(args: &Args, stdin: impl Read) -> Result<String> {
    let config = resolve_config(args)?;
    let collection = read_collection(&args.input, stdin)?;
    render(&collection, &config)
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match parse_cli_args() {
        Ok(args) => args,
        Err(err) => {
            error!("Error parsing arguments: {}", err);
            return ExitCode::FAILURE;
        }
    };
    match run(&args, std::io::stdin().lock()) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
