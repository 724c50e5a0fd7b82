#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;

use std::io;
use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use strum::VariantNames;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::CloudApi;
use crate::domain::models::Credentials;
use crate::domain::models::FormatOptions;
use crate::domain::models::ProbeView;
use crate::domain::services::html;
use crate::domain::services::html::RenderOptions;
use crate::domain::services::Translations;
use crate::infrastructure::cloud::meater::MeaterCloud;

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
    std::process::exit(0);
}

async fn create_config_file() -> Result<()> {
    let config_file_path_str = Config::default(ConfigKey::ConfigFile);
    let config_file_path = path::PathBuf::from(&config_file_path_str);
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_file_path_str}"
        ));
    }

    if !config_file_path.parent().unwrap().exists() {
        fs::create_dir_all(config_file_path.parent().unwrap()).await?;
    }

    let mut file = fs::File::create(config_file_path.clone()).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    let config_path_display = config_file_path.as_os_str().to_str().unwrap();
    println!("Created default config file at {config_path_display}");
    return Ok(());
}

async fn fetch_once() -> Result<()> {
    let credentials = Credentials::from_config();
    if !credentials.is_configured() {
        bail!("email and password are not configured, set them in the config file or with --email and --password");
    }

    let translations = Translations::load(&Config::get(ConfigKey::Language))?;
    let format = FormatOptions::from_config(&translations.get("CALCULATING"));
    let cloud = MeaterCloud::default();

    let token = cloud.login(&credentials).await?;
    let probes = cloud
        .fetch_devices(token.as_str())
        .await?
        .iter()
        .map(|reading| return ProbeView::from_reading(reading, &format))
        .collect::<Vec<ProbeView>>();

    println!("{}", html::device_table(&probes, &RenderOptions::from_config()));

    return Ok(());
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            clap::Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand(
            Command::new("create").about("Saves the default config file to the configuration file path. This command will fail if the file exists already.")
        )
        .subcommand(
            Command::new("default").about("Outputs the default configuration file to stdout.")
        )
        .subcommand(
            Command::new("path").about("Returns the default path for the configuration file.")
        );
}

fn subcommand_debug() -> Command {
    let mut cmd = Command::new("debug");
    cmd = cmd.about("Debug helpers for Grillboard")
        .hide(true)
        .subcommand(
            Command::new("languages").about("List all languages bundled for fragment texts.")
        )
        .subcommand(
            Command::new("log-path").about("Output path to debug log file generated when running Grillboard with environment variable RUST_LOG=grillboard")
        )
        .subcommand(
            Command::new("enum-config").about("List all config keys as strings.")
        );

    return cmd;
}

fn subcommand_fetch() -> Command {
    return Command::new("fetch")
        .about("Logs in, polls the device list once, and prints the rendered fragment to stdout.");
}

fn env_var_name(key: ConfigKey) -> String {
    return format!(
        "GRILLBOARD_{}",
        key.to_string().to_uppercase().replace('-', "_")
    );
}

fn config_arg(key: ConfigKey, help: &str) -> Arg {
    let mut arg = Arg::new(key.to_string())
        .long(key.to_string())
        .env(env_var_name(key))
        .num_args(1)
        .global(true);

    let default = Config::default(key);
    if default.is_empty() {
        arg = arg.help(help.to_string());
    } else {
        arg = arg.help(format!("{help} [default: {default}]"));
    }

    return arg;
}

pub fn build() -> Command {
    let about = format!(
        "{}\n\nVersion: {}\nCommit: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
        env!("VERGEN_GIT_DESCRIBE")
    );

    return Command::new("grillboard")
        .about(about)
        .version(env!("CARGO_PKG_VERSION"))
        .arg_required_else_help(false)
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .subcommand(subcommand_debug())
        .subcommand(subcommand_fetch())
        .subcommand(Command::new("manpages").about("Generates manpages and outputs to stdout."))
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .short('c')
                .long(ConfigKey::ConfigFile.to_string())
                .env("GRILLBOARD_CONFIG_FILE")
                .num_args(1)
                .help(format!(
                    "Path to configuration file [default: {}]",
                    Config::default(ConfigKey::ConfigFile)
                ))
                .global(true),
        )
        .arg(config_arg(ConfigKey::ApiURL, "MEATER Cloud API base URL."))
        .arg(config_arg(
            ConfigKey::Colored,
            "Add the colored class to the first row of each probe pair.",
        ))
        .arg(config_arg(ConfigKey::Email, "MEATER Cloud account email."))
        .arg(config_arg(
            ConfigKey::InitialDelay,
            "Time to wait in milliseconds before the first poll after startup.",
        ))
        .arg(
            config_arg(ConfigKey::Language, "Language used for fragment texts.")
                .value_parser(PossibleValuesParser::new(Translations::list())),
        )
        .arg(config_arg(
            ConfigKey::OutputFile,
            "Path the rendered HTML fragment is written to. Pass - for stdout.",
        ))
        .arg(config_arg(
            ConfigKey::Password,
            "MEATER Cloud account password.",
        ))
        .arg(config_arg(
            ConfigKey::RetryDelay,
            "Time to wait in milliseconds between polls while the first device list is still outstanding.",
        ))
        .arg(config_arg(
            ConfigKey::RoundTemperature,
            "Round temperatures to whole degrees instead of tenths.",
        ))
        .arg(config_arg(
            ConfigKey::ShowCookName,
            "Show the cook name column.",
        ))
        .arg(config_arg(
            ConfigKey::ShowCooksOnly,
            "Hide probes without an active cook.",
        ))
        .arg(config_arg(
            ConfigKey::ShowTemperaturePeak,
            "Show the peak temperature below the target.",
        ))
        .arg(config_arg(
            ConfigKey::ShowTemperatureTarget,
            "Show the target temperature column.",
        ))
        .arg(config_arg(
            ConfigKey::ShowTimeElapsed,
            "Show the elapsed cook time.",
        ))
        .arg(config_arg(
            ConfigKey::ShowTimeRemaining,
            "Show the estimated remaining cook time.",
        ))
        .arg(config_arg(
            ConfigKey::UpdateInterval,
            "Time in milliseconds between polls once the first device list has arrived.",
        ));
}

pub async fn parse() -> Result<bool> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("debug", debug_matches)) => {
            match debug_matches.subcommand() {
                Some(("languages", _)) => {
                    println!("{}", Translations::list().join("\n"));
                }
                Some(("log-path", _)) => {
                    let log_path = dirs::cache_dir().unwrap().join("grillboard/debug.log");
                    println!("{}", log_path.to_str().unwrap());
                }
                Some(("enum-config", _)) => {
                    let res = ConfigKey::VARIANTS.join("\n");
                    println!("{}", res);
                }
                _ => {
                    subcommand_debug().print_long_help()?;
                }
            }

            return Ok(false);
        }
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }
        }
        Some(("config", subcmd_matches)) => match subcmd_matches.subcommand() {
            Some(("create", _)) => {
                create_config_file().await?;
                return Ok(false);
            }
            Some(("default", _)) => {
                println!("{}", Config::serialize_default(build()));
                return Ok(false);
            }
            Some(("path", _)) => {
                println!("{}", Config::default(ConfigKey::ConfigFile));
                return Ok(false);
            }
            _ => {
                subcommand_config().print_long_help()?;
                return Ok(false);
            }
        },
        Some(("fetch", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
            fetch_once().await?;
            return Ok(false);
        }
        Some(("manpages", _)) => {
            clap_mangen::Man::new(build()).render(&mut io::stdout())?;
            return Ok(false);
        }
        _ => {
            Config::load(build(), vec![&matches]).await?;
        }
    }

    return Ok(true);
}
