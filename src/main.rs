use clap::Parser;
use multisweeper_env::config::{CliConfig, Command, OutputFormat};
use multisweeper_env::core::global;
use multisweeper_env::utils::{logger, validation::Validate};
use multisweeper_env::{probe, EnvError, PublicEnv, SERVER_URL_KEY};
use std::time::Duration;

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting multisweeper-env");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = run(&config).await {
        tracing::error!(
            "❌ {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.severity().exit_code());
    }
}

async fn run(config: &CliConfig) -> Result<(), EnvError> {
    let loader = config.loader();

    match &config.command {
        Command::Check => {
            let public = global::install(loader.load()?)?;
            println!("✅ {} = {:?}", SERVER_URL_KEY, public.server_url());
        }
        Command::Show { format } => {
            let source = loader.build_source()?;
            let public = PublicEnv::collect(&source)?;
            match format {
                OutputFormat::Text => {
                    for (key, value) in public.iter() {
                        println!("{}={}", key, value);
                    }
                }
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&public)?),
            }
            if public.get(SERVER_URL_KEY).is_none() {
                tracing::warn!("{} is not defined", SERVER_URL_KEY);
            }
        }
        Command::Probe {
            timeout_secs,
            format,
        } => {
            let public = global::install(loader.load()?)?;
            let report = probe(public, Duration::from_secs(*timeout_secs)).await?;
            match format {
                OutputFormat::Text => println!(
                    "{} {} answered HTTP {} in {} ms",
                    if report.is_success() { "✅" } else { "❌" },
                    report.url,
                    report.status,
                    report.elapsed_ms
                ),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            }
            report.into_result()?;
        }
    }

    Ok(())
}
