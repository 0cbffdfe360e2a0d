// src/main.rs
use clap::Parser;
use karma_league::cli::{Args, is_config_operation};
use karma_league::config::Config;
use karma_league::data_fetcher::api::create_http_client_with_timeout;
use karma_league::data_fetcher::update_league_data;
use karma_league::error::AppError;
use karma_league::logging::setup_logging;
use karma_league::server::{ServerState, serve};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Configuration operations run before logging and skip validation,
    // so a broken config can still be repaired from the command line.
    if is_config_operation(&args) {
        return handle_config_operation(&args).await;
    }

    let mut config = Config::load().await?;
    if let Some(bind) = &args.bind {
        config.bind_address = bind.clone();
    }
    if let Some(output) = &args.output {
        config.output_path = output.clone();
    }
    config.validate()?;

    let (log_file_path, _guard) = setup_logging(&args, &config).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;

    if args.once {
        return match update_league_data(&client, &config, args.date.clone()).await {
            Ok(summary) => {
                println!(
                    "Scored {} games for {} -> {}",
                    summary.games_count, summary.date, config.output_path
                );
                Ok(())
            }
            Err(e) => {
                tracing::error!("Update failed ({}): {e}", e.origin());
                Err(e)
            }
        };
    }

    let listener = TcpListener::bind(&config.bind_address).await?;
    serve(listener, ServerState::new(client, config)).await
}

async fn handle_config_operation(args: &Args) -> Result<(), AppError> {
    if args.list_config {
        return Config::display().await;
    }

    let config_path = Config::get_config_path();
    let mut config = if std::path::Path::new(&config_path).exists() {
        Config::load_from_path(&config_path).await?
    } else {
        Config::default()
    };

    if let Some(url) = &args.new_schedule_url {
        config.schedule_csv_url = url.clone();
    }
    if let Some(url) = &args.new_roster_url {
        config.roster_csv_url = url.clone();
    }
    if let Some(path) = &args.new_output_path {
        config.output_path = path.clone();
    }
    if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save().await?;
    println!("Config updated successfully!");
    Ok(())
}
