use anyhow::Result;
use std::path::PathBuf;
use tablekit::{config::Config, demo, logger, ui};

fn print_usage() {
    println!("Usage: tablekit [--config <path>] [--data <path>] [--generate-config [path]]");
}

#[tokio::main]
async fn main() -> Result<()> {
    let mut config_path: Option<PathBuf> = None;
    let mut data_path: Option<PathBuf> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--generate-config" => {
                let path = match args.next() {
                    Some(path) => PathBuf::from(path),
                    None => Config::get_default_config_path()?,
                };
                return Config::generate_default_config(path);
            }
            "--config" => config_path = args.next().map(PathBuf::from),
            "--data" => data_path = args.next().map(PathBuf::from),
            "-h" | "--help" => {
                print_usage();
                return Ok(());
            }
            other => {
                eprintln!("Unknown argument: {other}");
                print_usage();
                return Ok(());
            }
        }
    }

    let config = match config_path {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };

    if let Some(path) = logger::init(&config.logging)? {
        eprintln!("Logging to {}", path.display());
    }

    let notifications = match data_path {
        Some(path) => demo::load_notifications(path)?,
        None => demo::sample_notifications()?,
    };

    ui::run_app(config, notifications).await
}
