use clap::Parser;
use dotenvy::dotenv;

use workdeck::cli::Cli;
use workdeck::config;
use workdeck::runtime::modes;
use workdeck::system::{self, RunMode};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command {
        Some(command) => {
            // CLI mode: 不初始化日志系统，命令直接输出到终端
            system::install_panic_hook(RunMode::Cli);

            if let Err(e) = modes::run_cli(command, config_path).await {
                eprintln!("{}", e.format_colored());
                std::process::exit(1);
            }
        }
        None => {
            // Server mode
            system::install_panic_hook(RunMode::Server);

            config::init_config(config_path);
            let config = config::get_config();

            // Guard must be kept alive for the duration of the program
            let _guard = system::init_logging(&config);

            modes::run_server().await?;
        }
    }

    Ok(())
}
