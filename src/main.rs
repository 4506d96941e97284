use clap::Parser;
use doxbase::{app, cli, config, translator};
use app::App;
use cli::{Cli, Commands};
use config::Config;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // ログは stderr（stdout はレポート表示に使う）
    let default_filter = if cli.verbose { "doxbase=debug" } else { "doxbase=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = Config::load()?;
    if let Some(lang) = &cli.target_lang {
        config.target_lang = lang.clone();
    }

    match cli.command {
        None => {
            let translator = translator::build_translator(&config, false)?;
            let app = App::new(config, PathBuf::from("."), translator, cli.verbose);
            app.run()?;
        }

        Some(Commands::Search { query, dir, output, no_translate }) => {
            let translator = translator::build_translator(&config, no_translate)?;
            let mut app = App::new(config, dir, translator, cli.verbose);
            if let Some(output) = output {
                app = app.with_output(output);
            }
            app.search(&query)?;
        }

        Some(Commands::Config { set_target_lang, set_console_limit, show }) => {
            if let Some(lang) = set_target_lang {
                config.set_target_lang(lang)?;
                println!("✔ Язык перевода: {}", config.target_lang);
            }

            if let Some(limit) = set_console_limit {
                config.set_console_limit(limit)?;
                println!("✔ Лимит вывода в консоль: {}", config.console_limit);
            }

            if show {
                println!("Настройки ({}):", Config::config_path()?.display());
                println!("  Язык перевода: {}", config.target_lang);
                println!("  Файл отчёта: {}", config.output_file.display());
                println!("  Лимит вывода в консоль: {}", config.console_limit);
                println!(
                    "  Перевод заголовков: {}",
                    if config.translate_headers { "включён" } else { "выключен" }
                );
                println!("  Сервис перевода: {}", config.translate_endpoint);
            }
        }
    }

    Ok(())
}
