use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

use pashua::config::Config;
use pashua::{create_runner, encode_window, locate_pashua, DialogRunner, Window};

#[derive(Parser, Debug)]
#[command(name = "pashua-rs")]
#[command(about = "Показать диалог Pashua, описанный в TOML файле, и вывести результат")]
struct Args {
    /// Путь к файлу конфигурации
    #[arg(short, long, default_value = "pashua.toml")]
    config: String,

    /// Файл с описанием окна
    #[arg(short, long, required_unless_present = "locate")]
    dialog: Option<PathBuf>,

    /// Явный путь к исполняемому файлу Pashua
    #[arg(long)]
    pashua_path: Option<PathBuf>,

    /// Режим сухого запуска: вывести конфиг Pashua вместо запуска
    #[arg(long)]
    dry_run: bool,

    /// Только найти Pashua и вывести путь
    #[arg(long)]
    locate: bool,

    /// Уровень логирования (перекрывает конфиг)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = Config::load(&args.config)?;
    if let Some(level) = &args.log_level {
        config.logging.level = level.clone();
        config.validate()?;
    }

    // Инициализация системы логирования
    init_tracing(&config.logging.level, &config.logging.format)?;

    info!("Запуск pashua-rs v{}", env!("CARGO_PKG_VERSION"));

    let pashua_path = args.pashua_path.or(config.locator.pashua_path);

    if args.locate {
        let path = locate_pashua(pashua_path.as_deref())?;
        println!("{}", path.display());
        return Ok(());
    }

    let dialog_path = args
        .dialog
        .context("Не указан файл с описанием окна (--dialog)")?;
    let window = Window::load(&dialog_path)?;
    info!("Описание окна загружено из: {:?}", dialog_path);

    let dry_run = args.dry_run || config.runner.dry_run;
    if dry_run {
        warn!("Режим сухого запуска - Pashua не будет запущена");
        println!("{}", encode_window(&window));
    }

    let runner = create_runner(pashua_path, dry_run);
    let result = runner.run_window(&window)?;

    let mut entries: Vec<_> = result.into_iter().collect();
    entries.sort();
    for (key, value) in entries {
        println!("{}={}", key, value);
    }

    Ok(())
}

fn init_tracing(level: &str, format: &str) -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))?;

    // stdout занят результатом, логи только в stderr
    let fmt_layer = match format {
        "pretty" => tracing_subscriber::fmt::layer()
            .pretty()
            .with_writer(std::io::stderr)
            .boxed(),
        _ => tracing_subscriber::fmt::layer()
            .compact()
            .with_writer(std::io::stderr)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
