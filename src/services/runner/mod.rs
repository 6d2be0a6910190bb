//! Runner: запуск Pashua как дочернего процесса и разбор её ответа.
//!
//! Вызов синхронный: поток ждёт завершения Pashua. Таймаутов нет,
//! зависшая Pashua блокирует вызывающего.

mod dry_run;
mod output;
mod pashua_runner;
mod r#trait;

pub use self::dry_run::DryRunRunner;
pub use self::output::parse_output;
pub use self::pashua_runner::{run_pashua, run_window, PashuaRunner};
pub use self::r#trait::{create_runner, DialogRunner};
