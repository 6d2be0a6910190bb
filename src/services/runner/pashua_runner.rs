use crate::dialog::{ResultMap, Window};
use crate::encoder::encode_window;
use crate::error::{PashuaError, Result};
use crate::services::locator::locate_pashua;
use crate::{debug_if_enabled, trace_if_enabled};
use crate::utils::check_executable;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{ChildStdin, Command, Stdio};
use std::thread;
use tracing::{debug, info, warn};

use super::output::parse_output;
use super::r#trait::DialogRunner;

/// Запускает настоящую Pashua. Путь ищется заново при каждом запуске
pub struct PashuaRunner {
    pashua_path: Option<PathBuf>,
}

impl PashuaRunner {
    pub fn new(pashua_path: Option<PathBuf>) -> Self {
        Self { pashua_path }
    }
}

impl DialogRunner for PashuaRunner {
    fn run(&self, config_text: &str) -> Result<ResultMap> {
        run_pashua(config_text, self.pashua_path.as_deref())
    }
}

/// Запустить Pashua с готовым конфигом на stdin и разобрать её ответ
pub fn run_pashua(config_text: &str, pashua_path: Option<&Path>) -> Result<ResultMap> {
    let app_path = locate_pashua(pashua_path)?;
    check_executable(&app_path)?;

    debug_if_enabled!("Запуск {:?} ({} байт конфига)", app_path, config_text.len());
    trace_if_enabled!("Конфиг для Pashua:\n{}", config_text);

    let mut child = Command::new(&app_path)
        .arg("-")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| PashuaError::Spawn {
            path: app_path.clone(),
            source: e,
        })?;

    let stdin = child.stdin.take();

    // stdin пишется в отдельном потоке: пока Pashua не дочитала конфиг,
    // она может заполнить pipe stdout, и тогда его нужно уже читать
    let (output, written) = thread::scope(|scope| {
        let writer = scope.spawn(move || write_config(stdin, config_text));
        let output = child.wait_with_output();
        let written = writer.join().unwrap_or_else(|_| {
            Err(io::Error::new(io::ErrorKind::Other, "поток записи stdin завершился паникой"))
        });
        (output, written)
    });

    let output = output?;
    written?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        warn!("Pashua вернула ошибку ({}): {}", output.status, stderr);
        return Err(PashuaError::Execution {
            status: output.status,
            stderr,
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result = parse_output(&stdout);
    info!("Pashua завершилась, получено значений: {}", result.len());

    Ok(result)
}

/// Записать конфиг в stdin и закрыть его, иначе Pashua ждёт конец ввода бесконечно
fn write_config(stdin: Option<ChildStdin>, config_text: &str) -> io::Result<()> {
    let Some(mut stdin) = stdin else {
        return Ok(());
    };
    // Если процесс закрылся не дочитав конфиг, причину покажут код выхода и stderr
    match stdin.write_all(config_text.as_bytes()) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            debug!("Pashua закрыла stdin раньше времени: {}", e);
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Закодировать окно и сразу запустить Pashua
pub fn run_window(window: &Window, pashua_path: Option<&Path>) -> Result<ResultMap> {
    window.validate()?;
    run_pashua(&encode_window(window), pashua_path)
}
