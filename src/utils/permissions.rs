use crate::error::{PashuaError, Result};
use std::io;
use std::path::Path;
use tracing::debug;

/// Проверить, что найденный файл можно запустить.
/// Ошибка возвращается как `Spawn`, потому что запуск всё равно бы не удался
#[cfg(unix)]
pub fn check_executable(path: &Path) -> Result<()> {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let metadata = fs::metadata(path).map_err(|e| PashuaError::Spawn {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mode = metadata.permissions().mode();
    debug!("Права {:?}: {:o}", path, mode & 0o777);

    // Достаточно любого бита x: точную проверку для текущего пользователя сделает exec
    if mode & 0o111 == 0 {
        return Err(PashuaError::Spawn {
            path: path.to_path_buf(),
            source: io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("нет прав на выполнение (режим {:o})", mode & 0o777),
            ),
        });
    }

    Ok(())
}

#[cfg(not(unix))]
pub fn check_executable(path: &Path) -> Result<()> {
    debug!("Проверка прав на выполнение пропущена для {:?}", path);
    if path.is_file() {
        Ok(())
    } else {
        Err(PashuaError::Spawn {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::NotFound, "файл не найден"),
        })
    }
}
