use crate::error::{PashuaError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Путь к исполняемому файлу внутри бандла Pashua.app
pub const BUNDLE_PATH: &str = "Pashua.app/Contents/MacOS/Pashua";
const BINARY_NAME: &str = "Pashua";

pub struct PashuaLocator;

impl PashuaLocator {
    /// Найти исполняемый файл Pashua. Явно указанный путь проверяется первым
    pub fn find(hint: Option<&Path>) -> Result<PathBuf> {
        Self::find_in(&Self::candidate_paths(hint))
    }

    /// Первый подходящий путь из списка, иначе `NotFound` со всеми проверенными путями
    pub fn find_in(candidates: &[PathBuf]) -> Result<PathBuf> {
        if let Some(path) = Self::first_existing(candidates) {
            info!("Pashua найдена: {:?}", path);
            return Ok(path);
        }

        let searched = candidates
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        PashuaError::not_found(format!("проверены пути: {}", searched))
    }

    /// Все пути поиска в порядке приоритета
    pub fn candidate_paths(hint: Option<&Path>) -> Vec<PathBuf> {
        let mut candidates = Vec::with_capacity(7);

        if let Some(hint) = hint {
            candidates.push(hint.to_path_buf());
        }

        match Self::executable_dir() {
            Some(dir) => {
                candidates.push(dir.join(BINARY_NAME));
                candidates.push(dir.join(BUNDLE_PATH));
            }
            None => debug!("Не удалось определить каталог текущего исполняемого файла"),
        }

        candidates.push(Path::new(".").join(BUNDLE_PATH));
        candidates.push(Path::new("/Applications").join(BUNDLE_PATH));

        match dirs::home_dir() {
            Some(home) => candidates.push(home.join("Applications").join(BUNDLE_PATH)),
            None => debug!("Домашний каталог не определён, ~/Applications пропускаем"),
        }

        candidates.push(Path::new("/usr/local/bin").join(BUNDLE_PATH));

        candidates
    }

    /// Первый путь, который указывает на обычный файл (каталоги не подходят)
    pub fn first_existing(candidates: &[PathBuf]) -> Option<PathBuf> {
        candidates
            .iter()
            .find(|path| {
                let found = path.is_file();
                debug!("Проверяем {:?}: {}", path, if found { "найден" } else { "нет" });
                found
            })
            .cloned()
    }

    fn executable_dir() -> Option<PathBuf> {
        let exe = std::env::current_exe()
            .ok()
            .or_else(|| std::env::args_os().next().map(PathBuf::from))?;
        exe.parent().map(Path::to_path_buf)
    }
}

/// Найти Pashua: явный путь, затем стандартные места установки
pub fn locate_pashua(hint: Option<&Path>) -> Result<PathBuf> {
    PashuaLocator::find(hint)
}
