use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PashuaError {
    #[error("Ошибка конфигурации: {0}")]
    Config(#[from] anyhow::Error),

    #[error("Ошибка ввода-вывода: {0}")]
    Io(#[from] std::io::Error),

    #[error("Pashua не найдена: {0}")]
    NotFound(String),

    #[error("Не удалось запустить {}: {source}", path.display())]
    Spawn {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Недопустимый ключ элемента {0:?}: {1}")]
    InvalidKey(String, &'static str),

    #[error("Pashua завершилась с ошибкой ({status}), текст ошибки pashua: {stderr}")]
    Execution { status: ExitStatus, stderr: String },
}

impl PashuaError {
    pub fn not_found<T>(msg: impl Into<String>) -> Result<T> {
        Err(PashuaError::NotFound(msg.into()))
    }

    /// Текст stderr, если ошибка пришла от завершившегося процесса
    pub fn stderr(&self) -> Option<&str> {
        match self {
            PashuaError::Execution { stderr, .. } => Some(stderr.as_str()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, PashuaError>;

// Удобные макросы для создания ошибок
#[macro_export]
macro_rules! pashua_error {
    (not_found, $($arg:tt)*) => {
        $crate::error::PashuaError::NotFound(format!($($arg)*))
    };
    (invalid_key, $key:expr, $reason:expr) => {
        $crate::error::PashuaError::InvalidKey($key.to_string(), $reason)
    };
    (config, $($arg:tt)*) => {
        $crate::error::PashuaError::Config(anyhow::anyhow!($($arg)*))
    };
}
