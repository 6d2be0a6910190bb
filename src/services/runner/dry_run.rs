use crate::dialog::ResultMap;
use crate::error::Result;
use crate::trace_if_enabled;
use tracing::info;

use super::r#trait::DialogRunner;

/// Ничего не запускает: только логирует конфиг и возвращает пустой результат
pub struct DryRunRunner;

impl DryRunRunner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DryRunRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogRunner for DryRunRunner {
    fn run(&self, config_text: &str) -> Result<ResultMap> {
        info!(
            "Dry-run режим - Pashua не запускается ({} строк конфига)",
            config_text.lines().count()
        );
        trace_if_enabled!("Dry-run конфиг:\n{}", config_text);
        Ok(ResultMap::new())
    }
}
