use crate::dialog::Component;
use crate::error::{PashuaError, Result};
use crate::pashua_error;
use anyhow::Context;
use figment::{
    providers::{Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Описание окна Pashua: настройки самого окна + элементы по ключам
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Window {
    pub title: String,
    /// 0.0..=1.0, ноль означает "не задано"
    pub transparency: f64,
    /// Секунды до автозакрытия, ноль означает "не закрывать"
    pub auto_close_time: u32,
    /// Ключ, под которым Pashua запоминает позицию окна. Исключает x/y
    pub auto_save_key: String,
    pub floating: bool,
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub components: BTreeMap<String, Component>,
}

impl Window {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Ключ становится префиксом строк конфига (`key.attribute=value`), поэтому он
    /// не может быть пустым, равным `*`, или содержать `.`, `=` и переводы строк.
    /// Проверка происходит в [`Window::validate`] перед запуском, не здесь.
    pub fn with_component(mut self, key: impl Into<String>, component: impl Into<Component>) -> Self {
        self.components.insert(key.into(), component.into());
        self
    }

    pub fn with_transparency(mut self, transparency: f64) -> Self {
        self.transparency = transparency;
        self
    }

    pub fn with_auto_save_key(mut self, key: impl Into<String>) -> Self {
        self.auto_save_key = key.into();
        self
    }

    pub fn with_position(mut self, x: i32, y: i32) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    pub fn with_auto_close_time(mut self, seconds: u32) -> Self {
        self.auto_close_time = seconds;
        self
    }

    pub fn floating(mut self) -> Self {
        self.floating = true;
        self
    }

    /// Проверить ключи всех элементов
    pub fn validate(&self) -> Result<()> {
        self.components.keys().try_for_each(|key| validate_key(key))
    }

    /// Загрузить описание окна из TOML файла
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        // Figment молча пропускает отсутствующий файл, а пустое окно тут бессмысленно
        if !path.is_file() {
            return Err(pashua_error!(config, "Файл описания окна не найден: {:?}", path));
        }

        let window: Window = Figment::new()
            .merge(Toml::file(path))
            .extract()
            .with_context(|| format!("Не удалось разобрать описание окна из {:?}", path))
            .map_err(PashuaError::Config)?;

        if window.components.is_empty() {
            return Err(pashua_error!(config, "В окне {:?} нет ни одного элемента", path));
        }
        window.validate()?;

        Ok(window)
    }
}

/// Ключ элемента, который Pashua разберёт так же, как он записан
pub fn validate_key(key: &str) -> Result<()> {
    let reason = if key.is_empty() {
        "пустой ключ"
    } else if key == "*" {
        "'*' зарезервирован для настроек окна"
    } else if key.contains(['\n', '\r']) {
        "содержит перевод строки"
    } else if key.contains('=') {
        "содержит '='"
    } else if key.contains('.') {
        "содержит '.'"
    } else {
        return Ok(());
    };
    Err(pashua_error!(invalid_key, key, reason))
}
