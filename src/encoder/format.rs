use std::borrow::Cow;

/// Маркер перевода строки внутри значения: конфиг Pashua строго построчный
pub const RETURN_TOKEN: &str = "[return]";

pub fn format_int(value: i32) -> String {
    value.to_string()
}

pub fn format_uint(value: u32) -> String {
    value.to_string()
}

/// Всегда ровно четыре знака после точки
pub fn format_float(value: f64) -> String {
    format!("{:.4}", value)
}

pub fn format_bool(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

/// Заменить переводы строк (`\n`, `\r\n` и одиночный `\r`) на `[return]`
pub fn escape_text(text: &str) -> Cow<'_, str> {
    if !text.contains(['\n', '\r']) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.replace("\r\n", "\n")
            .replace('\r', "\n")
            .replace('\n', RETURN_TOKEN),
    )
}
