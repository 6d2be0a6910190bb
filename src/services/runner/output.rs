use crate::dialog::ResultMap;

/// Разобрать stdout Pashua: строки `key=value`, пустые строки и строки без `=` отбрасываются
pub fn parse_output(output: &str) -> ResultMap {
    output
        .lines()
        .map(str::trim)
        .filter_map(|line| match line.find('=') {
            // `=` в начале строки значит пустой ключ, такую строку тоже пропускаем
            Some(pos) if pos > 0 => Some((line[..pos].to_string(), line[pos + 1..].to_string())),
            _ => None,
        })
        .collect()
}
