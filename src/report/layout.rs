//! レポートの罫線・文言

/// レコード枠の横線の長さ
pub const RULE_WIDTH: usize = 100;

pub const LABEL_FILE: &str = "Файл";
pub const LABEL_QUERY: &str = "Запрос";
pub const LABEL_TOTAL: &str = "Всего найдено запросов";
pub const LABEL_ELAPSED: &str = "Время выполнения";

/// レコード上端 `┏━━…`
pub fn record_top() -> String {
    format!("┏{}", "━".repeat(RULE_WIDTH))
}

/// レコード下端 `┗━━…`
pub fn record_bottom() -> String {
    format!("┗{}", "━".repeat(RULE_WIDTH))
}

/// フィールド行 `┣ key: value`
pub fn record_field(key: &str, value: &str) -> String {
    format!("┣ {}: {}", key, value)
}

/// 二重線の箱で囲む（コンソールのファイル見出し用）
pub fn double_box(lines: &[String]) -> String {
    let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let horizontal = "═".repeat(width + 2);

    let mut out = format!("╔{}╗\n", horizontal);
    for line in lines {
        let pad = width - line.chars().count();
        out.push_str(&format!("║ {}{} ║\n", line, " ".repeat(pad)));
    }
    out.push_str(&format!("╚{}╝\n", horizontal));
    out
}
