//! 区切り文字判定モジュール
//!
//! 先頭行に含まれる文字を固定の優先順位で調べ、区切り文字を1つ決める。
//! 優先順位: タブ > パイプ > カンマ > CR > LF、いずれも無ければセミコロン。

/// CSVの区切り文字
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Tab,
    Pipe,
    Comma,
    CarriageReturn,
    LineFeed,
    Semicolon,
}

/// 判定順（先に見つかったものが優先）
const PRIORITY: &[Delimiter] = &[
    Delimiter::Tab,
    Delimiter::Pipe,
    Delimiter::Comma,
    Delimiter::CarriageReturn,
    Delimiter::LineFeed,
];

impl Delimiter {
    pub fn as_char(&self) -> char {
        match self {
            Delimiter::Tab => '\t',
            Delimiter::Pipe => '|',
            Delimiter::Comma => ',',
            Delimiter::CarriageReturn => '\r',
            Delimiter::LineFeed => '\n',
            Delimiter::Semicolon => ';',
        }
    }

    /// csvクレートに渡すバイト値
    pub fn as_byte(&self) -> u8 {
        self.as_char() as u8
    }
}

impl std::fmt::Display for Delimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Delimiter::Tab => write!(f, "\\t"),
            Delimiter::CarriageReturn => write!(f, "\\r"),
            Delimiter::LineFeed => write!(f, "\\n"),
            other => write!(f, "{}", other.as_char()),
        }
    }
}

/// 先頭行から区切り文字を判定
pub fn sniff_delimiter(first_line: &str) -> Delimiter {
    PRIORITY
        .iter()
        .copied()
        .find(|d| first_line.contains(d.as_char()))
        .unwrap_or(Delimiter::Semicolon)
}
