use lazy_static::lazy_static;
use num_bigint::BigInt;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    /// Keyword spellings, lowercase. Lookups must lowercase the lexeme first.
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, KeyWordKind> = {
        let mut map = HashMap::new();
        map.insert("if", KeyWordKind::If);
        map.insert("then", KeyWordKind::Then);
        map.insert("else", KeyWordKind::Else);
        map.insert("while", KeyWordKind::While);
        map.insert("do", KeyWordKind::Do);
        map.insert("read", KeyWordKind::Read);
        map.insert("write", KeyWordKind::Write);
        map.insert("begin", KeyWordKind::Begin);
        map.insert("end", KeyWordKind::End);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum KeyWordKind {
    If,
    Then,
    Else,
    While,
    Do,
    Read,
    Write,
    Begin,
    End,
}

impl KeyWordKind {
    /// Case-insensitive lookup: `IF`, `if` and `If` all give `KeyWordKind::If`.
    pub fn from_notation(notation: &str) -> Option<KeyWordKind> {
        RESERVED_LOOKUP
            .get(notation.to_ascii_lowercase().as_str())
            .copied()
    }

    pub fn name(&self) -> &'static str {
        match self {
            KeyWordKind::If => "IF",
            KeyWordKind::Then => "THEN",
            KeyWordKind::Else => "ELSE",
            KeyWordKind::While => "WHILE",
            KeyWordKind::Do => "DO",
            KeyWordKind::Read => "READ",
            KeyWordKind::Write => "WRITE",
            KeyWordKind::Begin => "BEGIN",
            KeyWordKind::End => "END",
        }
    }
}

impl Display for KeyWordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum OperatorKind {
    Plus,           // +
    Minus,          // -
    Multiply,       // *
    Divide,         // /
    Mod,            // %
    Set,            // :=
    Equal,          // ==
    NotEqual,       // !=
    Greater,        // >
    GreaterOrEqual, // >=
    Lower,          // <
    LowerOrEqual,   // <=
    And,            // &&
    Or,             // ||
    LeftBracket,    // (
    RightBracket,   // )
    Semicolon,      // ;
}

impl OperatorKind {
    pub const ALL: [OperatorKind; 17] = [
        OperatorKind::Plus,
        OperatorKind::Minus,
        OperatorKind::Multiply,
        OperatorKind::Divide,
        OperatorKind::Mod,
        OperatorKind::Set,
        OperatorKind::Equal,
        OperatorKind::NotEqual,
        OperatorKind::Greater,
        OperatorKind::GreaterOrEqual,
        OperatorKind::Lower,
        OperatorKind::LowerOrEqual,
        OperatorKind::And,
        OperatorKind::Or,
        OperatorKind::LeftBracket,
        OperatorKind::RightBracket,
        OperatorKind::Semicolon,
    ];

    pub fn notation(&self) -> &'static str {
        match self {
            OperatorKind::Plus => "+",
            OperatorKind::Minus => "-",
            OperatorKind::Multiply => "*",
            OperatorKind::Divide => "/",
            OperatorKind::Mod => "%",
            OperatorKind::Set => ":=",
            OperatorKind::Equal => "==",
            OperatorKind::NotEqual => "!=",
            OperatorKind::Greater => ">",
            OperatorKind::GreaterOrEqual => ">=",
            OperatorKind::Lower => "<",
            OperatorKind::LowerOrEqual => "<=",
            OperatorKind::And => "&&",
            OperatorKind::Or => "||",
            OperatorKind::LeftBracket => "(",
            OperatorKind::RightBracket => ")",
            OperatorKind::Semicolon => ";",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            OperatorKind::Plus => "PLUS",
            OperatorKind::Minus => "MINUS",
            OperatorKind::Multiply => "MULTIPLY",
            OperatorKind::Divide => "DIVIDE",
            OperatorKind::Mod => "MOD",
            OperatorKind::Set => "SET",
            OperatorKind::Equal => "EQUAL",
            OperatorKind::NotEqual => "NOT_EQUAL",
            OperatorKind::Greater => "GREATER",
            OperatorKind::GreaterOrEqual => "GREATER_OR_EQUAL",
            OperatorKind::Lower => "LOWER",
            OperatorKind::LowerOrEqual => "LOWER_OR_EQUAL",
            OperatorKind::And => "AND",
            OperatorKind::Or => "OR",
            OperatorKind::LeftBracket => "LEFT_BRACKET",
            OperatorKind::RightBracket => "RIGHT_BRACKET",
            OperatorKind::Semicolon => "SEMICOLON",
        }
    }

    pub fn from_notation(notation: &str) -> Option<OperatorKind> {
        OperatorKind::ALL
            .iter()
            .find(|kind| kind.notation() == notation)
            .copied()
    }
}

impl Display for OperatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.notation())
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum TokenKind {
    Integer(BigInt),
    Float(f64),
    Boolean(bool),
    Identifier(String),
    KeyWord(KeyWordKind),
    Operator(OperatorKind),
    Comment(String),
}

#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn line(&self) -> usize {
        self.span.line
    }

    pub fn start(&self) -> usize {
        self.span.start
    }

    pub fn end(&self) -> usize {
        self.span.end
    }

    pub fn is_keyword(&self, keyword: KeyWordKind) -> bool {
        self.kind == TokenKind::KeyWord(keyword)
    }

    pub fn is_operator(&self, operator: OperatorKind) -> bool {
        self.kind == TokenKind::Operator(operator)
    }

    pub fn is_comment(&self) -> bool {
        matches!(self.kind, TokenKind::Comment(_))
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Span { line, start, end } = self.span;
        match &self.kind {
            TokenKind::Integer(value) => write!(
                f,
                "INT(value:{}, line:{}, begin:{}, end:{})",
                value, line, start, end
            ),
            TokenKind::Float(value) => write!(
                f,
                "FLOAT(value:{:?}, line:{}, begin:{}, end:{})",
                value, line, start, end
            ),
            TokenKind::Boolean(value) => write!(
                f,
                "BOOL(value:{}, line:{}, begin:{}, end:{})",
                value, line, start, end
            ),
            TokenKind::Identifier(name) => write!(
                f,
                "IDENTIFIER(name:{}, line:{}, begin:{}, end:{})",
                name, line, start, end
            ),
            TokenKind::KeyWord(kind) => write!(
                f,
                "KW_{}(line:{}, begin:{}, end:{})",
                kind.name(),
                line,
                start,
                end
            ),
            TokenKind::Operator(kind) => write!(
                f,
                "OP_{}(line:{}, begin:{}, end:{})",
                kind.name(),
                line,
                start,
                end
            ),
            TokenKind::Comment(text) => write!(
                f,
                "COMMENT(text:{}, line:{}, begin:{}, end:{})",
                text, line, start, end
            ),
        }
    }
}
