use lazy_static::lazy_static;
use num_bigint::BigInt;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_OPERATOR_HANDLER, MK_TOKEN,
};

use super::tokens::{KeyWordKind, OperatorKind, Token, TokenKind};

pub type RegexHandler = fn(&mut Lexer, &str) -> Result<(), Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Tried in order; the first pattern matching at the cursor wins. Two-character
    // operators precede the one-character operators sharing their prefix.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^[ \t\x0C]+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^//.*").unwrap(), handler: comment_handler },
        RegexPattern { regex: Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: word_handler },
        RegexPattern { regex: Regex::new("^(?:[0-9]|\\.[0-9])(?:[eE][+-]|[0-9A-Za-z_.])*").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("^:=").unwrap(), handler: MK_OPERATOR_HANDLER!(OperatorKind::Set) },
        RegexPattern { regex: Regex::new("^==").unwrap(), handler: MK_OPERATOR_HANDLER!(OperatorKind::Equal) },
        RegexPattern { regex: Regex::new("^!=").unwrap(), handler: MK_OPERATOR_HANDLER!(OperatorKind::NotEqual) },
        RegexPattern { regex: Regex::new("^>=").unwrap(), handler: MK_OPERATOR_HANDLER!(OperatorKind::GreaterOrEqual) },
        RegexPattern { regex: Regex::new("^<=").unwrap(), handler: MK_OPERATOR_HANDLER!(OperatorKind::LowerOrEqual) },
        RegexPattern { regex: Regex::new("^&&").unwrap(), handler: MK_OPERATOR_HANDLER!(OperatorKind::And) },
        RegexPattern { regex: Regex::new("^\\|\\|").unwrap(), handler: MK_OPERATOR_HANDLER!(OperatorKind::Or) },
        RegexPattern { regex: Regex::new("^>").unwrap(), handler: MK_OPERATOR_HANDLER!(OperatorKind::Greater) },
        RegexPattern { regex: Regex::new("^<").unwrap(), handler: MK_OPERATOR_HANDLER!(OperatorKind::Lower) },
        RegexPattern { regex: Regex::new("^\\+").unwrap(), handler: MK_OPERATOR_HANDLER!(OperatorKind::Plus) },
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_OPERATOR_HANDLER!(OperatorKind::Minus) },
        RegexPattern { regex: Regex::new("^\\*").unwrap(), handler: MK_OPERATOR_HANDLER!(OperatorKind::Multiply) },
        RegexPattern { regex: Regex::new("^/").unwrap(), handler: MK_OPERATOR_HANDLER!(OperatorKind::Divide) },
        RegexPattern { regex: Regex::new("^%").unwrap(), handler: MK_OPERATOR_HANDLER!(OperatorKind::Mod) },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_OPERATOR_HANDLER!(OperatorKind::LeftBracket) },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_OPERATOR_HANDLER!(OperatorKind::RightBracket) },
        RegexPattern { regex: Regex::new("^;").unwrap(), handler: MK_OPERATOR_HANDLER!(OperatorKind::Semicolon) },
    ];

    static ref INTEGER_LITERAL: Regex = Regex::new("^[0-9]+$").unwrap();

    static ref FLOAT_LITERAL: Regex = Regex::new(concat!(
        "^(?:",
        "(?:[0-9]+\\.[0-9]*|\\.[0-9]+)(?:[eE][+-]?[0-9]+)?[fFdD]?",
        "|[0-9]+[eE][+-]?[0-9]+[fFdD]?",
        "|[0-9]+[fFdD]",
        ")$"
    ))
    .unwrap();
}

const FLOAT_SUFFIXES: &[char] = &['f', 'F', 'd', 'D'];

/// Scanning state for one `tokenize` call. Works one physical line at a time.
pub struct Lexer {
    tokens: Vec<Token>,
    line_text: String,
    line: usize,
    // byte offset into `line_text`
    pos: usize,
    // character offset into `line_text`
    column: usize,
}

impl Lexer {
    pub fn new() -> Lexer {
        Lexer {
            tokens: vec![],
            line_text: String::new(),
            line: 0,
            pos: 0,
            column: 0,
        }
    }

    pub fn start_line(&mut self, line: usize, text: &str) {
        self.line = line;
        self.line_text = text.to_string();
        self.pos = 0;
        self.column = 0;
    }

    pub fn advance(&mut self, lexeme: &str) {
        self.pos += lexeme.len();
        self.column += lexeme.chars().count();
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Span a lexeme starting at the cursor would cover.
    pub fn span_of(&self, lexeme: &str) -> Span {
        Span::new(self.line, self.column, self.column + lexeme.chars().count())
    }

    pub fn position(&self) -> Position {
        Position(self.line, self.column)
    }

    pub fn at(&self) -> String {
        self.remainder().chars().take(1).collect()
    }

    pub fn remainder(&self) -> &str {
        &self.line_text[self.pos..]
    }

    pub fn at_eol(&self) -> bool {
        self.pos >= self.line_text.len()
    }

    fn malformed_number(&self, lexeme: &str) -> Error {
        Error::new(
            ErrorImpl::MalformedNumber {
                token: lexeme.to_string(),
            },
            self.position(),
        )
    }
}

impl Default for Lexer {
    fn default() -> Self {
        Lexer::new()
    }
}

fn skip_handler(lexer: &mut Lexer, lexeme: &str) -> Result<(), Error> {
    lexer.advance(lexeme);
    Ok(())
}

fn comment_handler(lexer: &mut Lexer, lexeme: &str) -> Result<(), Error> {
    lexer.push(MK_TOKEN!(TokenKind::Comment(lexeme.to_string()), lexer.span_of(lexeme)));
    lexer.advance(lexeme);
    Ok(())
}

fn word_handler(lexer: &mut Lexer, lexeme: &str) -> Result<(), Error> {
    let kind = if let Some(keyword) = KeyWordKind::from_notation(lexeme) {
        TokenKind::KeyWord(keyword)
    } else {
        match lexeme {
            "true" => TokenKind::Boolean(true),
            "false" => TokenKind::Boolean(false),
            _ => TokenKind::Identifier(lexeme.to_string()),
        }
    };

    lexer.push(MK_TOKEN!(kind, lexer.span_of(lexeme)));
    lexer.advance(lexeme);
    Ok(())
}

fn number_handler(lexer: &mut Lexer, lexeme: &str) -> Result<(), Error> {
    let kind = if INTEGER_LITERAL.is_match(lexeme) {
        let value = lexeme
            .parse::<BigInt>()
            .map_err(|_| lexer.malformed_number(lexeme))?;
        TokenKind::Integer(value)
    } else if FLOAT_LITERAL.is_match(lexeme) {
        let value = lexeme
            .trim_end_matches(FLOAT_SUFFIXES)
            .parse::<f64>()
            .map_err(|_| lexer.malformed_number(lexeme))?;
        TokenKind::Float(value)
    } else {
        return Err(lexer.malformed_number(lexeme));
    };

    lexer.push(MK_TOKEN!(kind, lexer.span_of(lexeme)));
    lexer.advance(lexeme);
    Ok(())
}

/// Splits `source` into tokens. Either every token is returned or the first
/// lexical error is; there is no partial result.
pub fn tokenize(source: String) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new();

    for (index, line) in source.split('\n').enumerate() {
        lex.start_line(index, line.strip_suffix('\r').unwrap_or(line));

        while !lex.at_eol() {
            let matched = PATTERNS.iter().find_map(|pattern| {
                pattern
                    .regex
                    .find(lex.remainder())
                    .map(|found| (pattern.handler, found.as_str().to_string()))
            });

            match matched {
                Some((handler, lexeme)) => handler(&mut lex, &lexeme)?,
                None => {
                    return Err(Error::new(
                        ErrorImpl::UnrecognisedToken { token: lex.at() },
                        lex.position(),
                    ))
                }
            }
        }
    }

    Ok(lex.tokens)
}
