//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_OPERATOR_HANDLER!` - Creates a lexer handler for a fixed operator

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind, including its payload
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Boolean(true), Span::new(0, 0, 4));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $span:expr) => {
        Token {
            kind: $kind,
            span: $span,
        }
    };
}

/// Creates a lexer handler for an operator with a fixed notation.
///
/// The generated handler pushes an `Operator` token spanning the operator's
/// notation and advances the lexer past it.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^:=").unwrap(),
///     handler: MK_OPERATOR_HANDLER!(OperatorKind::Set),
/// }
/// ```
#[macro_export]
macro_rules! MK_OPERATOR_HANDLER {
    ($kind:expr) => {
        |lexer: &mut Lexer, _lexeme: &str| -> Result<(), Error> {
            let notation = $kind.notation();
            lexer.push(MK_TOKEN!(TokenKind::Operator($kind), lexer.span_of(notation)));
            lexer.advance(notation);
            Ok(())
        }
    };
}
