use super::SignatureInput;
use logos::{Logos, Span, SpannedIter};
use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

#[derive(Clone, Copy, Debug, Logos, PartialEq, Eq)]
#[logos(skip r"[ \t]+")]
enum TokenTy {
    #[regex(r"[a-zA-Z*][a-zA-Z0-9_\-.*]*")]
    Key,

    #[regex(r"-?[0-9]+")]
    Integer,

    #[regex(r#""[^"]*""#)]
    String,

    #[token("=")]
    Equals,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[token(";")]
    Semicolon,

    #[token(",")]
    Comma,
}

/// Signature input parsing error
///
/// Carries the span of the offending token. Attach the header as source code to render it.
#[derive(Debug, Diagnostic, Error)]
#[error("Failed to parse signature input: {reason}")]
pub struct ParseError {
    reason: &'static str,

    #[label("here")]
    span: SourceSpan,
}

impl ParseError {
    fn new(reason: &'static str, span: Span) -> Self {
        Self {
            reason,
            span: span.into(),
        }
    }

    /// Location of the error inside the input
    #[must_use]
    pub fn span(&self) -> SourceSpan {
        self.span
    }
}

struct Parser<'a> {
    input: &'a str,
    tokens: SpannedIter<'a, TokenTy>,

    /// Span of the most recently consumed token
    last: Span,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            tokens: TokenTy::lexer(input).spanned(),
            last: 0..0,
        }
    }

    fn eof(&self) -> Span {
        self.input.len()..self.input.len()
    }

    fn bump(&mut self) -> Option<Result<(TokenTy, Span), ParseError>> {
        let (ty, span) = self.tokens.next()?;
        self.last = span.clone();

        Some(
            ty.map(|ty| (ty, span.clone()))
                .map_err(|()| ParseError::new("illegal character", span)),
        )
    }

    fn expect(
        &mut self,
        expected: TokenTy,
        reason: &'static str,
    ) -> Result<&'a str, ParseError> {
        match self.bump() {
            Some(Ok((ty, span))) if ty == expected => Ok(&self.input[span]),
            Some(Ok((_, span))) => Err(ParseError::new(reason, span)),
            Some(Err(err)) => Err(err),
            None => Err(ParseError::new(reason, self.eof())),
        }
    }

    fn components(&mut self) -> Result<Vec<&'a str>, ParseError> {
        self.expect(TokenTy::OpenParen, "expected '('")?;

        let mut components = Vec::new();
        let mut separated = true;
        loop {
            let Some(token) = self.bump() else {
                return Err(ParseError::new("unterminated component list", self.eof()));
            };

            match token? {
                (TokenTy::CloseParen, span) if separated && !components.is_empty() => {
                    return Err(ParseError::new("trailing ','", span));
                }
                (TokenTy::CloseParen, _) => break,
                // Both `"a" "b"` and `"a", "b"` are accepted
                (TokenTy::String, span) => {
                    components.push(self.input[span].trim_matches('"'));
                    separated = false;
                }
                (TokenTy::Comma, _) if !separated => separated = true,
                (_, span) => {
                    return Err(ParseError::new("expected component identifier", span));
                }
            }
        }

        Ok(components)
    }

    fn parse(mut self) -> Result<SignatureInput<'a>, ParseError> {
        let label = self.expect(TokenTy::Key, "expected signature label")?;
        self.expect(TokenTy::Equals, "expected '='")?;
        let components = self.components()?;

        let mut created = None;
        let mut key_id = None;
        let mut algorithm = None;

        while let Some(token) = self.bump() {
            let (ty, span) = token?;
            if ty != TokenTy::Semicolon {
                return Err(ParseError::new("expected ';'", span));
            }

            let key = self.expect(TokenTy::Key, "expected parameter name")?;
            let key_span = self.last.clone();
            self.expect(TokenTy::Equals, "expected '='")?;

            let is_repeated = match key {
                "created" => {
                    let value = self.expect(TokenTy::Integer, "expected integer")?;
                    let value = value
                        .parse()
                        .map_err(|_| ParseError::new("integer out of range", self.last.clone()))?;
                    created.replace(value).is_some()
                }
                "keyid" => {
                    let value = self.expect(TokenTy::String, "expected string")?;
                    key_id.replace(value.trim_matches('"')).is_some()
                }
                "alg" => {
                    let value = self.expect(TokenTy::String, "expected string")?;
                    algorithm.replace(value.trim_matches('"')).is_some()
                }
                _ => return Err(ParseError::new("unknown parameter", key_span)),
            };

            if is_repeated {
                return Err(ParseError::new("repeated parameter", key_span));
            }
        }

        let created =
            created.ok_or_else(|| ParseError::new("missing 'created' parameter", self.eof()))?;
        let key_id =
            key_id.ok_or_else(|| ParseError::new("missing 'keyid' parameter", self.eof()))?;

        Ok(SignatureInput {
            label,
            components,
            created,
            key_id,
            algorithm,
        })
    }
}

/// Parse a `Signature-Input` header
#[inline]
pub fn parse(input: &str) -> Result<SignatureInput<'_>, ParseError> {
    Parser::new(input).parse()
}

/// Extract the signature token for the label from a `Signature` header
///
/// Understands both `indexed="?0;signify="<token>` and `indexed="?0";signify=:<token>:`
#[must_use]
pub fn signature_token<'a>(header: &'a str, label: &str) -> Option<&'a str> {
    let needle = format!("{label}=");
    let start = header.rfind(&needle)? + needle.len();

    let token = header[start..]
        .split([';', ','])
        .next()?
        .trim()
        .trim_matches(['"', ':']);

    (!token.is_empty()).then_some(token)
}
