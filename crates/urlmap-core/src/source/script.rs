//! Reader for the `urlmap.js` script form:
//!
//! ```text
//! // comments are allowed
//! baseURLs = [
//!     [ 'GLib', 'https://docs.gtk.org/glib/' ],
//!     [ "Gtk", "https://docs.gtk.org/gtk4/" ],
//! ];
//! ```
//!
//! Only this one assignment is understood; it is not a JavaScript parser.

use super::SourceError;

const ASSIGNMENT_TARGET: &str = "baseURLs";

/// Parse a urlmap script into its raw string arrays, in order.
pub(super) fn parse_script(src: &str) -> Result<Vec<Vec<String>>, SourceError> {
    let mut cur = Cursor { src, pos: 0 };

    cur.skip_trivia()?;
    let mut ident = cur.ident()?;
    if matches!(ident, "var" | "let" | "const") {
        cur.skip_trivia()?;
        ident = cur.ident()?;
    }
    if ident != ASSIGNMENT_TARGET {
        return Err(cur.error(format!("expected `{ASSIGNMENT_TARGET}`, found `{ident}`")));
    }
    cur.skip_trivia()?;
    cur.expect('=')?;

    let rows = cur.list(|cur| cur.list(Cursor::string))?;

    cur.skip_trivia()?;
    if cur.peek() == Some(';') {
        cur.bump();
        cur.skip_trivia()?;
    }
    if cur.peek().is_some() {
        return Err(cur.error("unexpected content after assignment"));
    }
    Ok(rows)
}

struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn error(&self, message: impl Into<String>) -> SourceError {
        SourceError::Script {
            offset: self.pos,
            message: message.into(),
        }
    }

    fn expect(&mut self, want: char) -> Result<(), SourceError> {
        match self.peek() {
            Some(c) if c == want => {
                self.bump();
                Ok(())
            }
            Some(c) => Err(self.error(format!("expected `{want}`, found `{c}`"))),
            None => Err(self.error(format!("expected `{want}`, found end of input"))),
        }
    }

    /// Skip whitespace, `//` line comments and `/* */` block comments.
    fn skip_trivia(&mut self) -> Result<(), SourceError> {
        loop {
            let rest = self.rest();
            let trimmed = rest.trim_start();
            self.pos += rest.len() - trimmed.len();

            if let Some(after) = trimmed.strip_prefix("//") {
                let skip = after.find('\n').map_or(after.len(), |i| i + 1);
                self.pos += 2 + skip;
            } else if let Some(after) = trimmed.strip_prefix("/*") {
                match after.find("*/") {
                    Some(i) => self.pos += 2 + i + 2,
                    None => return Err(self.error("unterminated block comment")),
                }
            } else {
                return Ok(());
            }
        }
    }

    fn ident(&mut self) -> Result<&'a str, SourceError> {
        let rest = self.rest();
        let len = rest
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '$'))
            .unwrap_or(rest.len());
        if len == 0 {
            return Err(self.error("expected identifier"));
        }
        self.pos += len;
        Ok(&rest[..len])
    }

    /// `[ item, item, ... ]` with an optional trailing comma.
    fn list<T>(
        &mut self,
        mut item: impl FnMut(&mut Self) -> Result<T, SourceError>,
    ) -> Result<Vec<T>, SourceError> {
        self.skip_trivia()?;
        self.expect('[')?;
        let mut out = Vec::new();
        loop {
            self.skip_trivia()?;
            if self.peek() == Some(']') {
                self.bump();
                return Ok(out);
            }
            out.push(item(self)?);
            self.skip_trivia()?;
            match self.peek() {
                Some(',') => {
                    self.bump();
                }
                Some(']') => {}
                Some(c) => return Err(self.error(format!("expected `,` or `]`, found `{c}`"))),
                None => return Err(self.error("unterminated array")),
            }
        }
    }

    /// Single- or double-quoted string literal.
    fn string(&mut self) -> Result<String, SourceError> {
        self.skip_trivia()?;
        let quote = match self.peek() {
            Some(q @ ('\'' | '"')) => q,
            Some(c) => return Err(self.error(format!("expected string literal, found `{c}`"))),
            None => return Err(self.error("expected string literal, found end of input")),
        };
        self.bump();

        let mut out = String::new();
        loop {
            match self.bump() {
                None | Some('\n') => return Err(self.error("unterminated string literal")),
                Some(c) if c == quote => return Ok(out),
                Some('\\') => match self.bump() {
                    Some(c @ ('\\' | '\'' | '"' | '/')) => out.push(c),
                    Some('n') => out.push('\n'),
                    Some('t') => out.push('\t'),
                    Some(c) => return Err(self.error(format!("unsupported escape `\\{c}`"))),
                    None => return Err(self.error("unterminated string literal")),
                },
                Some(c) => out.push(c),
            }
        }
    }
}
