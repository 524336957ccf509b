//! Lazy discovery of single- and double-quoted strings in an expression body.

/// One piece of a scanned text span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text copied through unchanged, including whole template literals and
    /// unterminated strings.
    Verbatim(&'a str),
    /// The raw content of a quoted string, escapes preserved, without its quotes.
    Quoted { content: &'a str, quote: char },
}

/// Iterator over the [`Segment`]s of a text span.
///
/// Concatenating every segment (re-adding quotes around `Quoted` content)
/// reproduces the input exactly.
#[derive(Debug, Clone)]
pub struct QuotedStrings<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> QuotedStrings<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    /// Scans a quoted string opening at `self.pos`.
    fn quoted(&mut self, quote: u8) -> Segment<'a> {
        let bytes = self.text.as_bytes();
        let start = self.pos;
        let mut i = start + 1;

        while i < bytes.len() {
            match bytes[i] {
                b'\\' => {
                    i += 2;
                    continue;
                }
                b if b == quote => {
                    self.pos = i + 1;
                    return Segment::Quoted {
                        content: &self.text[start + 1..i],
                        quote: quote as char,
                    };
                }
                _ => i += 1,
            }
        }

        // Unterminated: hand back everything from the opening quote.
        self.pos = bytes.len();
        Segment::Verbatim(&self.text[start..])
    }

    /// Scans plain text up to the next quote outside a template literal.
    fn verbatim(&mut self) -> Segment<'a> {
        let bytes = self.text.as_bytes();
        let start = self.pos;
        let mut in_template = false;
        let mut i = start;

        while i < bytes.len() {
            let byte = bytes[i];
            if in_template {
                match byte {
                    b'\\' => {
                        i += 2;
                        continue;
                    }
                    b'`' => in_template = false,
                    _ => {}
                }
            } else {
                match byte {
                    b'`' => in_template = true,
                    b'\'' | b'"' => break,
                    _ => {}
                }
            }
            i += 1;
        }

        let end = i.min(bytes.len());
        self.pos = end;
        Segment::Verbatim(&self.text[start..end])
    }
}

impl<'a> Iterator for QuotedStrings<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let byte = *self.text.as_bytes().get(self.pos)?;
        match byte {
            b'\'' | b'"' => Some(self.quoted(byte)),
            _ => Some(self.verbatim()),
        }
    }
}

/// Rebuilds `text`, replacing the content of every quoted string with
/// `visit(content, quote)`. Quote characters and all other text are kept.
pub fn rewrite_quoted_strings<F>(text: &str, mut visit: F) -> String
where
    F: FnMut(&str, char) -> String,
{
    let mut out = String::with_capacity(text.len());
    for segment in QuotedStrings::new(text) {
        match segment {
            Segment::Verbatim(raw) => out.push_str(raw),
            Segment::Quoted { content, quote } => {
                out.push(quote);
                out.push_str(&visit(content, quote));
                out.push(quote);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quoted_contents(text: &str) -> Vec<(&str, char)> {
        QuotedStrings::new(text)
            .filter_map(|s| match s {
                Segment::Quoted { content, quote } => Some((content, quote)),
                Segment::Verbatim(_) => None,
            })
            .collect()
    }

    #[test]
    fn finds_mixed_quote_styles() {
        let found = quoted_contents(r#"twMerge('header', cond && "hidden", 'footer')"#);
        assert_eq!(found, vec![("header", '\''), ("hidden", '"'), ("footer", '\'')]);
    }

    #[test]
    fn keeps_escapes_verbatim_in_content() {
        let found = quoted_contents(r#"f("a \"b\" c", 'it\'s')"#);
        assert_eq!(found, vec![(r#"a \"b\" c"#, '"'), (r"it\'s", '\'')]);
    }

    #[test]
    fn template_literals_are_opaque() {
        let text = r#"cn(`btn-${cond ? "a" : 'b'}`, "primary")"#;
        assert_eq!(quoted_contents(text), vec![("primary", '"')]);
    }

    #[test]
    fn escaped_backtick_stays_inside_template() {
        let text = r#"`a \` "not" ` + "yes""#;
        assert_eq!(quoted_contents(text), vec![("yes", '"')]);
    }

    #[test]
    fn unterminated_string_is_passed_through() {
        let text = r#"cn('ok', "broken"#;
        let out = rewrite_quoted_strings(text, |c, _| c.to_uppercase());
        assert_eq!(out, r#"cn('OK', "broken"#);
    }

    #[test]
    fn segments_reassemble_input() {
        let text = r#"a ? 'x y' : `t ${"z"}` + "w" + 'unterminated"#;
        let out = rewrite_quoted_strings(text, |c, _| c.to_string());
        assert_eq!(out, text);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert_eq!(QuotedStrings::new("").next(), None);
    }
}
