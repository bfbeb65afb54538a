use crate::error::{Result, SignatureError};

/// Converts a source-style type reference (`java.util.List<java.lang.String>`,
/// `int[]`, `String []`, `List<? extends Number>`) into the compact signature
/// grammar.
///
/// `resolved` selects the class-type marker: `L` when a resolved binary name
/// is available, `Q` for source names. Primitive keywords are matched only as
/// whole identifiers, so `interation.test.MyData` encodes as a class name and
/// never as `int` followed by garbage. Whitespace (any Unicode `White_Space`
/// character) around dots, angle brackets and array brackets is skipped.
/// Empty or malformed input fails with [`SignatureError`].
pub fn create_type_signature(name: &str, resolved: bool) -> Result<String> {
    let mut tokens = SourceTokens::new(name);
    let sig = tokens.parse_type(resolved)?;
    tokens.skip_whitespace();
    if !tokens.at_end() {
        return Err(tokens.error("unexpected characters after type"));
    }
    Ok(sig)
}

/// Prepends `dims` array dimensions to `element`.
pub fn create_array_signature(element: &str, dims: usize) -> String {
    if dims == 0 {
        return element.to_string();
    }
    let mut sig = String::with_capacity(dims + element.len());
    for _ in 0..dims {
        sig.push('[');
    }
    sig.push_str(element);
    sig
}

/// Concatenates parameter and return signatures into a method signature.
pub fn create_method_signature(parameter_types: &[&str], return_type: &str) -> String {
    let mut sig = String::new();
    sig.push('(');
    for param in parameter_types {
        sig.push_str(param);
    }
    sig.push(')');
    sig.push_str(return_type);
    sig
}

/// Joins bound signatures into an intersection type signature (`|A:B`).
pub fn create_intersection_type_signature(bounds: &[&str]) -> String {
    let mut sig = String::new();
    sig.push('|');
    for (i, bound) in bounds.iter().enumerate() {
        if i > 0 {
            sig.push(':');
        }
        sig.push_str(bound);
    }
    sig
}

fn primitive_code(keyword: &str) -> Option<char> {
    Some(match keyword {
        "byte" => 'B',
        "char" => 'C',
        "double" => 'D',
        "float" => 'F',
        "int" => 'I',
        "long" => 'J',
        "short" => 'S',
        "void" => 'V',
        "boolean" => 'Z',
        _ => return None,
    })
}

struct SourceTokens<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> SourceTokens<'a> {
    fn new(text: &'a str) -> Self {
        SourceTokens { text, pos: 0 }
    }

    fn error(&self, reason: &'static str) -> SignatureError {
        SignatureError::new(self.text, self.pos, reason)
    }

    fn at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    /// Skips whitespace. Always advances by at least one full character per
    /// skipped codepoint, so unusual space characters can never wedge the
    /// tokenizer.
    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            if !c.is_ascii() {
                tracing::trace!(codepoint = c as u32, "skipping non-ascii whitespace in type text");
            }
            self.bump();
        }
    }

    fn parse_identifier(&mut self) -> Result<&'a str> {
        let start = self.pos;
        while let Some(c) = self.peek() {
            let continues = if self.pos == start {
                c.is_alphabetic() || c == '_' || c == '$'
            } else {
                c.is_alphanumeric() || c == '_' || c == '$'
            };
            if !continues {
                break;
            }
            self.bump();
        }
        if self.pos == start {
            return Err(self.error("expected a type name"));
        }
        Ok(&self.text[start..self.pos])
    }

    /// One type argument: either a plain type or a wildcard (`?`,
    /// `? extends T`, `? super T`), encoded as `*`/`+`/`-`.
    fn parse_type_argument(&mut self, resolved: bool) -> Result<String> {
        self.skip_whitespace();
        if self.peek() != Some('?') {
            return self.parse_type(resolved);
        }
        self.bump();
        self.skip_whitespace();
        match self.peek() {
            Some('>') | Some(',') | None => Ok("*".to_string()),
            _ => {
                let marker = match self.parse_identifier()? {
                    "extends" => '+',
                    "super" => '-',
                    _ => return Err(self.error("expected `extends` or `super` after `?`")),
                };
                let mut sig = String::new();
                sig.push(marker);
                sig.push_str(&self.parse_type(resolved)?);
                Ok(sig)
            }
        }
    }

    fn parse_type(&mut self, resolved: bool) -> Result<String> {
        self.skip_whitespace();
        let first = self.parse_identifier()?;
        self.skip_whitespace();

        // Qualified-name dots before any type arguments.
        let mut name = String::from(first);
        while self.peek() == Some('.') {
            self.bump();
            self.skip_whitespace();
            name.push('.');
            name.push_str(self.parse_identifier()?);
            self.skip_whitespace();
        }

        let body = match primitive_code(&name) {
            Some(code) => code.to_string(),
            None => {
                let mut body = String::new();
                body.push(if resolved { 'L' } else { 'Q' });
                body.push_str(&name);
                loop {
                    if self.peek() == Some('<') {
                        self.bump();
                        body.push('<');
                        loop {
                            body.push_str(&self.parse_type_argument(resolved)?);
                            self.skip_whitespace();
                            match self.peek() {
                                Some(',') => self.bump(),
                                Some('>') => {
                                    self.bump();
                                    break;
                                }
                                _ => {
                                    return Err(
                                        self.error("expected `,` or `>` in type arguments")
                                    )
                                }
                            }
                        }
                        body.push('>');
                        self.skip_whitespace();
                    }
                    // Member-type segment after a type-argument block.
                    if self.peek() == Some('.') {
                        self.bump();
                        self.skip_whitespace();
                        body.push('.');
                        body.push_str(self.parse_identifier()?);
                        self.skip_whitespace();
                        continue;
                    }
                    break;
                }
                body.push(';');
                body
            }
        };

        // Array suffixes, with optional embedded whitespace.
        self.skip_whitespace();
        let mut dims = 0usize;
        while self.peek() == Some('[') {
            self.bump();
            self.skip_whitespace();
            if self.peek() != Some(']') {
                return Err(self.error("expected `]`"));
            }
            self.bump();
            self.skip_whitespace();
            dims += 1;
        }
        Ok(create_array_signature(&body, dims))
    }
}
