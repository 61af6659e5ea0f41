//! The document reader: a hand-written recursive-descent parser that
//! flattens a JSON-like configuration document into dotted-key/raw-value
//! pairs.
//!
//! The grammar is deliberately restricted to what the format itself uses:
//! objects, arrays, double-quoted strings with the `\" \\ \n \t` escapes
//! (any other escaped character passes through literally), and bare tokens
//! for numbers/booleans/null captured verbatim. No numeric exponents, no
//! Unicode escapes — full JSON compliance is out of scope.
//!
//! Two deliberate shape decisions:
//!
//! - **Leaf paths only.** A nested object contributes its leaves under
//!   dotted paths (`compiler.warnings.level`); the object path itself never
//!   appears in the map. This keeps the reader free of schema knowledge —
//!   interpreting a raw value is the binding layer's job.
//! - **Arrays are one value.** Scalar elements are joined with `,` under the
//!   array's own path. An element that is itself an object is skipped
//!   wholesale (balanced-brace scan) and contributes nothing; arrays of
//!   objects are not part of this format.
//!
//! The reader never fails. Malformed or truncated input simply stops the
//! walk early, and whatever keys were extracted up to that point are
//! returned. The document is user-edited text; partial corruption degrades
//! to defaults instead of blocking the whole editing session.

use std::collections::BTreeMap;

/// Flattened decode output: dotted key path → raw scalar (or comma-joined
/// list) text. No type coercion happens here.
pub type FlatMap = BTreeMap<String, String>;

/// Decode a configuration document into a flat dotted-key map.
///
/// Best-effort: returns whatever keys could be extracted, never an error.
pub fn decode(text: &str) -> FlatMap {
    let mut map = FlatMap::new();
    let mut reader = Reader::new(text);
    reader.skip_ws();
    if reader.peek() == Some('{') {
        reader.object("", &mut map);
    }
    map
}

fn dotted(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

struct Reader {
    chars: Vec<char>,
    pos: usize,
}

impl Reader {
    fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    /// Consume `expected` if it is next. Returns whether it was consumed.
    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(' ' | '\t' | '\r' | '\n')) {
            self.pos += 1;
        }
    }

    /// Parse `{ "key": value, ... }`, flattening leaves into `out` under
    /// `prefix`. Assumes the opening brace is next. Stops quietly on
    /// end-of-input or anything that isn't part of the grammar.
    fn object(&mut self, prefix: &str, out: &mut FlatMap) {
        self.eat('{');
        loop {
            self.skip_ws();
            match self.peek() {
                Some('}') => {
                    self.pos += 1;
                    return;
                }
                Some('"') => {}
                _ => return,
            }

            let key = self.string();
            self.skip_ws();
            if !self.eat(':') {
                return;
            }
            self.skip_ws();
            self.value(&dotted(prefix, &key), out);

            self.skip_ws();
            if self.eat(',') {
                continue;
            }
            if self.eat('}') {
                return;
            }
            // Truncated or malformed past this point; keep what we have.
            return;
        }
    }

    fn value(&mut self, path: &str, out: &mut FlatMap) {
        match self.peek() {
            Some('{') => self.object(path, out),
            Some('[') => self.array(path, out),
            Some('"') => {
                let s = self.string();
                out.insert(path.to_string(), s);
            }
            Some(_) => {
                let token = self.bare();
                out.insert(path.to_string(), token);
            }
            None => {}
        }
    }

    /// Parse `[ v, v, ... ]` into one comma-joined value under `path`.
    /// Object elements are skipped and contribute nothing. The key is
    /// inserted even when the array is empty — an explicit `[]` is
    /// meaningful to the binding layer.
    fn array(&mut self, path: &str, out: &mut FlatMap) {
        self.eat('[');
        let mut items = Vec::new();
        loop {
            self.skip_ws();
            match self.peek() {
                None => break,
                Some(']') => {
                    self.pos += 1;
                    break;
                }
                Some(',') => {
                    self.pos += 1;
                    continue;
                }
                Some('{') => self.skip_object(),
                Some('"') => items.push(self.string()),
                Some(_) => items.push(self.bare()),
            }

            self.skip_ws();
            if self.eat(',') {
                continue;
            }
            self.eat(']');
            break;
        }
        out.insert(path.to_string(), items.join(","));
    }

    /// Parse a double-quoted string. Assumes the opening quote is next.
    /// Unterminated strings yield whatever was read before end-of-input.
    fn string(&mut self) -> String {
        self.eat('"');
        let mut s = String::new();
        while let Some(c) = self.bump() {
            match c {
                '"' => break,
                '\\' => match self.bump() {
                    Some('n') => s.push('\n'),
                    Some('t') => s.push('\t'),
                    // Covers `\"` and `\\`; anything else escaped passes
                    // through literally.
                    Some(other) => s.push(other),
                    None => break,
                },
                other => s.push(other),
            }
        }
        s
    }

    /// Read a bare token (number, boolean, null) verbatim up to the next
    /// structural delimiter or whitespace.
    fn bare(&mut self) -> String {
        let mut token = String::new();
        while let Some(c) = self.peek() {
            if matches!(c, ',' | '}' | ']' | ' ' | '\t' | '\r' | '\n') {
                break;
            }
            token.push(c);
            self.pos += 1;
        }
        token
    }

    /// Skip a balanced `{...}` without flattening it, respecting string
    /// bodies so braces inside quotes don't throw the count off.
    fn skip_object(&mut self) {
        self.eat('{');
        let mut depth: usize = 1;
        while let Some(c) = self.bump() {
            match c {
                '"' => {
                    while let Some(sc) = self.bump() {
                        match sc {
                            '\\' => {
                                self.bump();
                            }
                            '"' => break,
                            _ => {}
                        }
                    }
                }
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        return;
                    }
                }
                _ => {}
            }
        }
    }
}
