//! Parse, edit, and re-serialize the YAML-like frontmatter header of an
//! agent markdown document. The dialect is deliberately restricted: scalar
//! `key: value` lines plus two known indented sub-tables, no lists, no
//! multi-line values. The document body is never touched.

/// A typed frontmatter value.
///
/// `Nested` holds the indented sub-tables (`tools:`, `permission:`) as raw
/// key/value text so they pass through edits untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Bool(bool),
    Num(f64),
    Nested(Vec<(String, String)>),
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

/// An ordered field-name → value mapping parsed from a document header.
///
/// Field order from the source document is preserved on serialization;
/// overwriting an existing field keeps its position, new fields append.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frontmatter {
    fields: Vec<(String, Value)>,
}

impl Frontmatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Get a field rendered as a string (numbers and booleans included).
    /// Returns `None` for missing fields and nested tables.
    pub fn get_str(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::Str(s) => Some(s.clone()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Num(n) => Some(n.to_string()),
            Value::Nested(_) => None,
        }
    }

    /// Set `key` to `value`, overwriting in place if the field exists.
    pub fn insert(&mut self, key: &str, value: Value) {
        match self.fields.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value,
            None => self.fields.push((key.to_string(), value)),
        }
    }

    /// Remove `key` if present. Removing an absent field is a no-op.
    pub fn remove(&mut self, key: &str) {
        self.fields.retain(|(k, _)| k != key);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// A set of header edits to apply in order: overwrite a field or delete it.
#[derive(Debug, Clone, Default)]
pub struct UpdateSet {
    updates: Vec<(String, FieldUpdate)>,
}

#[derive(Debug, Clone)]
enum FieldUpdate {
    Set(Value),
    Remove,
}

impl UpdateSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.updates
            .push((key.to_string(), FieldUpdate::Set(value.into())));
        self
    }

    /// Set a string field; an empty value means "delete the field".
    pub fn set_or_clear(mut self, key: &str, value: &str) -> Self {
        let update = if value.is_empty() {
            FieldUpdate::Remove
        } else {
            FieldUpdate::Set(Value::Str(value.to_string()))
        };
        self.updates.push((key.to_string(), update));
        self
    }

    pub fn remove(mut self, key: &str) -> Self {
        self.updates.push((key.to_string(), FieldUpdate::Remove));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }
}

/// Parse a document into its frontmatter and body.
///
/// The header block is bounded by a first line containing exactly `---` and
/// a later line containing exactly `---`. When the pattern is absent the
/// whole input is returned as body with an empty mapping; a missing header
/// is a normal case, not an error. The body is returned byte-for-byte.
pub fn parse(content: &str) -> (Frontmatter, String) {
    let Some(rest) = content.strip_prefix("---\n") else {
        return (Frontmatter::new(), content.to_string());
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        let text = line.strip_suffix('\n').unwrap_or(line);
        if text == "---" {
            let header = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return (parse_header(header), body.to_string());
        }
        offset += line.len();
    }

    // Closing marker never found: treat the whole input as body.
    (Frontmatter::new(), content.to_string())
}

fn parse_header(header: &str) -> Frontmatter {
    let mut frontmatter = Frontmatter::new();
    let lines: Vec<&str> = header.split('\n').collect();

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];
        let Some(colon) = line.find(':') else {
            // Lines without a colon carry no field; skip them silently.
            i += 1;
            continue;
        };
        let key = line[..colon].trim();
        let raw = line[colon + 1..].trim();

        if raw.is_empty() && !line.starts_with(' ') {
            let (entries, consumed) = parse_nested_entries(&lines[i + 1..]);
            if !entries.is_empty() {
                frontmatter.insert(key, Value::Nested(entries));
                i += 1 + consumed;
                continue;
            }
        }

        frontmatter.insert(key, type_raw_value(raw));
        i += 1;
    }

    frontmatter
}

/// Collect `  subkey: subvalue` lines following a bare `key:` line.
/// Sub-values stay raw text, no typing.
fn parse_nested_entries(lines: &[&str]) -> (Vec<(String, String)>, usize) {
    let mut entries = Vec::new();
    for line in lines {
        let Some(stripped) = line.strip_prefix("  ") else {
            break;
        };
        let Some(colon) = stripped.find(':') else {
            break;
        };
        entries.push((
            stripped[..colon].trim().to_string(),
            stripped[colon + 1..].trim().to_string(),
        ));
    }
    let consumed = entries.len();
    (entries, consumed)
}

/// Type a raw field value: quoted → string, `true`/`false` → bool,
/// full numeric literal → number, anything else → trimmed string.
fn type_raw_value(raw: &str) -> Value {
    if raw.len() >= 2 {
        let bytes = raw.as_bytes();
        let (first, last) = (bytes[0], bytes[raw.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return Value::Str(raw[1..raw.len() - 1].to_string());
        }
    }

    match raw {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }

    if let Some(n) = parse_number(raw) {
        return Value::Num(n);
    }

    Value::Str(raw.to_string())
}

/// Strict full-string numeric test. Partial prefixes (`4f`) and alphabetic
/// spellings (`inf`, `nan`) do not count, so version tags and similar
/// strings survive a round-trip untouched.
fn parse_number(raw: &str) -> Option<f64> {
    let first = *raw.as_bytes().first()?;
    if !(first.is_ascii_digit() || first == b'-' || first == b'+' || first == b'.') {
        return None;
    }
    raw.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn needs_quoting(s: &str) -> bool {
    s.contains(':')
        || s.contains('#')
        || s.starts_with('"')
        || s == "true"
        || s == "false"
        || parse_number(s).is_some()
}

/// Serialize a frontmatter mapping to header text, without the surrounding
/// `---` marker lines.
///
/// Strings that would be misread on the next parse (colons, hashes such as
/// hex colors, leading quotes, boolean or numeric look-alikes) are emitted
/// quoted so they parse back as the same string.
pub fn serialize(frontmatter: &Frontmatter) -> String {
    let mut lines = Vec::new();

    for (key, value) in frontmatter.iter() {
        match value {
            Value::Str(s) => {
                if needs_quoting(s) {
                    lines.push(format!("{key}: \"{s}\""));
                } else {
                    lines.push(format!("{key}: {s}"));
                }
            }
            Value::Bool(b) => lines.push(format!("{key}: {b}")),
            Value::Num(n) => lines.push(format!("{key}: {n}")),
            Value::Nested(entries) => {
                lines.push(format!("{key}:"));
                for (sub_key, sub_value) in entries {
                    lines.push(format!("  {sub_key}: {sub_value}"));
                }
            }
        }
    }

    lines.join("\n")
}

/// Apply an update set to a document and re-render it.
///
/// Idempotent: each update fully overwrites (or deletes) its field, so
/// applying the same set twice yields the same document.
pub fn apply(content: &str, updates: &UpdateSet) -> String {
    let (mut frontmatter, body) = parse(content);

    for (key, update) in &updates.updates {
        match update {
            FieldUpdate::Set(value) => frontmatter.insert(key, value.clone()),
            FieldUpdate::Remove => frontmatter.remove(key),
        }
    }

    format!("---\n{}\n---\n{}", serialize(&frontmatter), body)
}

/// A valid color token is `#` followed by exactly six hex digits.
pub fn is_valid_hex_color(color: &str) -> bool {
    let Some(hex) = color.strip_prefix('#') else {
        return false;
    };
    hex.len() == 6 && hex.bytes().all(|b| b.is_ascii_hexdigit())
}
