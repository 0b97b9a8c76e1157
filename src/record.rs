//! Credential records and their one-line text encoding.
//!
//! A record is stored as `email:password` optionally followed by `|note`.
//! Decoding splits on the first `:` and then on the first `|`, so a note may
//! itself contain either character. Nothing is escaped.

use std::fmt;

/// One saved account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Full address, the key of the record.
    pub email: String,
    /// Plaintext password used to log in.
    pub password: String,
    /// Free-text annotation.
    pub note: Option<String>,
}

impl Record {
    /// Create a record in the shape [`Record::decode`] gives back.
    ///
    /// Fields are trimmed and line breaks in the note become spaces; a blank
    /// note is stored as no note.
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        note: Option<impl Into<String>>,
    ) -> Self {
        let note = note
            .map(|n| flatten(&n.into()).trim().to_string())
            .filter(|n| !n.is_empty());
        Self {
            email: email.into().trim().to_string(),
            password: password.into().trim().to_string(),
            note,
        }
    }

    /// Encode as a single line without the trailing newline.
    ///
    /// Line breaks inside the note become spaces so the record stays on one line.
    pub fn encode(&self) -> String {
        match &self.note {
            Some(note) => format!("{}:{}|{}", self.email, self.password, flatten(note)),
            None => format!("{}:{}", self.email, self.password),
        }
    }

    /// Decode a stored line.
    ///
    /// Never fails: a line without `:` yields an empty password, a line
    /// without `|` yields no note. Fields are trimmed.
    pub fn decode(line: &str) -> Self {
        let line = line.trim_end_matches(['\n', '\r']);
        let Some((email, rest)) = line.split_once(':') else {
            return Self {
                email: line.trim().to_string(),
                password: String::new(),
                note: None,
            };
        };
        let (password, note) = match rest.split_once('|') {
            Some((password, note)) => (password, Some(note.trim())),
            None => (rest, None),
        };
        Self {
            email: email.trim().to_string(),
            password: password.trim().to_string(),
            note: note.filter(|n| !n.is_empty()).map(str::to_string),
        }
    }

    /// Note text, or `""` when there is none.
    pub fn note_or_empty(&self) -> &str {
        self.note.as_deref().unwrap_or("")
    }
}

fn flatten(text: &str) -> String {
    text.chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect()
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_with_note() {
        let record = Record::new("a@x.com", "Sec!ret12345678900", Some("test"));
        let line = record.encode();
        assert_eq!(line, "a@x.com:Sec!ret12345678900|test");
        assert_eq!(Record::decode(&line), record);
    }

    #[test]
    fn round_trip_without_note() {
        let record = Record::new("a@x.com", "pw", None::<String>);
        let line = record.encode();
        assert_eq!(line, "a@x.com:pw");

        let decoded = Record::decode(&line);
        assert_eq!(decoded.email, "a@x.com");
        assert_eq!(decoded.password, "pw");
        assert_eq!(decoded.note_or_empty(), "");
    }

    #[test]
    fn blank_note_is_dropped() {
        let record = Record::new("a@x.com", "pw", Some("   "));
        assert_eq!(record.note, None);
        assert_eq!(record.encode(), "a@x.com:pw");
    }

    #[test]
    fn decode_splits_on_first_separators_only() {
        let decoded = Record::decode("a@x.com:p@ss|note: with | pipes\n");
        assert_eq!(decoded.email, "a@x.com");
        assert_eq!(decoded.password, "p@ss");
        assert_eq!(decoded.note.as_deref(), Some("note: with | pipes"));
    }

    #[test]
    fn decode_is_best_effort_on_malformed_lines() {
        let no_colon = Record::decode("just-an-address@x.com");
        assert_eq!(no_colon.email, "just-an-address@x.com");
        assert_eq!(no_colon.password, "");
        assert_eq!(no_colon.note, None);

        let empty_note = Record::decode("a@x.com:pw|");
        assert_eq!(empty_note.password, "pw");
        assert_eq!(empty_note.note, None);
    }

    #[test]
    fn encode_keeps_note_on_one_line() {
        let record = Record::new("a@x.com", "pw", Some("line one\nline two\r"));
        assert_eq!(record.encode(), "a@x.com:pw|line one line two");
        assert_eq!(Record::decode(&record.encode()), record);

        let literal = Record {
            email: "a@x.com".into(),
            password: "pw".into(),
            note: Some("first\nsecond".into()),
        };
        assert_eq!(literal.encode(), "a@x.com:pw|first second");
        assert!(!literal.to_string().contains('\n'));
    }

    #[test]
    fn padded_note_survives_round_trip() {
        let record = Record::new(" a@x.com ", "pw ", Some("  padded note  "));
        assert_eq!(record.email, "a@x.com");
        assert_eq!(record.note.as_deref(), Some("padded note"));
        assert_eq!(Record::decode(&record.encode()), record);
    }
}
