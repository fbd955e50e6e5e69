//! Encoding and decoding helpers between [`Pessoa`] and the plain-text
//! representations stored in SQLite columns.
//!
//! UUIDs are stored as hyphenated lowercase strings, dates as `YYYY-MM-DD`,
//! and `stack` as a compact JSON array (NULL when absent).

use chrono::NaiveDate;
use pessoas_core::pessoa::Pessoa;
use uuid::Uuid;

use crate::Result;

const DATE_FORMAT: &str = "%Y-%m-%d";

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── NaiveDate ────────────────────────────────────────────────────────────────

pub fn encode_date(d: NaiveDate) -> String { d.format(DATE_FORMAT).to_string() }

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  Ok(NaiveDate::parse_from_str(s, DATE_FORMAT)?)
}

// ─── Stack ────────────────────────────────────────────────────────────────────

/// `None` maps to SQL NULL so that "absent" and "empty" stay distinct.
pub fn encode_stack(stack: Option<&[String]>) -> Result<Option<String>> {
  stack.map(serde_json::to_string).transpose().map_err(Into::into)
}

pub fn decode_stack(s: Option<&str>) -> Result<Option<Vec<String>>> {
  s.map(serde_json::from_str).transpose().map_err(Into::into)
}

// ─── Search ───────────────────────────────────────────────────────────────────

/// A GLOB pattern matching any text that contains `term` literally.
pub fn contains_glob(term: &str) -> String {
  let mut pattern = String::with_capacity(term.len() + 2);
  pattern.push('*');
  for c in term.chars() {
    match c {
      '*' | '?' | '[' => {
        pattern.push('[');
        pattern.push(c);
        pattern.push(']');
      }
      _ => pattern.push(c),
    }
  }
  pattern.push('*');
  pattern
}

// ─── Raw row ──────────────────────────────────────────────────────────────────

/// Column order used by every `SELECT` that produces a [`RawPessoa`].
pub const PESSOA_COLUMNS: &str = "p.id, p.apelido, p.nome, p.nascimento, p.stack";

/// A `pessoas` row exactly as read from SQLite.
pub struct RawPessoa {
  pub id:         String,
  pub apelido:    String,
  pub nome:       String,
  pub nascimento: String,
  pub stack:      Option<String>,
}

impl RawPessoa {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:         row.get(0)?,
      apelido:    row.get(1)?,
      nome:       row.get(2)?,
      nascimento: row.get(3)?,
      stack:      row.get(4)?,
    })
  }

  pub fn into_pessoa(self) -> Result<Pessoa> {
    Ok(Pessoa {
      id:         decode_uuid(&self.id)?,
      apelido:    self.apelido,
      nome:       self.nome,
      nascimento: decode_date(&self.nascimento)?,
      stack:      decode_stack(self.stack.as_deref())?,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn glob_metacharacters_are_escaped() {
    assert_eq!(contains_glob("Node"), "*Node*");
    assert_eq!(contains_glob("C*"), "*C[*]*");
    assert_eq!(contains_glob("a?[b"), "*a[?][[]b*");
    assert_eq!(contains_glob(""), "**");
  }

  #[test]
  fn stack_absent_and_empty_are_distinct() {
    assert_eq!(encode_stack(None).unwrap(), None);
    assert_eq!(encode_stack(Some(&[] as &[String])).unwrap().as_deref(), Some("[]"));
    assert_eq!(decode_stack(None).unwrap(), None);
    assert_eq!(decode_stack(Some("[]")).unwrap(), Some(vec![]));
  }

  #[test]
  fn stack_entries_with_commas_survive() {
    let stack = vec!["a,b".to_string(), "{c}".to_string()];
    let encoded = encode_stack(Some(&stack)).unwrap();
    assert_eq!(decode_stack(encoded.as_deref()).unwrap(), Some(stack));
  }
}
