//! The person record and its creation input.
//!
//! The serde field names are the external JSON contract: the same shape is
//! used for HTTP bodies and for cached values.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result};

/// Maximum length of [`Pessoa::apelido`], in code points.
pub const APELIDO_MAX_LEN: usize = 32;

/// Maximum length of [`Pessoa::nome`], in code points.
pub const NOME_MAX_LEN: usize = 100;

/// A stored person record. Never updated once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pessoa {
  /// Server-assigned at creation.
  pub id:         Uuid,
  /// Nickname; unique across all records.
  pub apelido:    String,
  pub nome:       String,
  pub nascimento: NaiveDate,
  /// `None` serialises as `null` and is distinct from an empty list.
  pub stack:      Option<Vec<String>>,
}

impl Pessoa {
  /// Cache key under which this record is stored.
  pub fn cache_key(&self) -> String { cache_key(self.id) }
}

/// Cache key for the record with the given `id`: `pessoas:{id}`.
pub fn cache_key(id: Uuid) -> String { format!("pessoas:{}", id.hyphenated()) }

/// Input to [`crate::service::PessoaService::create`].
/// The `id` is always generated server-side; it is not accepted from callers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewPessoa {
  pub apelido:    String,
  pub nome:       String,
  pub nascimento: NaiveDate,
  #[serde(default)]
  pub stack:      Option<Vec<String>>,
}

impl NewPessoa {
  /// Check field lengths. Type and date validity are already guaranteed by
  /// the field types.
  pub fn validate(&self) -> Result<()> {
    check_len("apelido", &self.apelido, APELIDO_MAX_LEN)?;
    check_len("nome", &self.nome, NOME_MAX_LEN)?;
    Ok(())
  }

  /// Attach an identifier, producing the record to be persisted.
  pub fn into_pessoa(self, id: Uuid) -> Pessoa {
    Pessoa {
      id,
      apelido: self.apelido,
      nome: self.nome,
      nascimento: self.nascimento,
      stack: self.stack,
    }
  }
}

fn check_len(field: &'static str, value: &str, max: usize) -> Result<()> {
  let len = value.chars().count();
  if len > max {
    return Err(Error::Validation {
      field,
      reason: format!("length {len} exceeds maximum of {max}"),
    });
  }
  Ok(())
}
