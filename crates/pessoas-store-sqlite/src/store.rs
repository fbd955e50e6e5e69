//! [`SqliteStore`] — the SQLite implementation of [`PessoaStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;
use tracing::debug;
use uuid::Uuid;

use pessoas_core::{
  pessoa::Pessoa,
  store::{InsertOutcome, PessoaStore},
};

use crate::{
  Error, Result,
  encode::{
    PESSOA_COLUMNS, RawPessoa, contains_glob, encode_date, encode_stack,
    encode_uuid,
  },
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A record store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── PessoaStore impl ────────────────────────────────────────────────────────

impl PessoaStore for SqliteStore {
  type Error = Error;

  async fn insert(&self, pessoa: &Pessoa) -> Result<InsertOutcome> {
    let id_str         = encode_uuid(pessoa.id);
    let apelido        = pessoa.apelido.clone();
    let nome           = pessoa.nome.clone();
    let nascimento_str = encode_date(pessoa.nascimento);
    let stack_str      = encode_stack(pessoa.stack.as_deref())?;

    let outcome = self
      .conn
      .call(move |conn| {
        let res = conn.execute(
          "INSERT INTO pessoas (id, apelido, nome, nascimento, stack)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![id_str, apelido, nome, nascimento_str, stack_str],
        );
        match res {
          Ok(_) => Ok(InsertOutcome::Inserted),
          // Only the apelido constraint is UNIQUE; a primary-key clash
          // reports SQLITE_CONSTRAINT_PRIMARYKEY and stays an error.
          Err(rusqlite::Error::SqliteFailure(e, _))
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
          {
            Ok(InsertOutcome::ApelidoTaken)
          }
          Err(e) => Err(e.into()),
        }
      })
      .await?;

    if outcome == InsertOutcome::ApelidoTaken {
      debug!(apelido = %pessoa.apelido, "insert rejected by unique constraint");
    }
    Ok(outcome)
  }

  async fn get(&self, id: Uuid) -> Result<Option<Pessoa>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawPessoa> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {PESSOA_COLUMNS} FROM pessoas p WHERE p.id = ?1"),
              rusqlite::params![id_str],
              RawPessoa::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawPessoa::into_pessoa).transpose()
  }

  async fn search(&self, term: &str) -> Result<Vec<Pessoa>> {
    // GLOB lets the trigram index narrow the candidates; instr() keeps the
    // match an exact case-sensitive substring test.
    let pattern = contains_glob(term);
    let term    = term.to_owned();

    let raws: Vec<RawPessoa> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {PESSOA_COLUMNS}
           FROM pessoas_busca b
           JOIN pessoas p ON p.rowid = b.rowid
           WHERE b.busca GLOB ?1
             AND instr(b.busca, ?2) > 0"
        ))?;
        let rows = stmt
          .query_map(rusqlite::params![pattern, term], RawPessoa::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawPessoa::into_pessoa).collect()
  }

  async fn count(&self) -> Result<u64> {
    let count: i64 = self
      .conn
      .call(|conn| {
        Ok(conn.query_row("SELECT COUNT(*) FROM pessoas", [], |r| r.get(0))?)
      })
      .await?;
    Ok(count.try_into().unwrap_or_default())
  }
}
