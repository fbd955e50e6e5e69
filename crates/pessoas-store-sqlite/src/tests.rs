//! Integration tests for `SqliteStore` against an in-memory database.

use chrono::NaiveDate;
use pessoas_core::{
  pessoa::Pessoa,
  store::{InsertOutcome, PessoaStore},
};
use uuid::Uuid;

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn pessoa(apelido: &str, nome: &str, stack: Option<&[&str]>) -> Pessoa {
  Pessoa {
    id:         Uuid::new_v4(),
    apelido:    apelido.into(),
    nome:       nome.into(),
    nascimento: NaiveDate::from_ymd_opt(2000, 10, 1).unwrap(),
    stack:      stack.map(|s| s.iter().map(|t| t.to_string()).collect()),
  }
}

// ─── Insert / get ────────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_and_get_round_trip() {
  let s = store().await;
  let p = pessoa("jose", "José Roberto", Some(&["C#", "Node"]));

  assert_eq!(s.insert(&p).await.unwrap(), InsertOutcome::Inserted);

  let fetched = s.get(p.id).await.unwrap().expect("row present");
  assert_eq!(fetched, p);
}

#[tokio::test]
async fn stack_null_and_empty_are_preserved() {
  let s = store().await;
  let absent = pessoa("ana", "Ana", None);
  let empty  = pessoa("bia", "Beatriz", Some(&[]));
  s.insert(&absent).await.unwrap();
  s.insert(&empty).await.unwrap();

  assert_eq!(s.get(absent.id).await.unwrap().unwrap().stack, None);
  assert_eq!(s.get(empty.id).await.unwrap().unwrap().stack, Some(vec![]));
}

#[tokio::test]
async fn stack_order_is_preserved() {
  let s = store().await;
  let p = pessoa("ze", "Zé", Some(&["Rust", "C", "Go", "Ada"]));
  s.insert(&p).await.unwrap();

  let stack = s.get(p.id).await.unwrap().unwrap().stack.unwrap();
  assert_eq!(stack, vec!["Rust", "C", "Go", "Ada"]);
}

#[tokio::test]
async fn get_missing_returns_none() {
  let s = store().await;
  assert!(s.get(Uuid::new_v4()).await.unwrap().is_none());
}

// ─── Uniqueness ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn duplicate_apelido_is_rejected_without_partial_write() {
  let s = store().await;
  let first  = pessoa("jose", "José Roberto", Some(&["C#"]));
  let second = pessoa("jose", "José Outro", Some(&["Python"]));

  assert_eq!(s.insert(&first).await.unwrap(), InsertOutcome::Inserted);
  assert_eq!(s.insert(&second).await.unwrap(), InsertOutcome::ApelidoTaken);

  assert_eq!(s.count().await.unwrap(), 1);
  assert!(s.get(second.id).await.unwrap().is_none());
  // The trigger did not index the rejected row either.
  assert!(s.search("Python").await.unwrap().is_empty());
}

#[tokio::test]
async fn duplicate_id_is_an_error_not_a_conflict() {
  let s = store().await;
  let first = pessoa("jose", "José", None);
  let mut clash = pessoa("maria", "Maria", None);
  clash.id = first.id;

  s.insert(&first).await.unwrap();
  assert!(s.insert(&clash).await.is_err());
}

// ─── Search ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn search_matches_apelido_nome_and_stack() {
  let s = store().await;
  let jose  = pessoa("jose", "José Roberto", Some(&["C#", "Node"]));
  let maria = pessoa("mariazinha", "Maria Silva", Some(&["Python"]));
  s.insert(&jose).await.unwrap();
  s.insert(&maria).await.unwrap();

  let by_nome = s.search("Roberto").await.unwrap();
  assert_eq!(by_nome.len(), 1);
  assert_eq!(by_nome[0].id, jose.id);

  let by_apelido = s.search("riazi").await.unwrap();
  assert_eq!(by_apelido.len(), 1);
  assert_eq!(by_apelido[0].id, maria.id);

  let by_stack = s.search("Node").await.unwrap();
  assert_eq!(by_stack.len(), 1);
  assert_eq!(by_stack[0], jose);

  assert!(s.search("Haskell").await.unwrap().is_empty());
}

#[tokio::test]
async fn search_is_case_sensitive() {
  let s = store().await;
  s.insert(&pessoa("jose", "José Roberto", Some(&["Node"]))).await.unwrap();

  assert_eq!(s.search("Node").await.unwrap().len(), 1);
  assert!(s.search("node").await.unwrap().is_empty());
}

#[tokio::test]
async fn search_with_short_terms_and_glob_characters() {
  let s = store().await;
  s.insert(&pessoa("jose", "José Roberto", Some(&["C#", "C*"]))).await.unwrap();
  s.insert(&pessoa("ana", "Ana", None)).await.unwrap();

  // Shorter than a trigram.
  assert_eq!(s.search("C#").await.unwrap().len(), 1);
  // Taken literally, not as a wildcard.
  assert_eq!(s.search("C*").await.unwrap().len(), 1);
  assert!(s.search("A*a").await.unwrap().is_empty());
}

#[tokio::test]
async fn empty_term_matches_everything() {
  let s = store().await;
  s.insert(&pessoa("jose", "José", None)).await.unwrap();
  s.insert(&pessoa("ana", "Ana", Some(&[]))).await.unwrap();

  assert_eq!(s.search("").await.unwrap().len(), 2);
}

// ─── Count ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn count_tracks_successful_inserts() {
  let s = store().await;
  assert_eq!(s.count().await.unwrap(), 0);

  for i in 0..5 {
    s.insert(&pessoa(&format!("p{i}"), "Pessoa", None)).await.unwrap();
  }
  s.insert(&pessoa("p0", "Repetida", None)).await.unwrap();

  assert_eq!(s.count().await.unwrap(), 5);
}

#[tokio::test]
async fn reopening_a_file_keeps_rows() {
  let dir  = std::env::temp_dir().join(format!("pessoas-{}", Uuid::new_v4()));
  std::fs::create_dir_all(&dir).unwrap();
  let path = dir.join("pessoas.db");
  let p    = pessoa("jose", "José", Some(&["Rust"]));

  {
    let s = SqliteStore::open(&path).await.unwrap();
    s.insert(&p).await.unwrap();
  }

  let s = SqliteStore::open(&path).await.unwrap();
  assert_eq!(s.get(p.id).await.unwrap(), Some(p));
  assert_eq!(s.search("Rust").await.unwrap().len(), 1);

  std::fs::remove_dir_all(&dir).ok();
}
