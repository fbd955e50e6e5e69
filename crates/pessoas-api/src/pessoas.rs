//! Handlers for `/pessoas` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/pessoas` | Body: [`NewPessoa`]; 201 + `Location`, 400, or 409 |
//! | `GET`  | `/pessoas/:id` | 404 if unknown or not a UUID |
//! | `GET`  | `/pessoas?t=<term>` | `t` required; substring search |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State, rejection::{JsonRejection, QueryRejection}},
  http::{StatusCode, header},
  response::IntoResponse,
};
use pessoas_core::{
  cache::PessoaCache,
  pessoa::{NewPessoa, Pessoa},
  service::PessoaService,
  store::PessoaStore,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::ApiError;

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /pessoas` — returns 201, a `Location` header and the stored record.
pub async fn create<S, C>(
  State(service): State<Arc<PessoaService<S, C>>>,
  body: Result<Json<NewPessoa>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: PessoaStore,
  C: PessoaCache,
{
  let Json(input) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
  let pessoa = service.create(input).await?;
  let location = format!("/pessoas/{}", pessoa.id);
  Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(pessoa)))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /pessoas/:id`
pub async fn get_one<S, C>(
  State(service): State<Arc<PessoaService<S, C>>>,
  Path(id): Path<String>,
) -> Result<Json<Pessoa>, ApiError>
where
  S: PessoaStore,
  C: PessoaCache,
{
  // No record can have a malformed id.
  let id = Uuid::parse_str(&id).map_err(|_| ApiError::pessoa_not_found())?;
  Ok(Json(service.get(id).await?))
}

// ─── Search ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SearchParams {
  /// Search term, matched as a case-sensitive substring.
  pub t: Option<String>,
}

/// `GET /pessoas?t=<term>`
pub async fn search<S, C>(
  State(service): State<Arc<PessoaService<S, C>>>,
  params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<Pessoa>>, ApiError>
where
  S: PessoaStore,
  C: PessoaCache,
{
  let Query(params) = params.map_err(|e| ApiError::BadRequest(e.body_text()))?;
  let term = params
    .t
    .ok_or_else(|| ApiError::BadRequest("query parameter `t` is required".into()))?;
  Ok(Json(service.search(&term).await?))
}
