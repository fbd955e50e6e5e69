//! Handler for `GET /contagem-pessoas`.

use std::sync::Arc;

use axum::{Json, extract::State};
use pessoas_core::{cache::PessoaCache, service::PessoaService, store::PessoaStore};

use crate::error::ApiError;

/// `GET /contagem-pessoas` — the body is a bare JSON integer.
pub async fn handler<S, C>(
  State(service): State<Arc<PessoaService<S, C>>>,
) -> Result<Json<u64>, ApiError>
where
  S: PessoaStore,
  C: PessoaCache,
{
  Ok(Json(service.count().await?))
}
