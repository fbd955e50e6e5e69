//! JSON REST API for the pessoas service.
//!
//! Exposes an axum [`Router`] over a [`PessoaService`] built from any
//! [`PessoaStore`] and [`PessoaCache`]. Transport concerns (binding, tracing
//! layers) are the caller's responsibility.
//!
//! | Method | Path | Success |
//! |--------|------|---------|
//! | `POST` | `/pessoas` | 201 + record |
//! | `GET`  | `/pessoas/{id}` | 200 + record |
//! | `GET`  | `/pessoas?t={term}` | 200 + list of records |
//! | `GET`  | `/contagem-pessoas` | 200 + integer |

pub mod contagem;
pub mod error;
pub mod pessoas;

use std::sync::Arc;

use axum::{Router, routing::get};
use pessoas_core::{cache::PessoaCache, service::PessoaService, store::PessoaStore};

pub use error::ApiError;

/// Build the API router for `service`.
pub fn api_router<S, C>(service: Arc<PessoaService<S, C>>) -> Router<()>
where
  S: PessoaStore + 'static,
  C: PessoaCache + 'static,
{
  Router::new()
    .route(
      "/pessoas",
      get(pessoas::search::<S, C>).post(pessoas::create::<S, C>),
    )
    .route("/pessoas/{id}", get(pessoas::get_one::<S, C>))
    .route("/contagem-pessoas", get(contagem::handler::<S, C>))
    .with_state(service)
}
