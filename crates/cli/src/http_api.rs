use crate::corpus_source::CorpusProvider;
use crate::service;
use axum::{
    body::Body,
    extract::{rejection::QueryRejection, Query, State},
    http::{Response as HttpResponse, StatusCode},
    response::Response,
    routing::get,
    Router,
};
use bible_corpus::Corpus;
use bible_protocol::{serialize_json, ErrorEnvelope, HealthResponse};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub struct HttpState {
    corpus: CorpusProvider,
}

impl HttpState {
    pub fn new(corpus: CorpusProvider) -> Self {
        Self { corpus }
    }
}

type SharedState = Arc<HttpState>;
type HandlerResult = Result<Response, StatusCode>;

#[derive(Debug, Deserialize)]
struct QueryParams {
    #[serde(default)]
    query: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TodayParams {
    #[serde(default)]
    date: Option<String>,
}

pub fn router(state: Arc<HttpState>) -> Router {
    Router::new()
        .route("/api/search", get(search))
        .route("/api/today", get(today))
        .route("/api/meditate", get(meditate))
        .route("/api/verses", get(verses))
        .route("/api/perspectives", get(perspectives))
        .route("/api/health", get(health))
        .with_state(state)
}

async fn search(
    State(state): State<SharedState>,
    params: Result<Query<QueryParams>, QueryRejection>,
) -> HandlerResult {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return rejected_query(rejection),
    };
    let query = match service::require_query(params.query.as_deref()) {
        Ok(query) => query,
        Err(err) => return invalid_request(err),
    };
    let corpus = match load_corpus(&state) {
        Ok(corpus) => corpus,
        Err(response) => return response,
    };
    match service::search(&corpus, query) {
        Ok(payload) => build_response(StatusCode::OK, &payload),
        Err(err) => corpus_unavailable(err),
    }
}

async fn meditate(
    State(state): State<SharedState>,
    params: Result<Query<QueryParams>, QueryRejection>,
) -> HandlerResult {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return rejected_query(rejection),
    };
    let query = match service::require_query(params.query.as_deref()) {
        Ok(query) => query,
        Err(err) => return invalid_request(err),
    };
    let corpus = match load_corpus(&state) {
        Ok(corpus) => corpus,
        Err(response) => return response,
    };
    build_response(StatusCode::OK, &service::meditate(&corpus, query))
}

async fn today(
    State(state): State<SharedState>,
    params: Result<Query<TodayParams>, QueryRejection>,
) -> HandlerResult {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return rejected_query(rejection),
    };
    let date = match params.date.as_deref() {
        Some(raw) => match service::parse_date(raw) {
            Ok(date) => date,
            Err(err) => return invalid_request(err),
        },
        None => service::local_today(),
    };
    let corpus = match load_corpus(&state) {
        Ok(corpus) => corpus,
        Err(response) => return response,
    };
    match service::today(&corpus, date) {
        Ok(payload) => build_response(StatusCode::OK, &payload),
        Err(err) => corpus_unavailable(err),
    }
}

async fn verses(State(state): State<SharedState>) -> HandlerResult {
    let corpus = match load_corpus(&state) {
        Ok(corpus) => corpus,
        Err(response) => return response,
    };
    build_response(StatusCode::OK, &service::verses(&corpus))
}

async fn perspectives(State(state): State<SharedState>) -> HandlerResult {
    let corpus = match load_corpus(&state) {
        Ok(corpus) => corpus,
        Err(response) => return response,
    };
    build_response(StatusCode::OK, &service::perspectives(&corpus))
}

async fn health() -> HandlerResult {
    build_response(StatusCode::OK, &HealthResponse::ok())
}

fn load_corpus(state: &HttpState) -> Result<Arc<Corpus>, HandlerResult> {
    state.corpus.get().map_err(corpus_unavailable)
}

fn invalid_request(err: anyhow::Error) -> HandlerResult {
    let envelope = error_envelope("invalid_request", format!("{err:#}"));
    build_response(StatusCode::UNPROCESSABLE_ENTITY, &envelope)
}

fn rejected_query(rejection: QueryRejection) -> HandlerResult {
    invalid_request(anyhow::anyhow!(rejection.body_text()))
}

fn corpus_unavailable(err: anyhow::Error) -> HandlerResult {
    log::error!("Corpus unavailable: {err:#}");
    let envelope = error_envelope("corpus_unavailable", format!("{err:#}"));
    build_response(StatusCode::INTERNAL_SERVER_ERROR, &envelope)
}

pub(crate) fn error_envelope(code: &str, message: String) -> ErrorEnvelope {
    let hint = match code {
        "invalid_request" => Some(
            "Pass a non-empty ?query= (and ?date=YYYY-MM-DD for /api/today).".to_string(),
        ),
        "corpus_unavailable" => Some(
            "Check the corpus file passed via --data or BIBLE_DATA_PATH, then retry.".to_string(),
        ),
        _ => None,
    };
    ErrorEnvelope {
        code: code.to_string(),
        message,
        hint,
    }
}

pub(crate) fn build_response<T: Serialize>(status: StatusCode, payload: &T) -> HandlerResult {
    let bytes = serialize_json(payload)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .into_bytes();

    HttpResponse::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(bytes))
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}
