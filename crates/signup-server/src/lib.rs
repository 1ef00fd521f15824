// File: src/lib.rs
// Purpose: Router and handlers for the registration form

use axum::{
    extract::{FromRequest, Path, Request, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use signup_form::render::{self, FIELD_VALIDATION_ROUTE};
use signup_form::{
    Field, FieldValue, FormView, Registration, RegistrationInput, RegistrationValidator,
    ValidationOutcome,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    validator: Arc<RegistrationValidator>,
}

impl AppState {
    pub fn new(validator: RegistrationValidator) -> Self {
        Self {
            validator: Arc::new(validator),
        }
    }
}

/// Candidate read from a JSON body when the request says so, otherwise from
/// a url-encoded form.
pub struct Submission(pub RegistrationInput);

#[axum::async_trait]
impl<S> FromRequest<S> for Submission
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map_or(false, |ct| ct.contains("application/json"));

        if is_json {
            let Json(input) = Json::<RegistrationInput>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            Ok(Self(input))
        } else {
            let Form(input) = Form::<RegistrationInput>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            Ok(Self(input))
        }
    }
}

pub fn app(validator: RegistrationValidator) -> Router {
    Router::new()
        .route("/", get(show_form).post(submit_form))
        .route(&format!("{}/:field", FIELD_VALIDATION_ROUTE), post(validate_field))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState::new(validator))
}

async fn show_form(State(state): State<AppState>) -> Html<String> {
    let markup = render::registration_page(&FormView::empty(), state.validator.schema());
    Html(markup.into_string())
}

async fn submit_form(
    State(state): State<AppState>,
    Submission(input): Submission,
) -> Response {
    let outcome = state.validator.validate(&input);

    match outcome {
        ValidationOutcome::Accepted(registration) => {
            submit(&registration);
            Html(render::accepted_page(&registration).into_string()).into_response()
        }
        ValidationOutcome::Rejected(failure) => {
            let fields: Vec<&str> = failure.iter().map(|(field, _)| field.key()).collect();
            debug!(%failure, ?fields, "showing errors");
            let view = FormView::with_failure(input, &failure);
            let markup = render::registration_page(&view, state.validator.schema());
            (StatusCode::UNPROCESSABLE_ENTITY, Html(markup.into_string())).into_response()
        }
    }
}

/// Hand-off point for accepted registrations; there is no backend, so the
/// record is only logged.
fn submit(registration: &Registration) {
    match serde_json::to_string(registration) {
        Ok(json) => info!(registration = %json, "registration accepted"),
        Err(e) => warn!(error = %e, ?registration, "registration accepted but not serializable"),
    }
}

async fn validate_field(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Submission(input): Submission,
) -> Response {
    let Some(field) = Field::from_key(&key) else {
        return (StatusCode::NOT_FOUND, format!("unknown field `{}`", key)).into_response();
    };

    let message = state.validator.validate_field(field, &input);
    let mut fragment = render::error_message(message.as_deref()).into_string();

    // Editing the password can fix or break the confirmation, so its slot is
    // refreshed too. A confirmation not typed yet stays blank.
    for dependent in state.validator.dependents(field) {
        let dependent_message = match input.value(dependent) {
            FieldValue::Text(text) if text.is_empty() => None,
            _ => state.validator.validate_field(dependent, &input),
        };
        let slot = render::error_slot_oob(dependent, dependent_message.as_deref());
        fragment.push_str(&slot.into_string());
    }

    Html(fragment).into_response()
}

async fn health() -> &'static str {
    "ok"
}
