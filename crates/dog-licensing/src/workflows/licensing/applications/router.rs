use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{ApplicationDraft, ApplicationId, SpayNeuterStatus};
use super::fees::{display_usd, FeeSchedule};
use super::store::{ApplicationLedger, DraftRecovery, StateStore};
use super::wizard::{submit_draft, SubmitError};

/// Shared state behind the intake endpoints.
pub struct IntakeContext<S> {
    pub ledger: ApplicationLedger<S>,
    pub fees: FeeSchedule,
}

/// Router builder exposing the portal, draft autosave, fee quote, intake,
/// and tracking endpoints.
pub fn license_router<S>(ledger: ApplicationLedger<S>, fees: FeeSchedule) -> Router
where
    S: StateStore + 'static,
{
    Router::new()
        .route("/api/v1/licenses/portal", get(portal_handler::<S>))
        .route("/api/v1/licenses/fee", get(fee_handler::<S>))
        .route(
            "/api/v1/licenses/draft",
            get(draft_handler::<S>).put(save_draft_handler::<S>),
        )
        .route("/api/v1/licenses/applications", post(submit_handler::<S>))
        .route(
            "/api/v1/licenses/applications/:application_id",
            get(status_handler::<S>),
        )
        .with_state(Arc::new(IntakeContext { ledger, fees }))
}

/// Stateless landing content: program facts plus the two entry actions.
pub(crate) async fn portal_handler<S>(State(context): State<Arc<IntakeContext<S>>>) -> Response
where
    S: StateStore + 'static,
{
    let payload = json!({
        "program": "Franklin County Dog License",
        "jurisdiction": "Franklin County, Pennsylvania",
        "notes": [
            "All dogs over 3 months old must be licensed",
            "Rabies vaccination certificate may be required for verification",
            "Licenses must be renewed annually",
        ],
        "fees": {
            "spayedNeutered": display_usd(context.fees.altered_fee),
            "standard": display_usd(context.fees.standard_fee),
        },
        "actions": [
            { "name": "new-application", "method": "POST", "path": "/api/v1/licenses/applications" },
            { "name": "track-application", "method": "GET", "path": "/api/v1/licenses/applications/:applicationId" },
        ],
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

#[derive(Debug, Deserialize)]
pub(crate) struct FeeQuery {
    #[serde(rename = "spayedNeutered")]
    spayed_neutered: Option<SpayNeuterStatus>,
}

pub(crate) async fn fee_handler<S>(
    State(context): State<Arc<IntakeContext<S>>>,
    Query(query): Query<FeeQuery>,
) -> Response
where
    S: StateStore + 'static,
{
    let fee = context.fees.quote(query.spayed_neutered);
    let payload = json!({
        "feeDue": fee,
        "display": display_usd(fee),
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn draft_handler<S>(State(context): State<Arc<IntakeContext<S>>>) -> Response
where
    S: StateStore + 'static,
{
    match context.ledger.recover_draft() {
        DraftRecovery::Restored(draft) => (StatusCode::OK, axum::Json(draft)).into_response(),
        DraftRecovery::Absent | DraftRecovery::Unreadable => {
            let payload = json!({ "error": "no saved draft" });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn save_draft_handler<S>(
    State(context): State<Arc<IntakeContext<S>>>,
    axum::Json(draft): axum::Json<ApplicationDraft>,
) -> Response
where
    S: StateStore + 'static,
{
    match context.ledger.save_draft(&draft) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn submit_handler<S>(
    State(context): State<Arc<IntakeContext<S>>>,
    axum::Json(draft): axum::Json<ApplicationDraft>,
) -> Response
where
    S: StateStore + 'static,
{
    match submit_draft(&context.ledger, draft) {
        Ok(application) => {
            let receipt = application.receipt(&context.fees);
            (StatusCode::CREATED, axum::Json(receipt)).into_response()
        }
        Err(SubmitError::Validation(failure)) => {
            let payload = json!({
                "error": failure.to_string(),
                "issues": failure.issues,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(SubmitError::Storage(err)) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn status_handler<S>(
    State(context): State<Arc<IntakeContext<S>>>,
    Path(application_id): Path<String>,
) -> Response
where
    S: StateStore + 'static,
{
    let id = ApplicationId(application_id);
    match context.ledger.find(&id) {
        Ok(Some(application)) => {
            (StatusCode::OK, axum::Json(application.status_view())).into_response()
        }
        Ok(None) => {
            let payload = json!({
                "error": "application not found",
                "applicationId": id.0,
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(err) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
