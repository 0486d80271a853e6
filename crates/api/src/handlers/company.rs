//! Handlers for the `/companies` resource.
//!
//! Every handler takes [`RequireDeveloper`], so anonymous callers and
//! non-developer accounts are rejected before the body is read. Ownership is
//! then checked against the stored `created_by` through
//! [`gamestore_core::company::authorize`]. Bodies are extracted as
//! `Result<AppJson<_>, AppError>` and unwrapped only after those checks, so a
//! malformed body from a caller without access still yields 403.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use gamestore_core::company::{self, Caller, CompanyAction};
use gamestore_core::error::CoreError;
use gamestore_db::models::company::{Company, CreateCompany, UpdateCompany};
use gamestore_db::repositories::CompanyRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::rbac::RequireDeveloper;
use crate::state::AppState;

/// POST /api/v1/companies
///
/// A developer creates their (single) company.
pub async fn create(
    State(state): State<AppState>,
    RequireDeveloper(caller): RequireDeveloper,
    body: Result<AppJson<CreateCompany>, AppError>,
) -> AppResult<(StatusCode, Json<Company>)> {
    company::authorize(Some(&caller), CompanyAction::Create, None)?;
    let AppJson(input) = body?;
    input.validate()?;

    let already_owns = CompanyRepo::exists_for_owner(&state.pool, caller.account_id).await?;
    company::ensure_first_company(already_owns)?;

    // A concurrent create surfaces as a uq_companies_created_by violation,
    // which the error layer reports as the same validation failure.
    let created = CompanyRepo::create(&state.pool, caller.account_id, &input).await?;

    tracing::info!(
        company_id = created.id,
        owner_id = caller.account_id,
        title = %created.title,
        "Company created"
    );
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/v1/companies/{title}
pub async fn get_by_title(
    State(state): State<AppState>,
    RequireDeveloper(caller): RequireDeveloper,
    Path(title): Path<String>,
) -> AppResult<Json<Company>> {
    let company = load_owned(&state, &caller, &title, CompanyAction::Read).await?;
    Ok(Json(company))
}

/// PUT /api/v1/companies/{title}
///
/// Partial update: omitted fields keep their stored value.
pub async fn update(
    State(state): State<AppState>,
    RequireDeveloper(caller): RequireDeveloper,
    Path(title): Path<String>,
    body: Result<AppJson<UpdateCompany>, AppError>,
) -> AppResult<Json<Company>> {
    let existing = load_owned(&state, &caller, &title, CompanyAction::Update).await?;
    let AppJson(input) = body?;
    input.validate()?;

    let updated = CompanyRepo::update(&state.pool, existing.id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Company",
            id: existing.id,
        }))?;

    tracing::info!(company_id = updated.id, owner_id = caller.account_id, "Company updated");
    Ok(Json(updated))
}

/// DELETE /api/v1/companies/{title}
pub async fn delete(
    State(state): State<AppState>,
    RequireDeveloper(caller): RequireDeveloper,
    Path(title): Path<String>,
) -> AppResult<StatusCode> {
    let existing = load_owned(&state, &caller, &title, CompanyAction::Delete).await?;

    if CompanyRepo::delete(&state.pool, existing.id).await? {
        tracing::info!(company_id = existing.id, owner_id = caller.account_id, "Company deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Company",
            id: existing.id,
        }))
    }
}

/// Look up a company by title and confirm `caller` owns it.
///
/// Unknown titles are rejected with the same 403 as foreign companies.
async fn load_owned(
    state: &AppState,
    caller: &Caller,
    title: &str,
    action: CompanyAction,
) -> AppResult<Company> {
    let company = CompanyRepo::find_by_title(&state.pool, title).await?;

    if let Err(err) = company::authorize(Some(caller), action, company.as_ref().map(|c| c.created_by)) {
        tracing::debug!(account_id = caller.account_id, title, ?action, "Company access denied");
        return Err(err.into());
    }

    // authorize() only passes when the company exists and is owned by caller.
    company.ok_or_else(|| AppError::InternalError("Authorized access to a missing company".into()))
}
