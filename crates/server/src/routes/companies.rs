use axum::{extract::State, Json};
use models::company::{Company, NewCompany};

use crate::errors::JsonApiError;
use crate::extract::{CompanyId, JsonBody};
use crate::state::ServerState;

#[utoipa::path(
    get, path = "/company", tag = "company",
    responses(
        (status = 200, description = "All companies", body = [crate::openapi::CompanyDoc]),
        (status = 500, description = "Storage failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Company>>, JsonApiError> {
    Ok(Json(state.companies.list().await?))
}

#[utoipa::path(
    post, path = "/company", tag = "company",
    request_body = crate::openapi::NewCompanyDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::CompanyDoc),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Storage failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    JsonBody(body): JsonBody,
) -> Result<Json<Company>, JsonApiError> {
    let input = NewCompany::from_json(&body)?;
    Ok(Json(state.companies.create(input).await?))
}

#[utoipa::path(
    delete, path = "/company", tag = "company",
    responses(
        (status = 200, description = "All companies deleted; remaining list", body = [crate::openapi::CompanyDoc]),
        (status = 500, description = "Storage failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete_all(State(state): State<ServerState>) -> Result<Json<Vec<Company>>, JsonApiError> {
    state.companies.delete_all().await?;
    Ok(Json(state.companies.list().await?))
}

#[utoipa::path(
    get, path = "/company/{id}", tag = "company",
    params(("id" = i32, Path, description = "Company ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CompanyDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 422, description = "Malformed id", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    CompanyId(id): CompanyId,
) -> Result<Json<Company>, JsonApiError> {
    Ok(Json(state.companies.get(id).await?))
}

#[utoipa::path(
    put, path = "/company/{id}", tag = "company",
    params(("id" = i32, Path, description = "Company ID")),
    request_body = crate::openapi::NewCompanyDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::CompanyDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    CompanyId(id): CompanyId,
    JsonBody(body): JsonBody,
) -> Result<Json<Company>, JsonApiError> {
    let input = NewCompany::from_update_json(&body, id)?;
    Ok(Json(state.companies.update(id, input).await?))
}

#[utoipa::path(
    delete, path = "/company/{id}", tag = "company",
    params(("id" = i32, Path, description = "Company ID")),
    responses(
        (status = 200, description = "Deleted; body is the removed record", body = crate::openapi::CompanyDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    CompanyId(id): CompanyId,
) -> Result<Json<Company>, JsonApiError> {
    Ok(Json(state.companies.delete(id).await?))
}
