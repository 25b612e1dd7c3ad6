use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Create-input representation.
#[derive(ToSchema)]
pub struct NewCompanyDoc {
    pub name: String,
    pub location: String,
    pub employee_number: i64,
}

/// Full representation.
#[derive(ToSchema)]
pub struct CompanyDoc {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub employee_number: i64,
}

#[derive(ToSchema)]
pub struct FieldErrorDoc {
    pub field: String,
    pub message: String,
    /// One of `missing`, `type_error`, `invalid`.
    pub kind: String,
}

#[derive(ToSchema)]
pub struct ErrorDoc {
    pub error: String,
    pub message: Option<String>,
    pub fields: Option<Vec<FieldErrorDoc>>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::companies::list,
        crate::routes::companies::create,
        crate::routes::companies::delete_all,
        crate::routes::companies::get,
        crate::routes::companies::update,
        crate::routes::companies::delete,
    ),
    components(
        schemas(
            HealthResponse,
            NewCompanyDoc,
            CompanyDoc,
            FieldErrorDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "company")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_company_route() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;
        assert!(paths.contains_key("/health"));
        assert!(paths.contains_key("/company"));
        assert!(paths.contains_key("/company/{id}"));
        assert!(doc.components.as_ref().is_some_and(|c| c.schemas.contains_key("CompanyDoc")));
    }
}
