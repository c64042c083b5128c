//! Schema-only mirrors of the JSON bodies, for the generated OpenAPI document.

use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(Serialize, ToSchema)]
pub struct ErrorDoc { pub error: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoleDoc {
    pub id_role: i32,
    pub name: String,
    pub access_level: i32,
    pub allowed_actions: Vec<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewRoleDoc {
    pub id_role: Option<i32>,
    pub name: String,
    pub access_level: i32,
    pub allowed_actions: Vec<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoleDoc {
    pub id_role: i32,
    pub name: Option<String>,
    pub access_level: Option<i32>,
    pub allowed_actions: Option<Vec<String>>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoleKeyDoc { pub id_role: i32 }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDoc {
    pub cpf: String,
    pub full_name: String,
    pub email: String,
    pub accepted: bool,
    pub id_unit: i32,
    pub id_role: i32,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewUserDoc {
    pub cpf: String,
    pub full_name: String,
    pub email: String,
    pub accepted: Option<bool>,
    pub id_unit: i32,
    pub id_role: i32,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDoc {
    pub cpf: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub accepted: Option<bool>,
    pub id_unit: Option<i32>,
    pub id_role: Option<i32>,
}

#[derive(Serialize, ToSchema)]
pub struct UserKeyDoc { pub cpf: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UnitDoc { pub id_unit: i32, pub name: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewUnitDoc { pub id_unit: Option<i32>, pub name: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccessLogDoc {
    pub id: Uuid,
    pub cpf: String,
    /// RFC 3339 timestamp.
    pub created_at: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::roles::index,
        crate::routes::roles::get_by_id,
        crate::routes::roles::store,
        crate::routes::roles::update_role,
        crate::routes::roles::delete,
        crate::routes::roles::users_of_role,
        crate::routes::users::index,
        crate::routes::users::get_by_cpf,
        crate::routes::users::store,
        crate::routes::users::update_user,
        crate::routes::users::delete,
        crate::routes::access_logs::list,
        crate::routes::access_logs::record,
        crate::routes::units::index,
        crate::routes::units::get_by_id,
        crate::routes::units::store,
    ),
    components(
        schemas(
            HealthResponse,
            MessageDoc,
            ErrorDoc,
            RoleDoc,
            NewRoleDoc,
            UpdateRoleDoc,
            RoleKeyDoc,
            UserDoc,
            NewUserDoc,
            UpdateUserDoc,
            UserKeyDoc,
            UnitDoc,
            NewUnitDoc,
            AccessLogDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "roles"),
        (name = "users"),
        (name = "units")
    )
)]
pub struct ApiDoc;
