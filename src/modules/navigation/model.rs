use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PageGuardResponse {
    pub path: String,
    pub allowed: bool,
}
