use database::Organization;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Deserialize, Debug, ToSchema, Validate)]
pub struct OrganizationCreate {
    #[schema(example = "VNR Solutions Pvt Ltd")]
    #[validate(length(min = 1, max = 256))]
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct OrganizationInfo {
    pub id: i32,
    pub name: String,
}

impl From<Organization> for OrganizationInfo {
    fn from(o: Organization) -> Self {
        Self { id: o.id, name: o.name }
    }
}
