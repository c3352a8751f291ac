use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A user as returned by the API.
///
/// There is no password field on this type, so a user's password can
/// never be serialized into a response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub is_active: bool,
}

impl From<entity::user::Model> for UserDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            name: user.name,
            last_name: user.last_name,
            email: user.email,
            is_active: user.is_active,
        }
    }
}

/// Request body for creating a user; every field is required
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct NewUserDto {
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UserResponseDto {
    pub msg: String,
    pub user: UserDto,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UserListResponseDto {
    pub msg: String,
    pub user: Vec<UserDto>,
}
