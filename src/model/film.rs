use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FilmDto {
    pub id: i32,
    pub title: String,
}

impl From<entity::film::Model> for FilmDto {
    fn from(film: entity::film::Model) -> Self {
        Self {
            id: film.id,
            title: film.title,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct FilmResponseDto {
    pub msg: String,
    pub film: FilmDto,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct FilmListResponseDto {
    pub msg: String,
    pub film: Vec<FilmDto>,
}
