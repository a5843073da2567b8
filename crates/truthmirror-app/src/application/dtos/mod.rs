mod journal_dto;
mod mood_dto;

pub use journal_dto::*;
pub use mood_dto::*;
