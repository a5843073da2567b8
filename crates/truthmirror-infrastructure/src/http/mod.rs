mod auth;
mod client;
mod result_ext;
mod transcription;

pub use auth::StaticTokenProvider;
pub use client::{endpoints, ApiClient};
pub use result_ext::ResultExt;
pub use transcription::TranscriptionClient;
