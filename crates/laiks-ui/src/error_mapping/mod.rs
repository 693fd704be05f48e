//! Maps weather crate errors to laiks_core::AppError for consistent user-facing messages.

mod weather;

pub use weather::IntoAppError;
