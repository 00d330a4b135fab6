mod error;
mod show;

pub use error::ErrorDiagnostic;
pub use show::Show;
