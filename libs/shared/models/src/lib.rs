pub mod domain;
pub mod error;
pub mod tenant;

pub use domain::*;
pub use error::AppError;
pub use tenant::TenantId;
