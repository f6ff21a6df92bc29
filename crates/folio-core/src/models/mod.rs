pub mod project;
pub mod service;
pub mod validation;

pub use project::{DEFAULT_PROJECT_IMAGE, Project, ProjectCategory};
pub use service::{DEFAULT_SERVICE_PRICE, Service, ServiceIcon};
pub use validation::ValidationError;
