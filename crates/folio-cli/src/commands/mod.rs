pub mod contact;
pub mod dashboard;
pub mod maintenance;
pub mod project;
pub mod service;
pub mod session;
pub mod status;
pub mod utils;
