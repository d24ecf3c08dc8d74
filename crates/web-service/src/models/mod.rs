pub mod err;
pub mod json;
pub mod projects;
