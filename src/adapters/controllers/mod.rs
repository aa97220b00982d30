pub mod file_controller;
pub mod health_controller;
pub mod page_controller;
