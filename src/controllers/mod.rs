pub mod admin_controller;
pub mod auth_controller;
pub mod booking_controller;
pub mod calculation_controller;
pub mod reference_controller;
