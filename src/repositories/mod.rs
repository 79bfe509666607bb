pub mod booking_repository;
pub mod calculation_click_repository;
pub mod cargo_type_repository;
pub mod container_type_repository;
pub mod port_repository;
pub mod route_repository;
pub mod user_repository;
pub mod webhook_repository;
