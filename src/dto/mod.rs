pub mod admin_dto;
pub mod auth_dto;
pub mod booking_dto;
pub mod calculation_dto;
