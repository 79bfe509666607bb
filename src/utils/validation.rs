//! Utilidades de validación
//!
//! Validadores personalizados usados por los `#[derive(Validate)]` de los
//! modelos y DTOs.

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

use crate::models::delivery_term::is_known_incoterm;
use crate::models::port::TransportType;

lazy_static! {
    /// Códigos de puerto: 3 a 5 letras mayúsculas o dígitos (LED, SHA, DLP...)
    pub static ref PORT_CODE_RE: Regex = Regex::new(r"^[A-Z0-9]{3,5}$").unwrap();
}

/// Validar que un string no esté vacío
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}

/// Validar el conjunto de modos de transporte de un puerto
pub fn validate_transport_types(values: &[String]) -> Result<(), ValidationError> {
    if values.is_empty() {
        return Err(ValidationError::new("transport_types_empty"));
    }
    if values.iter().any(|v| v.parse::<TransportType>().is_err()) {
        let mut error = ValidationError::new("transport_type");
        error.add_param("allowed".into(), &"sea, rail, air");
        return Err(error);
    }
    Ok(())
}

/// Validar un código Incoterm contra la lista estática
pub fn validate_incoterm(value: &str) -> Result<(), ValidationError> {
    if !is_known_incoterm(value) {
        let mut error = ValidationError::new("incoterm");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar formato de teléfono (básico)
pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    let digits = value.chars().filter(|c| c.is_ascii_digit()).count();
    if !(7..=15).contains(&digits) {
        let mut error = ValidationError::new("phone");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}
