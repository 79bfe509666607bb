use sqlx::PgPool;

use crate::models::delivery_term::DELIVERY_TERMS;
use crate::models::{CargoType, ContainerType, DeliveryTerm, Port};
use crate::repositories::cargo_type_repository::CargoTypeRepository;
use crate::repositories::container_type_repository::ContainerTypeRepository;
use crate::repositories::port_repository::PortRepository;
use crate::utils::errors::AppError;

/// Datos de referencia de sólo lectura para el buscador
pub struct ReferenceController {
    ports: PortRepository,
    container_types: ContainerTypeRepository,
    cargo_types: CargoTypeRepository,
}

impl ReferenceController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            ports: PortRepository::new(pool.clone()),
            container_types: ContainerTypeRepository::new(pool.clone()),
            cargo_types: CargoTypeRepository::new(pool),
        }
    }

    pub async fn ports(&self) -> Result<Vec<Port>, AppError> {
        self.ports.list_all().await
    }

    pub async fn container_types(&self) -> Result<Vec<ContainerType>, AppError> {
        self.container_types.list_all().await
    }

    pub async fn cargo_types(&self) -> Result<Vec<CargoType>, AppError> {
        self.cargo_types.list_all().await
    }

    pub fn delivery_terms() -> &'static [DeliveryTerm] {
        DELIVERY_TERMS
    }
}
