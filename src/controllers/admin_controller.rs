//! Panel de administración
//!
//! CRUD de puertos, tipos de contenedor y rutas, configuración del webhook
//! de cotizaciones y listado de reservas. El último en escribir gana y los
//! borrados son definitivos.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::admin_dto::WebhookSettingsResponse;
use crate::models::{
    Booking, ContainerType, ContainerTypeRequest, Port, PortRequest, ShippingRoute, ShippingRouteRequest,
};
use crate::repositories::booking_repository::BookingRepository;
use crate::repositories::container_type_repository::ContainerTypeRepository;
use crate::repositories::port_repository::PortRepository;
use crate::repositories::route_repository::RouteRepository;
use crate::repositories::webhook_repository::WebhookRepository;
use crate::utils::errors::AppError;

pub struct AdminController {
    ports: PortRepository,
    container_types: ContainerTypeRepository,
    routes: RouteRepository,
    webhooks: WebhookRepository,
    bookings: BookingRepository,
}

impl AdminController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            ports: PortRepository::new(pool.clone()),
            container_types: ContainerTypeRepository::new(pool.clone()),
            routes: RouteRepository::new(pool.clone()),
            webhooks: WebhookRepository::new(pool.clone()),
            bookings: BookingRepository::new(pool),
        }
    }

    // Puertos

    pub async fn list_ports(&self) -> Result<Vec<Port>, AppError> {
        self.ports.list_all().await
    }

    pub async fn create_port(&self, request: PortRequest) -> Result<Port, AppError> {
        let id = request.id.unwrap_or_else(Uuid::new_v4);
        let port = self.ports.create(&request.into_port(id)).await?;
        tracing::info!("🛳️ Puerto creado: {} ({})", port.code, port.id);
        Ok(port)
    }

    pub async fn replace_port(&self, id: Uuid, request: PortRequest) -> Result<Port, AppError> {
        self.ports.replace(&request.into_port(id)).await
    }

    pub async fn delete_port(&self, id: Uuid) -> Result<(), AppError> {
        self.ports.delete(id).await?;
        tracing::info!("🗑️ Puerto eliminado: {}", id);
        Ok(())
    }

    // Tipos de contenedor

    pub async fn list_container_types(&self) -> Result<Vec<ContainerType>, AppError> {
        self.container_types.list_all().await
    }

    pub async fn create_container_type(&self, request: ContainerTypeRequest) -> Result<ContainerType, AppError> {
        let id = request.id.unwrap_or_else(Uuid::new_v4);
        let container = self.container_types.create(&request.into_container_type(id)).await?;
        tracing::info!("📦 Tipo de contenedor creado: {} ({})", container.name, container.id);
        Ok(container)
    }

    pub async fn replace_container_type(
        &self,
        id: Uuid,
        request: ContainerTypeRequest,
    ) -> Result<ContainerType, AppError> {
        self.container_types.replace(&request.into_container_type(id)).await
    }

    pub async fn delete_container_type(&self, id: Uuid) -> Result<(), AppError> {
        self.container_types.delete(id).await?;
        tracing::info!("🗑️ Tipo de contenedor eliminado: {}", id);
        Ok(())
    }

    // Rutas

    pub async fn list_routes(&self) -> Result<Vec<ShippingRoute>, AppError> {
        self.routes.list_all().await
    }

    pub async fn create_route(&self, request: ShippingRouteRequest) -> Result<ShippingRoute, AppError> {
        let id = request.id.unwrap_or_else(Uuid::new_v4);
        let route = self.routes.create(&request.into_route(id, Utc::now())).await?;
        tracing::info!(
            "🚂 Ruta creada: {} → {} ({})",
            route.origin_port,
            route.destination_port,
            route.id
        );
        Ok(route)
    }

    pub async fn replace_route(&self, id: Uuid, request: ShippingRouteRequest) -> Result<ShippingRoute, AppError> {
        self.routes.replace(&request.into_route(id, Utc::now())).await
    }

    pub async fn delete_route(&self, id: Uuid) -> Result<(), AppError> {
        self.routes.delete(id).await?;
        tracing::info!("🗑️ Ruta eliminada: {}", id);
        Ok(())
    }

    // Webhook de cotizaciones

    pub async fn webhook_settings(&self, default_url: &str) -> Result<WebhookSettingsResponse, AppError> {
        Ok(match self.webhooks.current().await? {
            Some(settings) => WebhookSettingsResponse::stored(settings),
            None => WebhookSettingsResponse::default_url(default_url),
        })
    }

    pub async fn update_webhook(&self, webhook_url: &str) -> Result<WebhookSettingsResponse, AppError> {
        let settings = self.webhooks.replace(webhook_url.trim()).await?;
        tracing::info!("🔗 Webhook de cotizaciones actualizado: {}", settings.webhook_url);
        Ok(WebhookSettingsResponse::stored(settings))
    }

    // Reservas

    pub async fn list_bookings(&self) -> Result<Vec<Booking>, AppError> {
        self.bookings.list_all().await
    }
}
