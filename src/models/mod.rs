//! Modelos de datos
//!
//! Este módulo contiene los structs que mapean a las tablas de PostgreSQL
//! y los tipos transitorios de búsqueda.

pub mod booking;
pub mod calculation_click;
pub mod cargo_type;
pub mod container_type;
pub mod delivery_term;
pub mod port;
pub mod quote;
pub mod shipping_route;
pub mod user;
pub mod webhook_settings;

pub use booking::{Booking, BookingDetails};
pub use calculation_click::CalculationClick;
pub use cargo_type::CargoType;
pub use container_type::{ContainerType, ContainerTypeRequest};
pub use delivery_term::DeliveryTerm;
pub use port::{Port, PortRequest, TransportType};
pub use quote::{Provenance, QuoteResult, SearchQuery};
pub use shipping_route::{ShippingRoute, ShippingRouteRequest};
pub use user::{User, UserResponse};
pub use webhook_settings::WebhookSettings;
