use crate::models::Booking;
use crate::utils::errors::AppError;
use sqlx::PgPool;

const BOOKING_COLUMNS: &str = "id, user_id, route_id, company_name, contact_person, email, phone, \
     cargo_description, delivery_term, inn, pickup_address, delivery_address, comment, \
     search_query, status, created_at, updated_at";

pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, booking: &Booking) -> Result<Booking, AppError> {
        let saved = sqlx::query_as::<_, Booking>(&format!(
            r#"
            INSERT INTO bookings (id, user_id, route_id, company_name, contact_person, email, phone,
                cargo_description, delivery_term, inn, pickup_address, delivery_address, comment,
                search_query, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
            RETURNING {}
            "#,
            BOOKING_COLUMNS
        ))
        .bind(booking.id)
        .bind(booking.user_id)
        .bind(&booking.route_id)
        .bind(&booking.company_name)
        .bind(&booking.contact_person)
        .bind(&booking.email)
        .bind(&booking.phone)
        .bind(&booking.cargo_description)
        .bind(&booking.delivery_term)
        .bind(&booking.inn)
        .bind(&booking.pickup_address)
        .bind(&booking.delivery_address)
        .bind(&booking.comment)
        .bind(&booking.search_query)
        .bind(&booking.status)
        .bind(booking.created_at)
        .bind(booking.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(saved)
    }

    pub async fn list_all(&self) -> Result<Vec<Booking>, AppError> {
        let bookings = sqlx::query_as::<_, Booking>(&format!(
            "SELECT {} FROM bookings ORDER BY created_at DESC",
            BOOKING_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(bookings)
    }
}
