use contracts::domain::a002_booking::aggregate::{Booking, BookingDto};

use crate::shared::api::CollectionClient;
use crate::shared::api_utils::ApiConfig;
use crate::shared::mutation::MutationCoordinator;
use crate::system::auth::Session;

pub const RESOURCE: &str = "bookings";
pub const LABEL: &str = "booking";

pub fn coordinator(config: &ApiConfig, session: &Session) -> MutationCoordinator<Booking, BookingDto> {
    MutationCoordinator::new(CollectionClient::new(config, RESOURCE, LABEL, session.clone()))
}
