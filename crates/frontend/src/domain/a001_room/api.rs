use contracts::domain::a001_room::aggregate::{Room, RoomDto};

use crate::shared::api::CollectionClient;
use crate::shared::api_utils::ApiConfig;
use crate::shared::mutation::MutationCoordinator;
use crate::system::auth::Session;

pub const RESOURCE: &str = "rooms";
pub const LABEL: &str = "room";

pub fn client(config: &ApiConfig, session: &Session) -> CollectionClient<Room, RoomDto> {
    CollectionClient::new(config, RESOURCE, LABEL, session.clone())
}

pub fn coordinator(config: &ApiConfig, session: &Session) -> MutationCoordinator<Room, RoomDto> {
    MutationCoordinator::new(client(config, session))
}
