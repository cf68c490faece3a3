use contracts::domain::a004_user::aggregate::{User, UserDto};

use crate::shared::api::CollectionClient;
use crate::shared::api_utils::ApiConfig;
use crate::shared::mutation::MutationCoordinator;
use crate::system::auth::Session;

pub const RESOURCE: &str = "users";
pub const LABEL: &str = "user";

pub fn coordinator(config: &ApiConfig, session: &Session) -> MutationCoordinator<User, UserDto> {
    MutationCoordinator::new(CollectionClient::new(config, RESOURCE, LABEL, session.clone()))
}
