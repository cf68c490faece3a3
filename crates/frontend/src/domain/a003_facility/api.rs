use contracts::domain::a003_facility::aggregate::Facility;

use crate::shared::api::FixtureSource;
use crate::shared::api_utils::ApiConfig;

/// Facilities are a read-only demo list served as a static file
pub const FIXTURE: &str = "facilities.json";
pub const LABEL: &str = "fasilitas";

pub fn source(config: &ApiConfig) -> FixtureSource<Facility> {
    FixtureSource::new(config, FIXTURE, LABEL)
}
