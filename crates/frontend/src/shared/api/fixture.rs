use std::marker::PhantomData;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::client::{decode_list, remote_error, ListSource};
use super::transport::{ApiRequest, GlooTransport, HttpTransport};
use super::ApiError;
use crate::shared::api_utils::ApiConfig;

/// Read-only list backed by a static JSON file. Plain GET, no credential.
pub struct FixtureSource<T, H = GlooTransport> {
    url: String,
    label: &'static str,
    transport: H,
    _item: PhantomData<fn() -> T>,
}

impl<T> FixtureSource<T, GlooTransport> {
    pub fn new(config: &ApiConfig, file: &str, label: &'static str) -> Self {
        Self::with_transport(config, file, label, GlooTransport)
    }
}

impl<T, H> FixtureSource<T, H> {
    pub fn with_transport(config: &ApiConfig, file: &str, label: &'static str, transport: H) -> Self {
        Self {
            url: config.fixture_url(file),
            label,
            transport,
            _item: PhantomData,
        }
    }
}

#[async_trait(?Send)]
impl<T, H> ListSource<T> for FixtureSource<T, H>
where
    T: DeserializeOwned,
    H: HttpTransport,
{
    async fn fetch_all(&self) -> Result<Vec<T>, ApiError> {
        let response = self.transport.send(ApiRequest::get(&self.url)).await?;
        if !response.ok() {
            return Err(remote_error(
                &response,
                format!("Gagal mengambil data {}", self.label),
            ));
        }
        decode_list(&response.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::testing::ScriptedTransport;
    use contracts::domain::a003_facility::aggregate::Facility;
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn test_fixture_is_fetched_without_credential() {
        let transport = ScriptedTransport::new();
        transport.respond(
            200,
            json!([{"id": 1, "name": "Proyektor", "type": "Elektronik", "available": true}]),
        );
        let source: FixtureSource<Facility, _> = FixtureSource::with_transport(
            &ApiConfig::new("http://api.test", "http://static.test/"),
            "facilities.json",
            "fasilitas",
            transport.clone(),
        );

        let items = block_on(source.fetch_all()).unwrap();
        assert_eq!(items[0].facility_type, "Elektronik");

        let sent = transport.requests();
        assert_eq!(sent[0].url, "http://static.test/facilities.json");
        assert!(sent[0].bearer.is_none());
    }

    #[test]
    fn test_missing_fixture() {
        let transport = ScriptedTransport::new();
        transport.respond_raw(404, "Not Found");
        let source: FixtureSource<Facility, _> = FixtureSource::with_transport(
            &ApiConfig::new("", ""),
            "facilities.json",
            "fasilitas",
            transport,
        );
        assert_eq!(
            block_on(source.fetch_all()).unwrap_err().to_string(),
            "Gagal mengambil data fasilitas"
        );
    }
}
