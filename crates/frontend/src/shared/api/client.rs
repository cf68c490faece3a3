//! Remote collection client: CRUD against one REST resource.
//!
//! The client never touches list state. It turns every outcome into either a
//! decoded value or an `ApiError` whose text is ready for the banner.

use std::marker::PhantomData;

use async_trait::async_trait;
use contracts::shared::envelope::{ErrorBody, ListEnvelope};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::transport::{ApiRequest, ApiResponse, GlooTransport, HttpTransport};
use super::ApiError;
use crate::shared::api_utils::ApiConfig;
use crate::system::auth::Session;

/// Successful mutation answer
#[derive(Debug, Clone, PartialEq)]
pub struct Mutation<T> {
    /// Server message, when the body carried one
    pub message: Option<String>,
    /// Stored record, when the body carried one
    pub item: Option<T>,
}

/// Anything a list can be loaded from
#[async_trait(?Send)]
pub trait ListSource<T> {
    async fn fetch_all(&self) -> Result<Vec<T>, ApiError>;
}

pub struct CollectionClient<T, P, H = GlooTransport> {
    config: ApiConfig,
    resource: String,
    label: &'static str,
    session: Session,
    transport: H,
    _types: PhantomData<fn() -> (T, P)>,
}

impl<T, P> CollectionClient<T, P, GlooTransport> {
    pub fn new(config: &ApiConfig, resource: &str, label: &'static str, session: Session) -> Self {
        Self::with_transport(config, resource, label, session, GlooTransport)
    }
}

impl<T, P, H> CollectionClient<T, P, H> {
    pub fn with_transport(
        config: &ApiConfig,
        resource: &str,
        label: &'static str,
        session: Session,
        transport: H,
    ) -> Self {
        Self {
            config: config.clone(),
            resource: resource.to_string(),
            label,
            session,
            transport,
            _types: PhantomData,
        }
    }

    /// Lowercase entity name used in messages ("booking")
    pub fn label(&self) -> &'static str {
        self.label
    }

    fn collection_url(&self) -> String {
        self.config.resource_url(&self.resource)
    }

    fn item_url(&self, id: i64) -> String {
        self.config.item_url(&self.resource, id)
    }
}

impl<T, P, H> CollectionClient<T, P, H>
where
    T: DeserializeOwned,
    P: Serialize,
    H: HttpTransport,
{
    /// `GET /{resource}`
    pub async fn list(&self) -> Result<Vec<T>, ApiError> {
        let token = self.session.bearer()?;
        let request = ApiRequest::get(self.collection_url()).with_bearer(token);
        let response = self.transport.send(request).await?;
        if !response.ok() {
            return Err(remote_error(
                &response,
                format!("Gagal mengambil data {}", self.label),
            ));
        }
        decode_list(&response.body)
    }

    /// `POST /{resource}` with the write payload (never an id)
    pub async fn create(&self, payload: &P) -> Result<Mutation<T>, ApiError> {
        let token = self.session.bearer()?;
        let request = ApiRequest::post(self.collection_url())
            .with_bearer(token)
            .with_json(encode(payload)?);
        self.mutate(request, "menambah").await
    }

    /// `PUT /{resource}/{id}`
    pub async fn update(&self, id: i64, payload: &P) -> Result<Mutation<T>, ApiError> {
        let token = self.session.bearer()?;
        let request = ApiRequest::put(self.item_url(id))
            .with_bearer(token)
            .with_json(encode(payload)?);
        self.mutate(request, "mengupdate").await
    }

    /// `DELETE /{resource}/{id}`
    pub async fn delete(&self, id: i64) -> Result<Mutation<T>, ApiError> {
        let token = self.session.bearer()?;
        let request = ApiRequest::delete(self.item_url(id)).with_bearer(token);
        self.mutate(request, "menghapus").await
    }

    async fn mutate(&self, request: ApiRequest, verb: &str) -> Result<Mutation<T>, ApiError> {
        let response = self.transport.send(request).await?;
        if !response.ok() {
            return Err(remote_error(
                &response,
                format!("Gagal {} {}", verb, self.label),
            ));
        }
        Ok(decode_mutation(&response.body))
    }
}

#[async_trait(?Send)]
impl<T, P, H> ListSource<T> for CollectionClient<T, P, H>
where
    T: DeserializeOwned,
    P: Serialize,
    H: HttpTransport,
{
    async fn fetch_all(&self) -> Result<Vec<T>, ApiError> {
        self.list().await
    }
}

// ============================================================================
// Body decoding
// ============================================================================

#[derive(Deserialize)]
#[serde(untagged)]
enum ListBody<T> {
    Bare(Vec<T>),
    Envelope(ListEnvelope<T>),
}

/// `{data: [...]}`, `{}` or a bare array
pub(crate) fn decode_list<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, ApiError> {
    match serde_json::from_str::<ListBody<T>>(body) {
        Ok(ListBody::Bare(items)) => Ok(items),
        Ok(ListBody::Envelope(envelope)) => Ok(envelope.into_items()),
        Err(e) => Err(ApiError::Decode(format!("Failed to parse response: {}", e))),
    }
}

/// Mutation bodies are read leniently: an empty or foreign body is still a success
fn decode_mutation<T: DeserializeOwned>(body: &str) -> Mutation<T> {
    let value = match serde_json::from_str::<Value>(body) {
        Ok(value) => value,
        Err(_) => {
            return Mutation {
                message: None,
                item: None,
            }
        }
    };
    let message = value
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string);
    let item = value
        .get("data")
        .cloned()
        .and_then(|data| serde_json::from_value(data).ok());
    Mutation { message, item }
}

pub(crate) fn remote_error(response: &ApiResponse, fallback: String) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(&response.body)
        .ok()
        .and_then(|body| body.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or(fallback);
    ApiError::Remote {
        status: response.status,
        message,
    }
}

fn encode<P: Serialize>(payload: &P) -> Result<Value, ApiError> {
    serde_json::to_value(payload)
        .map_err(|e| ApiError::Decode(format!("Failed to serialize request: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::testing::ScriptedTransport;
    use crate::shared::api::transport::Method;
    use contracts::domain::a001_room::aggregate::{Room, RoomDto};
    use futures::executor::block_on;
    use serde_json::json;

    fn client(token: Option<&str>, transport: &ScriptedTransport) -> CollectionClient<Room, RoomDto, ScriptedTransport> {
        CollectionClient::with_transport(
            &ApiConfig::new("http://api.test", "http://api.test"),
            "rooms",
            "room",
            Session::new(token.map(str::to_string)),
            transport.clone(),
        )
    }

    fn room_a() -> RoomDto {
        RoomDto {
            name: "Room A".into(),
            capacity: 10,
            amenities: vec![],
        }
    }

    #[test]
    fn test_list_reads_data_envelope() {
        let transport = ScriptedTransport::new();
        transport.respond(200, json!({"data": [{"id": 1, "name": "Aula", "capacity": 80}]}));

        let rooms = block_on(client(Some("t0k"), &transport).list()).unwrap();
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].name, "Aula");

        let sent = transport.requests();
        assert_eq!(sent[0].method, Method::Get);
        assert_eq!(sent[0].url, "http://api.test/api/rooms");
        assert_eq!(sent[0].bearer.as_deref(), Some("t0k"));
    }

    #[test]
    fn test_list_without_data_is_empty() {
        let transport = ScriptedTransport::new();
        transport.respond(200, json!({}));
        transport.respond(200, json!([{"id": 2, "name": "Lab", "capacity": 30}]));

        let c = client(Some("t0k"), &transport);
        assert!(block_on(c.list()).unwrap().is_empty());
        assert_eq!(block_on(c.list()).unwrap().len(), 1);
    }

    #[test]
    fn test_missing_token_fails_before_network() {
        let transport = ScriptedTransport::new();
        let c = client(None, &transport);

        assert_eq!(block_on(c.list()), Err(ApiError::Auth));
        assert_eq!(block_on(c.delete(1)).unwrap_err(), ApiError::Auth);
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn test_create_sends_payload_without_id() {
        let transport = ScriptedTransport::new();
        transport.respond(
            201,
            json!({"message": "Room berhasil ditambahkan", "data": {"id": 9, "name": "Room A", "capacity": 10}}),
        );

        let outcome = block_on(client(Some("t0k"), &transport).create(&room_a())).unwrap();
        assert_eq!(outcome.message.as_deref(), Some("Room berhasil ditambahkan"));
        assert_eq!(outcome.item.map(|r| r.id), Some(9));

        let body = transport.requests()[0].body.clone().unwrap();
        assert!(body.get("id").is_none());
        assert_eq!(body["name"], "Room A");
    }

    #[test]
    fn test_server_message_wins_over_fallback() {
        let transport = ScriptedTransport::new();
        transport.respond(422, json!({"message": "Validation failed"}));
        transport.respond_raw(500, "<html>oops</html>");

        let c = client(Some("t0k"), &transport);
        let err = block_on(c.update(3, &room_a())).unwrap_err();
        assert_eq!(err.to_string(), "Validation failed");
        assert_eq!(err.status(), Some(422));

        let err = block_on(c.create(&room_a())).unwrap_err();
        assert_eq!(err.to_string(), "Gagal menambah room");
    }

    #[test]
    fn test_update_and_delete_target_item_url() {
        let transport = ScriptedTransport::new();
        transport.respond(200, json!({"message": "ok"}));
        transport.respond_raw(204, "");

        let c = client(Some("t0k"), &transport);
        block_on(c.update(3, &room_a())).unwrap();
        let deleted = block_on(c.delete(3)).unwrap();
        assert_eq!(deleted.message, None);

        let sent = transport.requests();
        assert_eq!(sent[0].method, Method::Put);
        assert_eq!(sent[0].url, "http://api.test/api/rooms/3");
        assert_eq!(sent[1].method, Method::Delete);
        assert!(sent[1].body.is_none());
    }

    #[test]
    fn test_list_error_fallback() {
        let transport = ScriptedTransport::new();
        transport.respond(503, json!({}));
        let err = block_on(client(Some("t0k"), &transport).list()).unwrap_err();
        assert_eq!(err.to_string(), "Gagal mengambil data room");
    }

    #[test]
    fn test_undecodable_list_body() {
        let transport = ScriptedTransport::new();
        transport.respond_raw(200, "not json");
        let err = block_on(client(Some("t0k"), &transport).list()).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
