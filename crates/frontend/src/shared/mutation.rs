//! Mutation coordinator: runs create/update/delete through the collection
//! client and reconciles the list with the server afterwards.
//!
//! Every result is applied through a `ListStore`, which refuses the write once
//! the view is gone. A response that arrives after unmount is dropped.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use contracts::shared::validation::Validate;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::shared::api::{ApiError, CollectionClient, GlooTransport, HttpTransport, ListSource, Mutation};
use crate::shared::list_state::ListState;
use crate::shared::list_utils::ListRecord;

// ============================================================================
// Store
// ============================================================================

/// Access to the state of a mounted list view
pub trait ListStore<T: ListRecord> {
    /// Run `f` against the state. `None` when the view no longer exists.
    fn with_state<R>(&self, f: impl FnOnce(&mut ListState<T>) -> R) -> Option<R>;
}

impl<T> ListStore<T> for RwSignal<ListState<T>>
where
    T: ListRecord + Send + Sync,
{
    fn with_state<R>(&self, f: impl FnOnce(&mut ListState<T>) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl<T: ListRecord> ListStore<T> for Rc<RefCell<ListState<T>>> {
    fn with_state<R>(&self, f: impl FnOnce(&mut ListState<T>) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl<T: ListRecord> ListStore<T> for Weak<RefCell<ListState<T>>> {
    fn with_state<R>(&self, f: impl FnOnce(&mut ListState<T>) -> R) -> Option<R> {
        let state = self.upgrade()?;
        let result = f(&mut state.borrow_mut());
        Some(result)
    }
}

/// Load the whole list from `source` into `store`.
///
/// Returns `true` when the result was applied, `false` when it was superseded
/// by a newer load or the view is gone.
pub async fn load_into<T, S, L>(source: &S, store: &L) -> bool
where
    T: ListRecord,
    S: ListSource<T> + ?Sized,
    L: ListStore<T>,
{
    let Some(ticket) = store.with_state(|s| s.begin_load()) else {
        return false;
    };
    let result = source.fetch_all().await;
    if let Err(e) = &result {
        log::error!("Failed to load list: {}", e);
    }
    store
        .with_state(|s| s.finish_load(ticket, result))
        .unwrap_or(false)
}

// ============================================================================
// Confirmation
// ============================================================================

/// Asks the user before a destructive action
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Confirm for F {
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// `window.confirm`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserConfirm;

impl Confirm for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

// ============================================================================
// Coordinator
// ============================================================================

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MutationError {
    #[error("Mohon lengkapi: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Masih ada proses yang berjalan")]
    Busy,

    /// Declined confirmation, or the view was already gone
    #[error("Dibatalkan")]
    Cancelled,

    #[error(transparent)]
    Api(#[from] ApiError),
}

pub struct MutationCoordinator<T, P, H = GlooTransport> {
    client: CollectionClient<T, P, H>,
}

impl<T, P, H> MutationCoordinator<T, P, H>
where
    T: ListRecord + DeserializeOwned,
    P: Serialize + Validate,
    H: HttpTransport,
{
    pub fn new(client: CollectionClient<T, P, H>) -> Self {
        Self { client }
    }

    /// Full reload of the working set
    pub async fn load(&self, store: &impl ListStore<T>) -> bool {
        load_into(&self.client, store).await
    }

    /// Validate, POST, then reload.
    pub async fn create(&self, store: &impl ListStore<T>, payload: &P) -> Result<(), MutationError> {
        self.begin(store, Some(payload))?;
        match self.client.create(payload).await {
            Ok(Mutation { message, .. }) => {
                let message = message.unwrap_or_else(|| self.success_message("ditambahkan"));
                store.with_state(|s| {
                    s.end_mutation();
                    s.notices.success(message);
                });
                self.load(store).await;
                Ok(())
            }
            Err(e) => Err(self.fail(store, "create", e)),
        }
    }

    /// Validate, PUT, patch the returned item in place, then reload.
    pub async fn update(
        &self,
        store: &impl ListStore<T>,
        id: i64,
        payload: &P,
    ) -> Result<(), MutationError> {
        self.begin(store, Some(payload))?;
        match self.client.update(id, payload).await {
            Ok(Mutation { message, item }) => {
                let message = message.unwrap_or_else(|| self.success_message("diupdate"));
                store.with_state(|s| {
                    if let Some(item) = item {
                        s.upsert_item(item);
                    }
                    s.end_mutation();
                    s.notices.success(message);
                });
                self.load(store).await;
                Ok(())
            }
            Err(e) => Err(self.fail(store, "update", e)),
        }
    }

    /// Confirm, DELETE, drop the item locally, then reload.
    pub async fn delete(
        &self,
        store: &impl ListStore<T>,
        id: i64,
        confirm: &impl Confirm,
    ) -> Result<(), MutationError> {
        if !confirm.confirm(&self.confirm_message()) {
            return Err(MutationError::Cancelled);
        }
        self.begin(store, None)?;
        match self.client.delete(id).await {
            Ok(_) => {
                let message = self.success_message("dihapus");
                store.with_state(|s| {
                    s.remove_item(id);
                    s.end_mutation();
                    s.notices.success(message);
                });
                self.load(store).await;
                Ok(())
            }
            Err(e) => Err(self.fail(store, "delete", e)),
        }
    }

    pub fn confirm_message(&self) -> String {
        format!("Apakah Anda yakin ingin menghapus {} ini?", self.client.label())
    }

    /// "Booking berhasil ditambahkan"
    pub fn success_message(&self, verb: &str) -> String {
        format!("{} berhasil {}", capitalize(self.client.label()), verb)
    }

    fn begin(&self, store: &impl ListStore<T>, payload: Option<&P>) -> Result<(), MutationError> {
        if let Some(payload) = payload {
            let missing = payload.missing_fields();
            if !missing.is_empty() {
                let err = MutationError::MissingFields(missing);
                store.with_state(|s| s.notices.error(err.to_string()));
                return Err(err);
            }
        }
        match store.with_state(|s| s.begin_mutation()) {
            Some(true) => Ok(()),
            Some(false) => Err(MutationError::Busy),
            None => Err(MutationError::Cancelled),
        }
    }

    fn fail(&self, store: &impl ListStore<T>, action: &str, error: ApiError) -> MutationError {
        log::error!("Failed to {} {}: {}", action, self.client.label(), error);
        store.with_state(|s| {
            s.end_mutation();
            if error.is_auth() {
                s.notices.sticky_error(error.to_string());
            } else {
                s.notices.error(error.to_string());
            }
        });
        MutationError::Api(error)
    }
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::testing::ScriptedTransport;
    use crate::shared::api::Method;
    use crate::shared::api_utils::ApiConfig;
    use crate::shared::notification::NotificationKind;
    use crate::system::auth::Session;
    use contracts::domain::a001_room::aggregate::{Room, RoomDto};
    use futures::executor::block_on;
    use serde_json::json;

    type Store = Rc<RefCell<ListState<Room>>>;

    fn setup(token: Option<&str>) -> (MutationCoordinator<Room, RoomDto, ScriptedTransport>, ScriptedTransport, Store) {
        let transport = ScriptedTransport::new();
        let client = CollectionClient::with_transport(
            &ApiConfig::new("http://api.test", "http://api.test"),
            "rooms",
            "room",
            Session::new(token.map(str::to_string)),
            transport.clone(),
        );
        let store = Rc::new(RefCell::new(ListState::new(20)));
        (MutationCoordinator::new(client), transport, store)
    }

    fn room(id: i64, name: &str) -> serde_json::Value {
        json!({"id": id, "name": name, "capacity": 10})
    }

    fn room_a() -> RoomDto {
        RoomDto {
            name: "Room A".into(),
            capacity: 10,
            amenities: vec![],
        }
    }

    fn seed(coordinator: &MutationCoordinator<Room, RoomDto, ScriptedTransport>, transport: &ScriptedTransport, store: &Store) {
        transport.respond(200, json!({"data": [room(1, "Aula"), room(2, "Lab")]}));
        assert!(block_on(coordinator.load(store)));
    }

    fn notice(store: &Store) -> Option<(String, NotificationKind)> {
        store
            .borrow()
            .notices
            .current()
            .map(|n| (n.message.clone(), n.kind))
    }

    #[test]
    fn test_create_reloads_and_notifies() {
        let (coordinator, transport, store) = setup(Some("t0k"));
        transport.respond(201, json!({"data": room(3, "Room A")}));
        transport.respond(200, json!({"data": [room(1, "Aula"), room(3, "Room A")]}));

        block_on(coordinator.create(&store, &room_a())).unwrap();

        assert_eq!(transport.methods(), vec![Method::Post, Method::Get]);
        assert_eq!(store.borrow().items().len(), 2);
        assert_eq!(
            notice(&store),
            Some(("Room berhasil ditambahkan".into(), NotificationKind::Success))
        );
        let ticket = store.borrow().notices.current().unwrap().ticket;
        assert!(store.borrow_mut().notices.expire(ticket));
        assert!(!store.borrow().is_mutation_pending());
    }

    #[test]
    fn test_delete_declined_sends_nothing() {
        let (coordinator, transport, store) = setup(Some("t0k"));
        seed(&coordinator, &transport, &store);

        let asked = RefCell::new(String::new());
        let decline = |message: &str| {
            *asked.borrow_mut() = message.to_string();
            false
        };
        let result = block_on(coordinator.delete(&store, 1, &decline));

        assert_eq!(result, Err(MutationError::Cancelled));
        assert_eq!(*asked.borrow(), "Apakah Anda yakin ingin menghapus room ini?");
        assert_eq!(transport.methods(), vec![Method::Get]);
        assert_eq!(store.borrow().items().len(), 2);
    }

    #[test]
    fn test_delete_confirmed() {
        let (coordinator, transport, store) = setup(Some("t0k"));
        seed(&coordinator, &transport, &store);
        transport.respond(200, json!({"message": "deleted"}));
        transport.fail(ApiError::Network("offline".into()));

        block_on(coordinator.delete(&store, 1, &|_: &str| true)).unwrap();

        // removed locally even though the follow-up reload failed
        assert_eq!(store.borrow().items().len(), 1);
        assert_eq!(
            transport.methods(),
            vec![Method::Get, Method::Delete, Method::Get]
        );
        let current = store.borrow().notices.current().cloned().unwrap();
        assert!(current.sticky);
    }

    #[test]
    fn test_update_validation_error_keeps_working_set() {
        let (coordinator, transport, store) = setup(Some("t0k"));
        seed(&coordinator, &transport, &store);
        let before = store.borrow().items().to_vec();
        transport.respond(422, json!({"message": "Validation failed"}));

        let err = block_on(coordinator.update(&store, 1, &room_a())).unwrap_err();

        assert_eq!(err.to_string(), "Validation failed");
        assert_eq!(store.borrow().items(), before.as_slice());
        assert_eq!(
            notice(&store),
            Some(("Validation failed".into(), NotificationKind::Error))
        );
        assert!(!store.borrow().is_mutation_pending());
    }

    #[test]
    fn test_update_applies_server_item() {
        let (coordinator, transport, store) = setup(Some("t0k"));
        seed(&coordinator, &transport, &store);
        transport.respond(
            200,
            json!({"message": "Room berhasil diupdate", "data": room(2, "Lab Komputer")}),
        );
        transport.respond_raw(500, "");

        block_on(coordinator.update(&store, 2, &room_a())).unwrap();

        // reload failed, the patched item is what the server stored
        assert_eq!(store.borrow().items()[1].name, "Lab Komputer");
    }

    #[test]
    fn test_missing_token_load_shows_banner_without_request() {
        let (coordinator, transport, store) = setup(None);

        assert!(block_on(coordinator.load(&store)));

        assert!(transport.requests().is_empty());
        let current = store.borrow().notices.current().cloned().unwrap();
        assert_eq!(current.message, "Token akses tidak ditemukan");
        assert!(current.sticky);
        assert!(store.borrow().items().is_empty());
    }

    #[test]
    fn test_missing_fields_never_reach_network() {
        let (coordinator, transport, store) = setup(Some("t0k"));
        let err = block_on(coordinator.create(&store, &RoomDto::default())).unwrap_err();
        assert_eq!(err, MutationError::MissingFields(vec!["name", "capacity"]));
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn test_second_submit_is_busy() {
        let (coordinator, transport, store) = setup(Some("t0k"));
        store.borrow_mut().begin_mutation();

        let err = block_on(coordinator.create(&store, &room_a())).unwrap_err();
        assert_eq!(err, MutationError::Busy);
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn test_result_after_unmount_is_dropped() {
        let (coordinator, transport, store) = setup(Some("t0k"));
        let weak = Rc::downgrade(&store);
        drop(store);
        transport.respond(200, json!({"data": [room(1, "Aula")]}));

        assert!(!block_on(coordinator.load(&weak)));
        assert_eq!(
            block_on(coordinator.create(&weak, &room_a())),
            Err(MutationError::Cancelled)
        );
    }

    #[test]
    fn test_stale_load_does_not_overwrite() {
        let (coordinator, transport, store) = setup(Some("t0k"));
        let older = store.borrow_mut().begin_load();
        transport.respond(200, json!({"data": [room(1, "Aula")]}));

        // an older load finishing late is ignored
        assert!(block_on(coordinator.load(&store)));
        assert!(!store.borrow_mut().finish_load(older, Ok(vec![])));
        assert_eq!(store.borrow().items().len(), 1);
    }
}
