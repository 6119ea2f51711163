//! Shared request-handler state: the storage handle and the dispatcher.

use storage::RecordStore;

use crate::dispatcher::NotificationDispatcher;

#[derive(Clone)]
pub struct AppState {
    pub store: RecordStore,
    pub dispatcher: NotificationDispatcher,
}
