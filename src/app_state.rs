use std::sync::Arc;

use crate::config::AppConfig;
use crate::core::persistence::document::received_document_fs_adapter::ReceivedDocumentFsAdapter;
use crate::core::persistence::document::received_document_store_trait::ReceivedDocumentStore;
use crate::domain::agreement::service::agreement_event_service::AgreementEventService;

#[derive(Clone)]
pub struct AppState {
    pub agreement_event_service: Arc<AgreementEventService>,
}

pub fn build_app_state(config: &AppConfig) -> AppState {
    let store = Arc::new(ReceivedDocumentFsAdapter::new(config.document_target.clone()));
    build_app_state_with_store(config, store)
}

/// Same as [`build_app_state`] with a caller-provided document sink.
pub fn build_app_state_with_store(
    config: &AppConfig,
    store: Arc<dyn ReceivedDocumentStore>,
) -> AppState {
    AppState {
        agreement_event_service: Arc::new(AgreementEventService::new(config.chatty_logs, store)),
    }
}
