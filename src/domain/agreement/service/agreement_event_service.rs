use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};

use crate::core::persistence::document::received_document_store_trait::ReceivedDocumentStore;
use crate::domain::agreement::model::agreement_event::{AgreementStatusEvent, AgreementWorkflowEvent};

use super::signed_document_service::{decode_document, sniff_mime};

/// What happened to a signed document attached to a workflow event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredDocument {
    pub path: PathBuf,
    pub bytes: usize,
    pub mime: Option<&'static str>,
}

/// Handles agreement webhook deliveries. Stateless apart from the injected
/// verbosity flag and document sink.
pub struct AgreementEventService {
    chatty_logs: bool,
    store: Arc<dyn ReceivedDocumentStore>,
}

impl AgreementEventService {
    pub fn new(chatty_logs: bool, store: Arc<dyn ReceivedDocumentStore>) -> Self {
        Self { chatty_logs, store }
    }

    pub fn handle_all_events(&self, body: Value) -> Result<()> {
        let event: AgreementStatusEvent = self.parse(body)?;

        info!(
            event_date = %event.event_date,
            event = %event.event,
            agreement_id = %event.agreement.id,
            status = %event.agreement.status,
            "Agreement event received"
        );

        Ok(())
    }

    /// Logs the event and, when a signed document is attached, decodes and
    /// stores it. Nothing is written if decoding fails.
    pub fn handle_workflow_completed(&self, body: Value) -> Result<Option<StoredDocument>> {
        let event: AgreementWorkflowEvent = self.parse(body)?;
        let agreement = &event.agreement;

        info!(
            event_date = %event.event_date,
            event = %event.event,
            agreement_id = %agreement.id,
            name = %agreement.name,
            "Agreement workflow completed"
        );

        let Some(encoded) = agreement.encoded_document() else {
            debug!(agreement_id = %agreement.id, "No signed document attached");
            return Ok(None);
        };

        let bytes = decode_document(encoded)?;
        let path = self
            .store
            .save(&agreement.id, &bytes)
            .with_context(|| format!("Failed to store signed document for agreement {}", agreement.id))?;
        let mime = sniff_mime(&bytes);

        info!(
            agreement_id = %agreement.id,
            path = %path.display(),
            bytes = bytes.len(),
            mime = mime.unwrap_or("unknown"),
            "Signed document stored"
        );

        Ok(Some(StoredDocument {
            path,
            bytes: bytes.len(),
            mime,
        }))
    }

    fn parse<T: DeserializeOwned>(&self, body: Value) -> Result<T> {
        if self.chatty_logs {
            let pretty = serde_json::to_string_pretty(&body).unwrap_or_else(|_| body.to_string());
            info!("request-body: {}", pretty);
        }

        serde_json::from_value(body).context("Invalid agreement payload")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use base64::prelude::*;
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockDocumentStore {
        saved: Mutex<Vec<(String, Vec<u8>)>>,
        fail: bool,
    }

    impl ReceivedDocumentStore for MockDocumentStore {
        fn save(&self, agreement_id: &str, bytes: &[u8]) -> Result<PathBuf> {
            if self.fail {
                return Err(anyhow!("disk full"));
            }
            self.saved
                .lock()
                .unwrap()
                .push((agreement_id.to_string(), bytes.to_vec()));
            Ok(PathBuf::from("received_file.pdf"))
        }
    }

    fn service(store: Arc<MockDocumentStore>) -> AgreementEventService {
        AgreementEventService::new(true, store)
    }

    fn workflow_body(document: Option<&str>) -> Value {
        let mut body = json!({
            "eventDate": "2024-01-01T00:00:00Z",
            "event": "AGREEMENT_WORKFLOW_COMPLETED",
            "agreement": { "id": "A1", "name": "NDA" }
        });
        if let Some(doc) = document {
            body["agreement"]["signedDocumentInfo"] = json!({ "document": doc });
        }
        body
    }

    #[test]
    fn all_events_accepts_minimal_payload() {
        let svc = service(Arc::default());
        let result = svc.handle_all_events(json!({
            "eventDate": "2024-01-01T00:00:00Z",
            "event": "AGREEMENT_ACTION_COMPLETED",
            "agreement": { "id": "A1", "status": "SIGNED" }
        }));

        assert!(result.is_ok());
    }

    #[test]
    fn all_events_rejects_missing_keys() {
        let svc = service(Arc::default());
        let err = svc
            .handle_all_events(json!({ "event": "AGREEMENT_CREATED" }))
            .unwrap_err();

        assert!(format!("{:#}", err).contains("eventDate"));
    }

    #[test]
    fn workflow_stores_decoded_document() {
        let store = Arc::new(MockDocumentStore::default());
        let svc = service(store.clone());
        let pdf = b"%PDF-1.4\n%EOF\n";

        let stored = svc
            .handle_workflow_completed(workflow_body(Some(&BASE64_STANDARD.encode(pdf))))
            .unwrap()
            .expect("document should be stored");

        assert_eq!(stored.bytes, pdf.len());
        assert_eq!(stored.mime, Some("application/pdf"));

        let saved = store.saved.lock().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].0, "A1");
        assert_eq!(saved[0].1, pdf);
    }

    #[test]
    fn workflow_without_document_writes_nothing() {
        let store = Arc::new(MockDocumentStore::default());
        let svc = service(store.clone());

        assert!(svc.handle_workflow_completed(workflow_body(None)).unwrap().is_none());
        assert!(store.saved.lock().unwrap().is_empty());
    }

    #[test]
    fn malformed_base64_writes_nothing() {
        let store = Arc::new(MockDocumentStore::default());
        let svc = service(store.clone());

        assert!(svc
            .handle_workflow_completed(workflow_body(Some("%%not-base64%%")))
            .is_err());
        assert!(store.saved.lock().unwrap().is_empty());
    }

    #[test]
    fn store_failure_is_reported() {
        let store = Arc::new(MockDocumentStore {
            fail: true,
            ..Default::default()
        });
        let svc = service(store);

        let err = svc
            .handle_workflow_completed(workflow_body(Some(&BASE64_STANDARD.encode(b"%PDF-1.4"))))
            .unwrap_err();

        assert!(format!("{:#}", err).contains("disk full"));
    }

    #[test]
    fn workflow_requires_agreement_name() {
        let svc = service(Arc::default());
        let result = svc.handle_workflow_completed(json!({
            "eventDate": "2024-01-01T00:00:00Z",
            "event": "AGREEMENT_WORKFLOW_COMPLETED",
            "agreement": { "id": "A1" }
        }));

        assert!(result.is_err());
    }
}
