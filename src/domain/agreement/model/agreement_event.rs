//! Views over the agreement webhook payload.
//!
//! Each endpoint only requires the keys it reads; everything else in the
//! payload is ignored.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::agreement_event_type::AgreementEventType;

/// Payload view used by `POST /agreement_all_events`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgreementStatusEvent {
    pub event_date: String,
    pub event: AgreementEventType,
    pub agreement: AgreementStatus,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AgreementStatus {
    pub id: String,
    pub status: String,
}

/// Payload view used by `POST /agreement_workflow_completed`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgreementWorkflowEvent {
    pub event_date: String,
    pub event: AgreementEventType,
    pub agreement: AgreementDocument,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgreementDocument {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_signed_document_info")]
    pub signed_document_info: Option<SignedDocumentInfo>,
}

/// Only present when the webhook was registered with the signed document requested.
#[derive(Debug, Clone, Deserialize)]
pub struct SignedDocumentInfo {
    /// Base64-encoded document bytes.
    pub document: String,
}

impl AgreementDocument {
    /// Encoded document, if one was attached.
    pub fn encoded_document(&self) -> Option<&str> {
        self.signed_document_info
            .as_ref()
            .map(|info| info.document.as_str())
    }
}

/// `null` and `{}` mean no document; any other value must carry a string `document`.
fn deserialize_signed_document_info<'de, D>(
    deserializer: D,
) -> Result<Option<SignedDocumentInfo>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(map)) if map.is_empty() => Ok(None),
        Some(raw) => SignedDocumentInfo::deserialize(raw)
            .map(Some)
            .map_err(|e| serde::de::Error::custom(format!("signedDocumentInfo: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_event_ignores_extra_keys() {
        let event: AgreementStatusEvent = serde_json::from_value(json!({
            "webhookId": "w-1",
            "eventDate": "2024-01-01T00:00:00Z",
            "event": "AGREEMENT_ACTION_COMPLETED",
            "agreement": { "id": "A1", "status": "SIGNED", "name": "NDA" }
        }))
        .unwrap();

        assert_eq!(event.agreement.id, "A1");
        assert_eq!(event.agreement.status, "SIGNED");
        assert_eq!(event.event, AgreementEventType::ActionCompleted);
    }

    #[test]
    fn status_event_requires_status() {
        let result = serde_json::from_value::<AgreementStatusEvent>(json!({
            "eventDate": "2024-01-01T00:00:00Z",
            "event": "AGREEMENT_ACTION_COMPLETED",
            "agreement": { "id": "A1" }
        }));

        assert!(result.is_err());
    }

    #[test]
    fn workflow_event_without_document_info() {
        let event: AgreementWorkflowEvent = serde_json::from_value(json!({
            "eventDate": "2024-01-01T00:00:00Z",
            "event": "AGREEMENT_WORKFLOW_COMPLETED",
            "agreement": { "id": "A1", "name": "NDA" }
        }))
        .unwrap();

        assert!(event.agreement.encoded_document().is_none());
    }

    #[test]
    fn null_or_empty_document_info_means_no_document() {
        for info in [json!(null), json!({})] {
            let event: AgreementWorkflowEvent = serde_json::from_value(json!({
                "eventDate": "2024-01-01T00:00:00Z",
                "event": "AGREEMENT_WORKFLOW_COMPLETED",
                "agreement": { "id": "A1", "name": "NDA", "signedDocumentInfo": info }
            }))
            .unwrap();

            assert!(event.agreement.encoded_document().is_none());
        }
    }

    #[test]
    fn document_info_without_string_document_is_rejected() {
        for info in [json!({ "documentName": "x" }), json!({ "document": null }), json!("yes")] {
            let result = serde_json::from_value::<AgreementWorkflowEvent>(json!({
                "eventDate": "2024-01-01T00:00:00Z",
                "event": "AGREEMENT_WORKFLOW_COMPLETED",
                "agreement": { "id": "A1", "name": "NDA", "signedDocumentInfo": info }
            }));

            let err = result.expect_err("document info without a document must fail");
            assert!(err.to_string().contains("signedDocumentInfo"), "{err}");
        }
    }

    #[test]
    fn workflow_event_exposes_document() {
        let event: AgreementWorkflowEvent = serde_json::from_value(json!({
            "eventDate": "2024-01-01T00:00:00Z",
            "event": "AGREEMENT_WORKFLOW_COMPLETED",
            "agreement": {
                "id": "A1",
                "name": "NDA",
                "signedDocumentInfo": { "document": "JVBERi0=" }
            }
        }))
        .unwrap();

        assert_eq!(event.agreement.encoded_document(), Some("JVBERi0="));
    }
}
