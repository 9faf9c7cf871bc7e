pub mod agreement_event_service;
pub mod signed_document_service;
