pub mod received_document_fs_adapter;
pub mod received_document_store_trait;
