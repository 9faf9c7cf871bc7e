//! Agreement webhook payload types

pub mod agreement_event;
pub mod agreement_event_type;
