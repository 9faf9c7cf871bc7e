//! API route declarations

pub mod agreement_routes;
