pub mod agreement;
pub mod root;
