pub mod document_store;
pub mod local_cache;
