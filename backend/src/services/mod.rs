pub mod document_service;
