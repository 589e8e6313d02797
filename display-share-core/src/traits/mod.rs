pub mod capture_backend;
pub mod consent_session;
pub mod share_delegate;
