//! Application layer orchestrating the domain wizard and its ports.

mod wizard_service;

pub use wizard_service::{ServiceError, WizardService};
