//! Entity models and DTOs shared between repositories and the API layer.

pub mod audit;
pub mod budget;
pub mod client;
pub mod company;
pub mod contract;
pub mod dashboard;
pub mod document_template;
pub mod event;
pub mod feedback;
pub mod inventory;
pub mod layout;
pub mod role;
pub mod service;
pub mod supplier;
pub mod task;
pub mod transaction;
pub mod user;
