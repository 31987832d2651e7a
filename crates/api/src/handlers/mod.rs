//! Request handlers, one module per resource.

pub mod audit;
pub mod auth;
pub mod budget;
pub mod calendar;
pub mod client;
pub mod company;
pub mod contract;
pub mod dashboard;
pub mod document_template;
pub mod event;
pub mod feedback;
pub mod inventory;
pub mod layout;
pub mod report;
pub mod role;
pub mod security;
pub mod service;
pub mod supplier;
pub mod task;
pub mod transaction;
pub mod user;
