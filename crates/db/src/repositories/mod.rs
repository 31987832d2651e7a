//! Repository layer: zero-sized structs with async CRUD methods.
//!
//! Every method takes the pool (or an open transaction) explicitly; the
//! repositories hold no state of their own.

pub mod audit_log_repo;
pub mod budget_repo;
pub mod calendar_repo;
pub mod client_repo;
pub mod company_repo;
pub mod contract_repo;
pub mod dashboard_repo;
pub mod document_template_repo;
pub mod event_repo;
pub mod feedback_repo;
pub mod inventory_repo;
pub mod layout_repo;
pub mod report_repo;
pub mod role_repo;
pub mod service_repo;
pub mod supplier_repo;
pub mod task_repo;
pub mod transaction_repo;
pub mod user_repo;

pub use audit_log_repo::AuditLogRepo;
pub use budget_repo::BudgetRepo;
pub use calendar_repo::CalendarRepo;
pub use client_repo::ClientRepo;
pub use company_repo::CompanyRepo;
pub use contract_repo::ContractRepo;
pub use dashboard_repo::DashboardRepo;
pub use document_template_repo::DocumentTemplateRepo;
pub use event_repo::EventRepo;
pub use feedback_repo::FeedbackRepo;
pub use inventory_repo::InventoryRepo;
pub use layout_repo::LayoutRepo;
pub use report_repo::ReportRepo;
pub use role_repo::RoleRepo;
pub use service_repo::ServiceRepo;
pub use supplier_repo::SupplierRepo;
pub use task_repo::TaskRepo;
pub use transaction_repo::TransactionRepo;
pub use user_repo::UserRepo;
