//! Status vocabularies for the budget funnel, contracts, events, tasks, and
//! transactions.
//!
//! Statuses are stored as plain text columns; these constants are the single
//! source of truth for the accepted values.

// --- Budget funnel ---

pub const BUDGET_DRAFT: &str = "draft";
pub const BUDGET_SENT: &str = "sent";
pub const BUDGET_FOLLOW_UP: &str = "follow_up";
pub const BUDGET_NEGOTIATING: &str = "negotiating";
pub const BUDGET_APPROVED: &str = "approved";
pub const BUDGET_REJECTED: &str = "rejected";

/// The ordered sales funnel, draft first.
pub const FUNNEL_STATUSES: [&str; 6] = [
    BUDGET_DRAFT,
    BUDGET_SENT,
    BUDGET_FOLLOW_UP,
    BUDGET_NEGOTIATING,
    BUDGET_APPROVED,
    BUDGET_REJECTED,
];

/// Funnel statuses that count as "awaiting an answer" on the dashboard.
pub const FUNNEL_PENDING: [&str; 3] = [BUDGET_SENT, BUDGET_FOLLOW_UP, BUDGET_NEGOTIATING];

pub fn is_funnel_status(status: &str) -> bool {
    FUNNEL_STATUSES.contains(&status)
}

/// Prefix for generated budget codes (`BDG-001`, `BDG-002`, ...).
pub const BUDGET_CODE_PREFIX: &str = "BDG-";

// --- Contracts ---

pub const CONTRACT_AWAITING_SIGNATURE: &str = "awaiting_signature";
pub const CONTRACT_SIGNED: &str = "signed";
pub const CONTRACT_CANCELLED: &str = "cancelled";

/// Prefix for generated contract codes (`CTR-001`, `CTR-002`, ...).
pub const CONTRACT_CODE_PREFIX: &str = "CTR-";

// --- Events ---

pub const EVENT_PLANNED: &str = "planned";
pub const EVENT_CONFIRMED: &str = "confirmed";
pub const EVENT_REALIZED: &str = "realized";
pub const EVENT_FINALIZED: &str = "finalized";
pub const EVENT_CANCELLED: &str = "cancelled";

/// Event statuses that count toward period KPIs.
pub const EVENT_ACTIVE: [&str; 2] = [EVENT_CONFIRMED, EVENT_REALIZED];

// --- Tasks ---

pub const TASK_OPEN: &str = "open";
pub const TASK_IN_PROGRESS: &str = "in_progress";
pub const TASK_DONE: &str = "done";
pub const TASK_CANCELLED: &str = "cancelled";

/// Terminal task statuses: never counted as overdue.
pub const TASK_TERMINAL: [&str; 2] = [TASK_DONE, TASK_CANCELLED];

// --- Transactions ---

pub const TRANSACTION_REVENUE: &str = "revenue";
pub const TRANSACTION_EXPENSE: &str = "expense";

pub const TRANSACTION_PENDING: &str = "pending";
pub const TRANSACTION_COMPLETED: &str = "completed";
pub const TRANSACTION_CANCELLED: &str = "cancelled";

/// Terminal transaction statuses: never counted as overdue receivables.
pub const TRANSACTION_TERMINAL: [&str; 2] = [TRANSACTION_COMPLETED, TRANSACTION_CANCELLED];

// --- Inventory movements ---

pub const MOVEMENT_INBOUND: &str = "inbound";
pub const MOVEMENT_OUTBOUND: &str = "outbound";

/// The accepted stock-movement kinds.
pub const MOVEMENT_KINDS: [&str; 2] = [MOVEMENT_INBOUND, MOVEMENT_OUTBOUND];

pub fn is_movement_kind(kind: &str) -> bool {
    MOVEMENT_KINDS.contains(&kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_funnel_membership() {
        assert!(is_funnel_status(BUDGET_APPROVED));
        assert!(is_funnel_status(BUDGET_DRAFT));
        assert!(!is_funnel_status("signed"));
        assert!(!is_funnel_status(""));
    }

    #[test]
    fn test_movement_kind_membership() {
        assert!(is_movement_kind(MOVEMENT_INBOUND));
        assert!(is_movement_kind(MOVEMENT_OUTBOUND));
        assert!(!is_movement_kind("sideways"));
        assert!(!is_movement_kind(""));
    }
}
