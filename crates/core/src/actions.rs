//! Audit action verbs.
//!
//! Every mutating operation records exactly one of these. The dashboard's
//! recent-activity feed re-narrates them through a static lookup, so new
//! verbs should be added here rather than inlined in handlers.

pub const CREATE: &str = "CREATE";
pub const UPDATE: &str = "UPDATE";
pub const DELETE: &str = "DELETE";
pub const UPDATE_STATUS: &str = "UPDATE_STATUS";
pub const UPDATE_CONTENT: &str = "UPDATE_CONTENT";

// Pipeline-specific verbs.
pub const CREATE_FROM_BUDGET: &str = "CREATE_FROM_BUDGET";
pub const CREATE_FROM_CONTRACT: &str = "CREATE_FROM_CONTRACT";
pub const CREATE_WITH_CUSTOM_CONTENT: &str = "CREATE_WITH_CUSTOM_CONTENT";

// Auth / account lifecycle verbs.
pub const USER_REGISTERED: &str = "USER_REGISTERED";
pub const LOGIN_SUCCESS: &str = "LOGIN_SUCCESS";
pub const LOGIN_SUCCESS_2FA: &str = "LOGIN_SUCCESS_2FA";
pub const LOGIN_FAILURE: &str = "LOGIN_FAILURE";
pub const TWO_FACTOR_LOGIN_FAILURE: &str = "2FA_LOGIN_FAILURE";
pub const TWO_FACTOR_ENABLED: &str = "2FA_ENABLED";
pub const TWO_FACTOR_DISABLED: &str = "2FA_DISABLED";
pub const PASSWORD_CHANGE: &str = "PASSWORD_CHANGE";

/// Re-narrate an audit action as a human-readable activity line.
///
/// `entity_label` is the display name for the entity type (already resolved
/// by the caller); unknown actions fall back to a generic sentence.
pub fn narrate(action: &str, entity_label: &str, entity_id: &str) -> String {
    match action {
        LOGIN_SUCCESS | LOGIN_SUCCESS_2FA => "Signed in.".to_string(),
        LOGIN_FAILURE => "Failed login attempt.".to_string(),
        TWO_FACTOR_LOGIN_FAILURE => "Failed two-factor verification.".to_string(),
        USER_REGISTERED => "A new user was registered.".to_string(),
        PASSWORD_CHANGE => "Changed their password.".to_string(),
        TWO_FACTOR_ENABLED => "Enabled two-factor authentication.".to_string(),
        TWO_FACTOR_DISABLED => "Disabled two-factor authentication.".to_string(),
        CREATE | CREATE_FROM_BUDGET | CREATE_FROM_CONTRACT | CREATE_WITH_CUSTOM_CONTENT => {
            format!("Created a new entry in {entity_label}.")
        }
        UPDATE | UPDATE_CONTENT => {
            format!("Updated an entry in {entity_label} (id {entity_id}).")
        }
        UPDATE_STATUS => format!("Changed the status of an entry in {entity_label}."),
        DELETE => format!("Deleted an entry from {entity_label} (id {entity_id})."),
        other => format!("Performed '{other}' on {entity_label}."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrate_known_actions() {
        assert_eq!(narrate(LOGIN_SUCCESS, "Auth", "1"), "Signed in.");
        assert_eq!(
            narrate(CREATE, "Clients", "7"),
            "Created a new entry in Clients."
        );
        assert_eq!(
            narrate(DELETE, "Events", "3"),
            "Deleted an entry from Events (id 3)."
        );
    }

    #[test]
    fn test_narrate_unknown_action_falls_back() {
        assert_eq!(
            narrate("EXPORT", "Reports", "9"),
            "Performed 'EXPORT' on Reports."
        );
    }
}
