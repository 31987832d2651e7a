//! Well-known role name constants.
//!
//! These must match the seed data in the roles migration. Authorization
//! compares the JWT role claim against these literals; the permissions table
//! exists in the data model but is not consulted at enforcement time.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_MEMBER: &str = "member";
