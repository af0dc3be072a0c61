//! Role policy: authorization decisions over a decoded identity

mod role_policy;

pub use role_policy::RolePolicy;
