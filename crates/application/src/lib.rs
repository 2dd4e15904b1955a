//! Application services and ports.

#![forbid(unsafe_code)]

mod directory_ports;
mod membership_service;
mod role_ports;
mod role_service;
mod team_service;
mod user_service;

#[cfg(test)]
mod test_support;

pub use directory_ports::{TeamDirectory, UserDirectory};
pub use membership_service::MembershipService;
pub use role_ports::{AssignMembershipInput, CreateRoleInput, MembershipRepository, RoleRepository};
pub use role_service::RoleService;
pub use team_service::TeamService;
pub use user_service::UserService;
