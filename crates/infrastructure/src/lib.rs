//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod http_directory_client;
mod http_team_directory;
mod http_user_directory;
mod in_memory_membership_repository;
mod in_memory_role_repository;
mod postgres_errors;
mod postgres_membership_repository;
mod postgres_role_repository;

#[cfg(test)]
mod postgres_test_support;

pub use http_team_directory::HttpTeamDirectory;
pub use http_user_directory::HttpUserDirectory;
pub use in_memory_membership_repository::InMemoryMembershipRepository;
pub use in_memory_role_repository::InMemoryRoleRepository;
pub use postgres_membership_repository::PostgresMembershipRepository;
pub use postgres_role_repository::PostgresRoleRepository;
