mod common;
mod directory;
mod memberships;
mod roles;

pub use common::{HealthResponse, PostgresStatus};
pub use directory::{TeamResponse, UserResponse};
pub use memberships::{CreateMembershipRequest, MembershipResponse, MembershipsQuery};
pub use roles::{CreateRoleRequest, RoleNameResponse, RoleResponse, RolesQuery};
