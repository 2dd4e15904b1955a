//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod identifier;
mod membership;
mod role;
mod team;
mod user;

pub use membership::{Membership, MembershipId};
pub use role::{Role, RoleId};
pub use team::{Team, TeamId};
pub use user::{User, UserId};
