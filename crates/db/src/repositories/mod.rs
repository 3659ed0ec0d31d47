pub mod application_repo;
pub mod project_repo;
pub mod project_type_repo;
pub mod role_repo;
pub mod team_member_repo;

pub use application_repo::ApplicationRepo;
pub use project_repo::ProjectRepo;
pub use project_type_repo::ProjectTypeRepo;
pub use role_repo::RoleRepo;
pub use team_member_repo::TeamMemberRepo;

/// A sqlx Postgres transaction, shorthand for repository signatures.
pub type PgTx<'a> = sqlx::Transaction<'a, sqlx::Postgres>;
