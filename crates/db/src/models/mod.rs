pub mod application;
pub mod project;
pub mod project_type;
pub mod role;
pub mod team_member;
