pub mod application;
pub mod project;
pub mod reference;
pub mod team;
