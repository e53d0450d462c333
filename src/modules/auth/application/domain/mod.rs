pub mod entities;
pub mod new_user;
pub mod policy;
