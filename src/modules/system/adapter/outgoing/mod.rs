mod actix_server_control;

pub use actix_server_control::ActixServerControl;
