pub mod backup_handlers;
pub mod health_handlers;
