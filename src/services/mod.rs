pub mod backup_service;
pub mod kind_enumerator;
pub mod kind_store;
pub mod task_queue;
