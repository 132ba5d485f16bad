pub mod appointments;
pub mod facilities;
pub mod health;
pub mod history;
pub mod profile;
pub mod symptoms;
