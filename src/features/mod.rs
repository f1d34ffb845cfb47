pub mod health;
pub mod regions;
