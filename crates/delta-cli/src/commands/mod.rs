pub mod auth;
pub mod dispatch;
pub mod evaluation;
pub mod framework;
pub mod goal;
pub mod module;
pub mod priority;
pub mod profile;
pub mod programme;
pub mod seed;
pub mod shared;
pub mod taking_stock;
pub mod theme;
