pub mod auth;
pub mod availability;
pub mod cake;
pub mod notification;
pub mod profile;
pub mod reservation;
