pub mod auth;
pub mod diet;
pub mod media;
pub mod ops;
pub mod recipes;
pub mod shopping;
pub mod workouts;
