pub mod accounts;
pub mod auth;
pub mod certificates;
pub mod client;
pub mod events;
pub mod matches;
pub mod patients;
pub mod questionnaires;
pub mod therapists;
pub mod types;


pub use client::ApiClient;
