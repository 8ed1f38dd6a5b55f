pub mod accounts;
pub mod certificates;
pub mod events;
pub mod login;
pub mod matches;
pub mod overview;
pub mod patients;
pub mod questionnaires;
pub mod therapists;
