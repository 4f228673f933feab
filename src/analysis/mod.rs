pub mod aggregate;
pub mod history;
pub mod participant;
pub mod recommender;
pub mod trend;
