pub mod ids;

pub use ids::UserId;
