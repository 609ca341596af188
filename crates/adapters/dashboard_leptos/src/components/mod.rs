pub mod card;
pub mod controls;
pub mod row;

pub use card::PoolCard;
