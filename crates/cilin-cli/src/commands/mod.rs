pub mod compare;
pub mod lookup;
pub mod rank;
