pub mod halma;
pub mod lowest_unique;
