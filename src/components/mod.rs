pub mod caption;
pub mod snowfall;
