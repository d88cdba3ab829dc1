pub mod filter;
pub mod form;
pub mod store;
pub mod week;
