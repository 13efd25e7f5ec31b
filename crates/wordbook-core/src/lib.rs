pub mod preprocess;
pub mod search;
pub mod view;
