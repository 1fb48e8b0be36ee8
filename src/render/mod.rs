pub mod card;
pub mod view;
