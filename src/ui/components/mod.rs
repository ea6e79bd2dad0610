mod product_card;
mod spinner;

pub use product_card::ProductCard;
pub use spinner::{spinner_frame, Spinner};
