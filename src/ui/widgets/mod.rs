pub mod spinner;
pub mod summary_card;

pub use spinner::{LoadingIndicator, SpinnerSize};
pub use summary_card::SummaryCard;
