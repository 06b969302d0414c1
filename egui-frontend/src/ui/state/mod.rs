pub mod form_state;
pub mod ui_state;

pub use form_state::CalculatorFormState;
pub use ui_state::UiState;
