//! Domain-level command types.
//!
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. The REST layer maps the public DTOs defined
//! in the `shared` crate to these internal types.

pub mod projection {
    /// Input for a completion-time projection.
    #[derive(Debug, Clone)]
    pub struct ProjectCompletionCommand {
        pub required_amount: f64,
        pub current_amount: f64,
        pub rate_per_hour: f64,
        /// IANA timezone identifier used for displaying the completion time.
        pub timezone: String,
    }
}
