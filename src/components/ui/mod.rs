pub mod alert;
pub mod button;
pub mod rules;
pub mod spinner;

pub use alert::{Alert, AlertKind};
pub use button::Button;
pub use rules::{Rule, RuleList};
pub use spinner::Spinner;
