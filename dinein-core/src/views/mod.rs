//! Per-screen view state
//!
//! Each screen owns a small struct with its own toggles (password
//! visibility, picker and modal flags). Nothing here is shared between
//! screens; session changes leave a view only as `SessionCommandPayload`
//! intents.

mod home;
mod login;
mod reservation;
mod sign_up;

pub use home::HomeView;
pub use login::LoginView;
pub use reservation::ReservationView;
pub use sign_up::SignUpView;
