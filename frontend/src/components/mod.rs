//! UI Components for the receipt upload wizard.
//!
//! # Steps
//! - [`WelcomeStep`] - Introduction, dashboard link and setup guide
//! - [`UploadStep`] - File selection with drag & drop, submission
//! - [`SuccessStep`] - Confirmation with confetti
//!
//! # Shared Components
//! - [`Hero`] - App icon, headline and benefit pills
//! - [`Footer`] - Credits
//! - [`SetupGuide`] - Drive and Sheets setup dialog
//! - [`ProgressIndicator`] - Cosmetic upload progress
//! - [`ToastViewport`] - Notices raised through [`Toasts`]

mod footer;
mod guide;
mod hero;
mod progress;
mod success;
mod toast;
mod upload;
mod welcome;

pub use footer::*;
pub use guide::*;
pub use hero::*;
pub use progress::*;
pub use success::*;
pub use toast::*;
pub use upload::*;
pub use welcome::*;
