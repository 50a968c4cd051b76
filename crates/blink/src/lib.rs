//! Blink landing core
//!
//! Turns the `url` parameter of a landing page load into either a desktop
//! redirect to the dial.to interstitial or a mobile wallet picker.

pub mod codec;
pub mod device;
pub mod landing;
pub mod links;
pub mod metadata;
pub mod unwrap;

pub use codec::*;
pub use device::*;
pub use landing::*;
pub use links::*;
pub use metadata::*;
pub use unwrap::*;
