// Components module - reusable UI building blocks
//
// Overlays drawn on top of the detail screen.

pub mod toast;

pub use toast::Toast;
