pub mod contact_icons;
pub mod globe;

pub use contact_icons::*;
pub use globe::*;
