pub mod bezier;
pub mod sphere;
pub mod vec;

pub use bezier::*;
pub use sphere::*;
pub use vec::*;
