pub mod animation;
pub mod components;
pub mod entity;
pub mod gallery;
pub mod navigation;
pub mod prefabs;
pub mod section;
pub mod selection;
pub mod world;

pub use world::*;
