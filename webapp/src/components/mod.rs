pub mod counter;
pub mod icons;
pub mod modal;
pub mod navigation;
