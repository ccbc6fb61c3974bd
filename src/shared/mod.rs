pub mod icons;
pub mod modal;
pub mod tabs;
