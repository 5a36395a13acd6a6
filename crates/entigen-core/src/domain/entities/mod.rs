pub mod entity;
pub mod layout;
pub mod params;
pub mod report;
pub mod template;
