pub mod charts;
pub mod map;
pub mod metrics;
pub mod sidebar;
pub mod tables;
