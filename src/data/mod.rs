pub mod size;
pub mod speed;
pub mod verb;
