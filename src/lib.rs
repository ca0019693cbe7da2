pub mod patch;
pub mod serialization;
pub mod wagner_fischer;
