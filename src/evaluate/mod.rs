mod roll;

pub use roll::RollSpecification;
