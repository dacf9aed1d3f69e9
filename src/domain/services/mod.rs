mod coordinate_validator;

pub use coordinate_validator::{validate_coordinates, validate_coordinates_value};
