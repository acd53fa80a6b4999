pub mod countries;
pub mod value_objects;
