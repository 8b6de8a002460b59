pub mod interactive;
pub mod sensor_reader;
