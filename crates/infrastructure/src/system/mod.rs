pub mod dig_resolver;

pub use dig_resolver::DigResolver;
