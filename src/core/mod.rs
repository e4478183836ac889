// Core decode modules: error modeling, value parsing, navigation, algebra, decoders.
pub mod decoded;
pub mod decoder;
pub mod error;
pub mod keypath;
pub mod value;
