pub mod convolve;

pub use self::convolve::{load_config, ConvolveToolConfig};
