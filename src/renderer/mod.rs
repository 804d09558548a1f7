pub mod swatch;

pub use swatch::SwatchTerminal;
