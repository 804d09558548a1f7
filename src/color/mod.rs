pub mod state;

pub use state::ColorState;
