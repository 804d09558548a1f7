pub mod dispatcher;
pub mod keys;

pub use dispatcher::{Dispatch, Dispatcher, Surface};
