pub mod discover;

pub mod prelude {
    pub use super::discover::prelude::*;
}
