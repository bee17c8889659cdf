pub mod error;
pub mod flows;

pub mod prelude {
    pub use crate::{error::AppError, flows::*};
}
