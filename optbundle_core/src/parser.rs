mod base;
mod middleware;

pub use self::base::*;
pub(crate) use self::middleware::*;
