mod descriptor;
mod options;
mod value;

pub use self::descriptor::*;
pub use self::options::*;
pub use self::value::*;
