mod account;
mod money;
mod statement;
mod user;

pub use account::*;
pub use money::*;
pub use statement::*;
pub use user::*;
