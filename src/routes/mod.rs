mod benefits;
mod health_check;
mod offer_assignments;

pub use benefits::*;
pub use health_check::*;
pub use offer_assignments::*;
