pub mod fixture;
pub mod schedule;
pub mod settings;
pub mod table;
pub mod team;

pub use fixture::*;
pub use schedule::*;
pub use settings::*;
pub use table::*;
pub use team::*;
