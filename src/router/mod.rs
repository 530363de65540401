mod matcher;
mod entry;
mod error;
mod params;
mod pattern;
mod table;

pub use self::entry::{RouteEntry, RouteMatch};
pub use self::error::RouterError;
pub use self::params::Params;
pub use self::pattern::{PatternKind, RoutePattern, Segment};
pub use self::table::RouteTable;

pub(crate) use self::table::{accepting_match, all_matches, route_methods, Entries};
