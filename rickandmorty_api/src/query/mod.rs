mod common;
pub use self::common::{Query, QueryCommon};

mod character;
pub use self::character::CharacterQuery;
