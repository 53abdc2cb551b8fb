mod meta;
pub(crate) use self::meta::OneOrMany;
pub use self::meta::{ApiResponse, Info};

mod character;
pub use self::character::{Character, CharacterID, Gender, Place, Status};
