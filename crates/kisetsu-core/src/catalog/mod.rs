pub mod api;
pub mod ids;
pub mod kind;
pub mod season;

pub use api::SeasonApi;
pub use ids::{AlbumId, SeasonId, SingerId, SongId};
pub use kind::EntityKind;
pub use season::Season;
