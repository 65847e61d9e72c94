//! Per-pair instantiations of the generic association components. Each
//! store is a thin adapter over its junction table or foreign key; the
//! shared behavior lives in `crate::link` and `crate::attributed`.

mod album_performer;
mod band_musician;
mod collector_album;
mod collector_performer;
mod performer_album;
mod performer_prize;

pub use album_performer::{album_bands, album_musicians, AlbumPerformersStore};
pub use band_musician::{band_musicians, BandMusiciansStore};
pub use collector_album::{collector_albums, CollectorAlbumsStore};
pub use collector_performer::{collector_performers, CollectorPerformersStore};
pub use performer_album::{band_albums, musician_albums, PerformerAlbumsStore};
pub use performer_prize::{find_all_performer_prizes, prize_performers, PrizePerformersStore};
