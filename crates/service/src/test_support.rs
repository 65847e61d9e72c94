#![cfg(test)]
use migration::MigratorTrait;
use models::album::AlbumPayload;
use models::collector::CollectorPayload;
use models::performer::{BandPayload, MusicianPayload};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Fresh in-memory SQLite store with the full schema applied. Single
/// connection: every pooled connection would otherwise get its own empty
/// memory database.
pub async fn db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:".to_owned());
    opts.max_connections(1);
    let db = Database::connect(opts).await.expect("connect sqlite memory");
    migration::Migrator::up(&db, None).await.expect("migrate up");
    db
}

pub fn album_payload(name: &str) -> AlbumPayload {
    AlbumPayload {
        name: name.into(),
        cover: "http://covers.example/a.png".into(),
        release_date: "2020-01-01".into(),
        description: "a record".into(),
        genre: "Rock".into(),
        record_label: "EMI".into(),
    }
}

pub fn band_payload(name: &str) -> BandPayload {
    BandPayload {
        name: name.into(),
        image: None,
        description: "a band".into(),
        creation_date: "1990-05-20".into(),
    }
}

pub fn musician_payload(name: &str) -> MusicianPayload {
    MusicianPayload {
        name: name.into(),
        image: None,
        description: "a musician".into(),
        birth_date: Some("1960-11-03".into()),
    }
}

pub fn collector_payload(name: &str) -> CollectorPayload {
    CollectorPayload {
        name: name.into(),
        telephone: "555-0100".into(),
        email: "collector@example.com".into(),
    }
}
