use crate::album::AlbumService;
use crate::band::BandService;
use crate::errors::ServiceError;
use crate::links::{
    album_bands, album_musicians, band_albums, band_musicians, collector_performers,
    musician_albums,
};
use crate::collector::CollectorService;
use crate::musician::MusicianService;
use crate::test_support::{album_payload, band_payload, collector_payload, db, musician_payload};

#[tokio::test]
async fn add_then_find_one_returns_the_related_record() {
    let db = db().await;
    let albums = AlbumService::new(db.clone());
    let bands = BandService::new(db.clone());
    let link = album_bands(db.clone());

    let album = albums.create(&album_payload("Siembra")).await.unwrap();
    let band = bands.create(&band_payload("Fania All-Stars")).await.unwrap();

    let members = link.add(album.id, band.id).await.unwrap();
    assert_eq!(members.len(), 1);

    let found = link.find_one(album.id, band.id).await.unwrap();
    assert_eq!(found.id, band.id);
    assert_eq!(found.name, "Fania All-Stars");
}

#[tokio::test]
async fn find_one_distinguishes_missing_from_unlinked() {
    let db = db().await;
    let albums = AlbumService::new(db.clone());
    let bands = BandService::new(db.clone());
    let link = album_bands(db.clone());

    let album = albums.create(&album_payload("Siembra")).await.unwrap();
    let band = bands.create(&band_payload("Fania All-Stars")).await.unwrap();

    // Nonexistent endpoints: NOT_FOUND
    assert!(matches!(link.find_one(99, band.id).await, Err(ServiceError::NotFound(_))));
    assert!(matches!(link.find_one(album.id, 99).await, Err(ServiceError::NotFound(_))));

    // Both exist but are not linked: PRECONDITION_FAILED
    let err = link.find_one(album.id, band.id).await.unwrap_err();
    match err {
        ServiceError::PreconditionFailed(msg) => {
            assert_eq!(msg, "The band with the given id is not associated to the album")
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn list_filters_members_by_kind() {
    let db = db().await;
    let albums = AlbumService::new(db.clone());
    let bands = BandService::new(db.clone());
    let musicians = MusicianService::new(db.clone());

    let album = albums.create(&album_payload("Collabs")).await.unwrap();
    let band = bands.create(&band_payload("Fania All-Stars")).await.unwrap();
    let musician = musicians.create(&musician_payload("Willie Colón")).await.unwrap();

    album_bands(db.clone()).add(album.id, band.id).await.unwrap();
    album_musicians(db.clone()).add(album.id, musician.id).await.unwrap();

    let listed_bands = album_bands(db.clone()).list(album.id).await.unwrap();
    assert_eq!(listed_bands.len(), 1);
    assert_eq!(listed_bands[0].id, band.id);

    let listed_musicians = album_musicians(db.clone()).list(album.id).await.unwrap();
    assert_eq!(listed_musicians.len(), 1);
    assert_eq!(listed_musicians[0].id, musician.id);

    // The album DTO still carries the mixed performer list
    assert_eq!(albums.find_one(album.id).await.unwrap().performers.len(), 2);
}

#[tokio::test]
async fn associate_replaces_the_member_list_wholesale() {
    let db = db().await;
    let albums = AlbumService::new(db.clone());
    let bands = BandService::new(db.clone());
    let link = album_bands(db.clone());

    let album = albums.create(&album_payload("Compilation")).await.unwrap();
    let a = bands.create(&band_payload("Band A")).await.unwrap();
    let b = bands.create(&band_payload("Band B")).await.unwrap();
    let c = bands.create(&band_payload("Band C")).await.unwrap();

    link.add(album.id, a.id).await.unwrap();

    let members = link.associate(album.id, &[b.id, c.id]).await.unwrap();
    let mut ids: Vec<i32> = members.iter().map(|m| m.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![b.id, c.id]);
}

#[tokio::test]
async fn associate_with_missing_id_leaves_list_unchanged() {
    let db = db().await;
    let albums = AlbumService::new(db.clone());
    let bands = BandService::new(db.clone());
    let link = album_bands(db.clone());

    let album = albums.create(&album_payload("Compilation")).await.unwrap();
    let a = bands.create(&band_payload("Band A")).await.unwrap();
    let b = bands.create(&band_payload("Band B")).await.unwrap();

    link.add(album.id, a.id).await.unwrap();

    let err = link.associate(album.id, &[b.id, 999]).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));

    // No partial replacement happened
    let members = link.list(album.id).await.unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].id, a.id);
}

#[tokio::test]
async fn remove_unlinks_the_pair() {
    let db = db().await;
    let albums = AlbumService::new(db.clone());
    let bands = BandService::new(db.clone());
    let link = album_bands(db.clone());

    let album = albums.create(&album_payload("Siembra")).await.unwrap();
    let band = bands.create(&band_payload("Fania All-Stars")).await.unwrap();

    link.add(album.id, band.id).await.unwrap();
    let remaining = link.remove(album.id, band.id).await.unwrap();
    assert!(remaining.is_empty());
    assert!(link.list(album.id).await.unwrap().is_empty());

    // Removing the pair again is harmless; both records still exist
    assert!(link.remove(album.id, band.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn reverse_side_sees_the_same_junction() {
    let db = db().await;
    let albums = AlbumService::new(db.clone());
    let bands = BandService::new(db.clone());
    let musicians = MusicianService::new(db.clone());

    let album = albums.create(&album_payload("Collabs")).await.unwrap();
    let band = bands.create(&band_payload("Fania All-Stars")).await.unwrap();
    let musician = musicians.create(&musician_payload("Willie Colón")).await.unwrap();

    band_albums(db.clone()).add(band.id, album.id).await.unwrap();
    musician_albums(db.clone()).add(musician.id, album.id).await.unwrap();

    // Visible from the album side with the matching kind
    assert_eq!(album_bands(db.clone()).list(album.id).await.unwrap().len(), 1);
    assert_eq!(album_musicians(db.clone()).list(album.id).await.unwrap().len(), 1);

    let albums_of_band = band_albums(db.clone()).list(band.id).await.unwrap();
    assert_eq!(albums_of_band.len(), 1);
    assert_eq!(albums_of_band[0].id, album.id);
}

#[tokio::test]
async fn band_musician_link_rewrites_the_foreign_key() {
    let db = db().await;
    let bands = BandService::new(db.clone());
    let musicians = MusicianService::new(db.clone());
    let link = band_musicians(db.clone());

    let band = bands.create(&band_payload("Fania All-Stars")).await.unwrap();
    let musician = musicians.create(&musician_payload("Willie Colón")).await.unwrap();

    link.add(band.id, musician.id).await.unwrap();
    assert_eq!(
        musicians.find_one(musician.id).await.unwrap().musician.band_id,
        Some(band.id)
    );
    let found = link.find_one(band.id, musician.id).await.unwrap();
    assert_eq!(found.id, musician.id);

    // The band DTO lists its musicians
    assert_eq!(bands.find_one(band.id).await.unwrap().musicians.len(), 1);

    let remaining = link.remove(band.id, musician.id).await.unwrap();
    assert!(remaining.is_empty());
    assert_eq!(musicians.find_one(musician.id).await.unwrap().musician.band_id, None);
}

#[tokio::test]
async fn band_musician_associate_reassigns_membership() {
    let db = db().await;
    let bands = BandService::new(db.clone());
    let musicians = MusicianService::new(db.clone());
    let link = band_musicians(db.clone());

    let band = bands.create(&band_payload("Fania All-Stars")).await.unwrap();
    let a = musicians.create(&musician_payload("Willie Colón")).await.unwrap();
    let b = musicians.create(&musician_payload("Héctor Lavoe")).await.unwrap();

    link.add(band.id, a.id).await.unwrap();
    let members = link.associate(band.id, &[b.id]).await.unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].id, b.id);
    assert_eq!(musicians.find_one(a.id).await.unwrap().musician.band_id, None);
}

#[tokio::test]
async fn collector_favorite_performers_accept_any_kind() {
    let db = db().await;
    let collectors = CollectorService::new(db.clone());
    let bands = BandService::new(db.clone());
    let musicians = MusicianService::new(db.clone());
    let link = collector_performers(db.clone());

    let collector = collectors.create(&collector_payload("Ana")).await.unwrap();
    let band = bands.create(&band_payload("Fania All-Stars")).await.unwrap();
    let musician = musicians.create(&musician_payload("Willie Colón")).await.unwrap();

    link.add(collector.id, band.id).await.unwrap();
    link.add(collector.id, musician.id).await.unwrap();

    assert_eq!(link.list(collector.id).await.unwrap().len(), 2);

    // Mirrored on the collector DTO
    assert_eq!(
        collectors.find_one(collector.id).await.unwrap().favorite_performers.len(),
        2
    );

    link.remove(collector.id, band.id).await.unwrap();
    let remaining = link.list(collector.id).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, musician.id);
}
