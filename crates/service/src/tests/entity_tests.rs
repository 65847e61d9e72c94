use crate::album::AlbumService;
use crate::band::BandService;
use crate::collector::CollectorService;
use crate::comment::CommentService;
use crate::errors::ServiceError;
use crate::musician::MusicianService;
use crate::prize::PrizeService;
use crate::track::TrackService;
use crate::test_support::{album_payload, band_payload, collector_payload, db, musician_payload};
use models::comment::CommentPayload;
use models::prize::PrizePayload;
use models::track::TrackPayload;

#[tokio::test]
async fn album_create_then_get_returns_matching_fields() {
    let db = db().await;
    let svc = AlbumService::new(db.clone());

    let created = svc.create(&album_payload("Abbey Road")).await.unwrap();
    assert!(created.id > 0);

    let fetched = svc.find_one(created.id).await.unwrap();
    assert_eq!(fetched.album.name, "Abbey Road");
    assert_eq!(fetched.album.genre, "Rock");
    assert_eq!(fetched.album.record_label, "EMI");
    assert!(fetched.tracks.is_empty());
    assert!(fetched.performers.is_empty());
}

#[tokio::test]
async fn album_create_rejects_genre_outside_enumeration() {
    let db = db().await;
    let svc = AlbumService::new(db.clone());

    let mut payload = album_payload("Thriller");
    payload.genre = "Pop".into();
    let err = svc.create(&payload).await.unwrap_err();
    assert!(matches!(err, ServiceError::BadRequest(_)));

    // No write happened
    assert!(svc.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn album_create_rejects_missing_required_field() {
    let db = db().await;
    let svc = AlbumService::new(db.clone());

    let mut payload = album_payload("Untitled");
    payload.name = "".into();
    assert!(matches!(svc.create(&payload).await, Err(ServiceError::BadRequest(_))));

    let mut payload = album_payload("Bad Date");
    payload.release_date = "not-a-date".into();
    assert!(matches!(svc.create(&payload).await, Err(ServiceError::BadRequest(_))));

    assert!(svc.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn album_get_unknown_id_is_not_found() {
    let db = db().await;
    let svc = AlbumService::new(db.clone());
    let err = svc.find_one(42).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[tokio::test]
async fn album_update_keeps_id_and_changes_fields() {
    let db = db().await;
    let svc = AlbumService::new(db.clone());

    let created = svc.create(&album_payload("Kind of Blue")).await.unwrap();
    let mut payload = album_payload("Kind of Blue (Remastered)");
    payload.genre = "Classical".into();
    let updated = svc.update(created.id, &payload).await.unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Kind of Blue (Remastered)");
    assert_eq!(updated.genre, "Classical");
}

#[tokio::test]
async fn album_delete_then_get_is_not_found() {
    let db = db().await;
    let svc = AlbumService::new(db.clone());

    let created = svc.create(&album_payload("Nevermind")).await.unwrap();
    svc.delete(created.id).await.unwrap();
    assert!(matches!(svc.find_one(created.id).await, Err(ServiceError::NotFound(_))));
}

#[tokio::test]
async fn band_and_musician_ids_do_not_cross_resolve() {
    let db = db().await;
    let bands = BandService::new(db.clone());
    let musicians = MusicianService::new(db.clone());

    let band = bands.create(&band_payload("Fania All-Stars")).await.unwrap();
    let musician = musicians.create(&musician_payload("Willie Colón")).await.unwrap();

    // A band id is not a musician id, and vice versa
    assert!(matches!(musicians.find_one(band.id).await, Err(ServiceError::NotFound(_))));
    assert!(matches!(bands.find_one(musician.id).await, Err(ServiceError::NotFound(_))));

    assert_eq!(bands.find_one(band.id).await.unwrap().band.name, "Fania All-Stars");
}

#[tokio::test]
async fn band_create_requires_creation_date() {
    let db = db().await;
    let svc = BandService::new(db.clone());

    let mut payload = band_payload("The Unknowns");
    payload.creation_date = "".into();
    assert!(matches!(svc.create(&payload).await, Err(ServiceError::BadRequest(_))));
}

#[tokio::test]
async fn musician_birth_date_is_optional() {
    let db = db().await;
    let svc = MusicianService::new(db.clone());

    let mut payload = musician_payload("Rubén Blades");
    payload.birth_date = None;
    let created = svc.create(&payload).await.unwrap();
    assert!(created.birth_date.is_none());
}

#[tokio::test]
async fn collector_crud_roundtrip() {
    let db = db().await;
    let svc = CollectorService::new(db.clone());

    let created = svc.create(&collector_payload("Ana")).await.unwrap();
    let fetched = svc.find_one(created.id).await.unwrap();
    assert_eq!(fetched.collector.email, "collector@example.com");

    let mut payload = collector_payload("Ana María");
    payload.telephone = "555-0199".into();
    let updated = svc.update(created.id, &payload).await.unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.telephone, "555-0199");

    svc.delete(created.id).await.unwrap();
    assert!(matches!(svc.find_one(created.id).await, Err(ServiceError::NotFound(_))));
}

#[tokio::test]
async fn prize_requires_name_and_description() {
    let db = db().await;
    let svc = PrizeService::new(db.clone());

    let payload = PrizePayload {
        name: "Grammy".into(),
        description: "".into(),
        organization: None,
    };
    assert!(matches!(svc.create(&payload).await, Err(ServiceError::BadRequest(_))));

    let payload = PrizePayload {
        name: "Grammy".into(),
        description: "Recording Academy award".into(),
        organization: Some("NARAS".into()),
    };
    let created = svc.create(&payload).await.unwrap();
    assert_eq!(svc.find_one(created.id).await.unwrap().prize.name, "Grammy");
}

#[tokio::test]
async fn track_create_requires_existing_album() {
    let db = db().await;
    let albums = AlbumService::new(db.clone());
    let tracks = TrackService::new(db.clone());

    let payload = TrackPayload { name: "Come Together".into(), duration: 4 };
    assert!(matches!(tracks.create(99, &payload).await, Err(ServiceError::NotFound(_))));

    let album = albums.create(&album_payload("Abbey Road")).await.unwrap();
    let track = tracks.create(album.id, &payload).await.unwrap();
    assert_eq!(track.album_id, album.id);

    // Appears on the album's eager track list
    let dto = albums.find_one(album.id).await.unwrap();
    assert_eq!(dto.tracks.len(), 1);

    let bad = TrackPayload { name: "Silence".into(), duration: 0 };
    assert!(matches!(tracks.create(album.id, &bad).await, Err(ServiceError::BadRequest(_))));
}

#[tokio::test]
async fn comment_lifecycle_under_album() {
    let db = db().await;
    let albums = AlbumService::new(db.clone());
    let collectors = CollectorService::new(db.clone());
    let comments = CommentService::new(db.clone());

    let album = albums.create(&album_payload("Siembra")).await.unwrap();
    let other = albums.create(&album_payload("Blue Train")).await.unwrap();
    let collector = collectors.create(&collector_payload("Ana")).await.unwrap();

    let payload = CommentPayload {
        description: "a classic".into(),
        rating: 5,
        collector_id: collector.id,
    };
    let comment = comments.add(album.id, &payload).await.unwrap();

    // Rating outside 0..=5 is rejected
    let bad = CommentPayload { description: "meh".into(), rating: 6, collector_id: collector.id };
    assert!(matches!(comments.add(album.id, &bad).await, Err(ServiceError::BadRequest(_))));

    // Unknown collector is rejected before validation
    let ghost = CommentPayload { description: "who".into(), rating: 3, collector_id: 999 };
    assert!(matches!(comments.add(album.id, &ghost).await, Err(ServiceError::NotFound(_))));

    // Lookup under the wrong album reports the association as missing
    let err = comments.find_one(other.id, comment.id).await.unwrap_err();
    match err {
        ServiceError::NotFound(msg) => {
            assert_eq!(msg, "The comment is not associated to the album")
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let listed = comments.find_by_album(album.id).await.unwrap();
    assert_eq!(listed.len(), 1);

    comments.delete(album.id, comment.id).await.unwrap();
    assert!(comments.find_by_album(album.id).await.unwrap().is_empty());
}
