use crate::album::AlbumService;
use crate::band::BandService;
use crate::collector::CollectorService;
use crate::errors::ServiceError;
use crate::links::{collector_albums, find_all_performer_prizes, prize_performers};
use crate::prize::PrizeService;
use crate::test_support::{album_payload, band_payload, collector_payload, db};
use models::collector_album::CollectorAlbumPayload;
use models::performer_prize::PerformerPrizePayload;
use models::prize::PrizePayload;

fn owned(price: i32, status: &str) -> CollectorAlbumPayload {
    CollectorAlbumPayload { price, status: status.into() }
}

#[tokio::test]
async fn collector_album_add_requires_both_endpoints_and_valid_attrs() {
    let db = db().await;
    let collectors = CollectorService::new(db.clone());
    let albums = AlbumService::new(db.clone());
    let link = collector_albums(db.clone());

    let collector = collectors.create(&collector_payload("Ana")).await.unwrap();
    let album = albums.create(&album_payload("Siembra")).await.unwrap();

    assert!(matches!(
        link.add(99, album.id, &owned(10, "Active")).await,
        Err(ServiceError::NotFound(_))
    ));
    assert!(matches!(
        link.add(collector.id, 99, &owned(10, "Active")).await,
        Err(ServiceError::NotFound(_))
    ));
    assert!(matches!(
        link.add(collector.id, album.id, &owned(10, "Sold")).await,
        Err(ServiceError::BadRequest(_))
    ));
    assert!(matches!(
        link.add(collector.id, album.id, &owned(-5, "Active")).await,
        Err(ServiceError::BadRequest(_))
    ));

    let created = link.add(collector.id, album.id, &owned(25, "Active")).await.unwrap();
    assert!(created.id > 0);
    assert_eq!(created.collector_id, collector.id);
    assert_eq!(created.album_id, album.id);
    assert_eq!(created.price, 25);
}

#[tokio::test]
async fn collector_album_find_returns_empty_for_unlinked_pair() {
    let db = db().await;
    let collectors = CollectorService::new(db.clone());
    let albums = AlbumService::new(db.clone());
    let link = collector_albums(db.clone());

    let collector = collectors.create(&collector_payload("Ana")).await.unwrap();
    let album = albums.create(&album_payload("Siembra")).await.unwrap();

    // Both exist, nothing linked: empty list, no error in this family
    assert!(link.find(collector.id, album.id).await.unwrap().is_empty());

    link.add(collector.id, album.id, &owned(25, "Active")).await.unwrap();
    assert_eq!(link.find(collector.id, album.id).await.unwrap().len(), 1);
    assert_eq!(link.list(collector.id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn collector_album_update_overwrites_attrs_only() {
    let db = db().await;
    let collectors = CollectorService::new(db.clone());
    let albums = AlbumService::new(db.clone());
    let link = collector_albums(db.clone());

    let collector = collectors.create(&collector_payload("Ana")).await.unwrap();
    let album = albums.create(&album_payload("Siembra")).await.unwrap();

    // Updating an unlinked pair reports the missing association
    let err = link.update(collector.id, album.id, &owned(30, "Inactive")).await.unwrap_err();
    match err {
        ServiceError::NotFound(msg) => {
            assert_eq!(msg, "The album is not associated to the collector")
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let created = link.add(collector.id, album.id, &owned(25, "Active")).await.unwrap();
    let updated = link.update(collector.id, album.id, &owned(30, "Inactive")).await.unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.price, 30);
    assert_eq!(updated.status, "Inactive");
}

#[tokio::test]
async fn collector_album_remove_deletes_the_link_record() {
    let db = db().await;
    let collectors = CollectorService::new(db.clone());
    let albums = AlbumService::new(db.clone());
    let link = collector_albums(db.clone());

    let collector = collectors.create(&collector_payload("Ana")).await.unwrap();
    let album = albums.create(&album_payload("Siembra")).await.unwrap();

    assert!(matches!(
        link.remove(collector.id, album.id).await,
        Err(ServiceError::NotFound(_))
    ));

    link.add(collector.id, album.id, &owned(25, "Active")).await.unwrap();
    link.remove(collector.id, album.id).await.unwrap();
    assert!(link.list(collector.id).await.unwrap().is_empty());

    // The endpoints themselves survive
    assert!(collectors.find_one(collector.id).await.is_ok());
    assert!(albums.find_one(album.id).await.is_ok());
}

#[tokio::test]
async fn prize_performer_link_carries_the_premiation_date() {
    let db = db().await;
    let prizes = PrizeService::new(db.clone());
    let bands = BandService::new(db.clone());
    let link = prize_performers(db.clone());

    let prize = prizes
        .create(&PrizePayload {
            name: "Grammy".into(),
            description: "Recording Academy award".into(),
            organization: Some("NARAS".into()),
        })
        .await
        .unwrap();
    let band = bands.create(&band_payload("Fania All-Stars")).await.unwrap();

    let attrs = PerformerPrizePayload { premiation_date: Some("1979-02-15".into()) };
    let created = link.add(prize.id, band.id, &attrs).await.unwrap();
    assert_eq!(created.prize_id, prize.id);
    assert_eq!(created.performer_id, band.id);
    assert!(created.premiation_date.is_some());

    let bad = PerformerPrizePayload { premiation_date: Some("the seventies".into()) };
    assert!(matches!(link.add(prize.id, band.id, &bad).await, Err(ServiceError::BadRequest(_))));

    let listed = link.list(prize.id).await.unwrap();
    assert_eq!(listed.len(), 1);

    assert_eq!(find_all_performer_prizes(&db).await.unwrap().len(), 1);

    link.remove(prize.id, band.id).await.unwrap();
    assert!(link.list(prize.id).await.unwrap().is_empty());
}
