use crate::album::{AlbumPayload, GENRES, RECORD_LABELS};
use crate::collector::CollectorPayload;
use crate::collector_album::CollectorAlbumPayload;
use crate::comment::CommentPayload;
use crate::errors::ModelError;
use crate::performer::{BandPayload, MusicianPayload};
use crate::performer_prize::PerformerPrizePayload;
use crate::prize::PrizePayload;
use crate::track::TrackPayload;
use chrono::NaiveDate;

fn album() -> AlbumPayload {
    AlbumPayload {
        name: "Siembra".into(),
        cover: "http://covers.example/siembra.png".into(),
        release_date: "1978-10-05".into(),
        description: "salsa landmark".into(),
        genre: "Salsa".into(),
        record_label: "Fania Records".into(),
    }
}

#[test]
fn album_accepts_every_declared_genre_and_label() {
    for genre in GENRES {
        for label in RECORD_LABELS {
            let mut p = album();
            p.genre = genre.into();
            p.record_label = label.into();
            assert!(p.validate().is_ok(), "rejected {genre}/{label}");
        }
    }
}

#[test]
fn album_parses_the_release_date() {
    let date = album().validate().unwrap();
    assert_eq!(date, NaiveDate::from_ymd_opt(1978, 10, 5).unwrap());
}

#[test]
fn album_rejects_unknown_genre() {
    let mut p = album();
    p.genre = "Pop".into();
    let err = p.validate().unwrap_err();
    let ModelError::Validation(msg) = err else { panic!("expected validation error") };
    assert!(msg.contains("genre"));
}

#[test]
fn album_rejects_unknown_record_label() {
    let mut p = album();
    p.record_label = "Motown".into();
    assert!(p.validate().is_err());
}

#[test]
fn album_rejects_blank_required_fields() {
    for field in ["name", "cover", "description"] {
        let mut p = album();
        match field {
            "name" => p.name = "  ".into(),
            "cover" => p.cover = String::new(),
            _ => p.description = String::new(),
        }
        let ModelError::Validation(msg) = p.validate().unwrap_err() else {
            panic!("expected validation error")
        };
        assert!(msg.contains(field), "message {msg:?} should name {field}");
    }
}

#[test]
fn album_rejects_malformed_date() {
    let mut p = album();
    p.release_date = "05/10/1978".into();
    assert!(p.validate().is_err());
}

#[test]
fn band_requires_creation_date_but_not_image() {
    let p = BandPayload {
        name: "Fania All-Stars".into(),
        image: None,
        description: "salsa collective".into(),
        creation_date: "1968-01-01".into(),
    };
    assert!(p.validate().is_ok());

    let mut bad = p.clone();
    bad.creation_date = "soon".into();
    assert!(bad.validate().is_err());
}

#[test]
fn musician_birth_date_is_optional_but_checked_when_present() {
    let mut p = MusicianPayload {
        name: "Willie Colón".into(),
        image: Some("http://img.example/wc.png".into()),
        description: "trombonist".into(),
        birth_date: None,
    };
    assert_eq!(p.validate().unwrap(), None);

    p.birth_date = Some("1950-04-28".into());
    assert!(p.validate().unwrap().is_some());

    p.birth_date = Some("april".into());
    assert!(p.validate().is_err());
}

#[test]
fn collector_requires_all_contact_fields() {
    let p = CollectorPayload {
        name: "Ana".into(),
        telephone: "555-0100".into(),
        email: "ana@example.com".into(),
    };
    assert!(p.validate().is_ok());

    let mut bad = p.clone();
    bad.email = String::new();
    assert!(bad.validate().is_err());
}

#[test]
fn prize_organization_is_optional() {
    let p = PrizePayload {
        name: "Grammy".into(),
        description: "Recording Academy award".into(),
        organization: None,
    };
    assert!(p.validate().is_ok());
}

#[test]
fn track_duration_must_be_positive() {
    let p = TrackPayload { name: "Pedro Navaja".into(), duration: 7 };
    assert!(p.validate().is_ok());

    let p = TrackPayload { name: "Pedro Navaja".into(), duration: -1 };
    assert!(p.validate().is_err());
}

#[test]
fn comment_rating_bounds_are_inclusive() {
    for rating in 0..=5 {
        let p = CommentPayload {
            description: "great".into(),
            rating,
            collector_id: 1,
        };
        assert!(p.validate().is_ok(), "rejected rating {rating}");
    }
    for rating in [-1, 6] {
        let p = CommentPayload {
            description: "great".into(),
            rating,
            collector_id: 1,
        };
        assert!(p.validate().is_err(), "accepted rating {rating}");
    }
}

#[test]
fn collector_album_status_is_enumerated() {
    assert!(CollectorAlbumPayload { price: 10, status: "Active".into() }.validate().is_ok());
    assert!(CollectorAlbumPayload { price: 10, status: "Inactive".into() }.validate().is_ok());
    assert!(CollectorAlbumPayload { price: 10, status: "Sold".into() }.validate().is_err());
    assert!(CollectorAlbumPayload { price: -1, status: "Active".into() }.validate().is_err());
}

#[test]
fn performer_prize_date_is_optional() {
    assert_eq!(
        PerformerPrizePayload { premiation_date: None }.validate().unwrap(),
        None
    );
    assert!(PerformerPrizePayload { premiation_date: Some("1979-02-15".into()) }
        .validate()
        .unwrap()
        .is_some());
    assert!(PerformerPrizePayload { premiation_date: Some("later".into()) }
        .validate()
        .is_err());
}
