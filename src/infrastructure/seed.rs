//! Demo catalog inserted at startup when `SEED_DEMO` is set

use chrono::NaiveDate;
use sea_orm::sea_query::OnConflict;
use sea_orm::*;

use crate::codec::normalize;
use crate::models::{evaluation, piece, studio};

const STUDIOS: [(&str, &str, &str); 4] = [
    ("Estudio 1", "email1@email.com", "+34-123456789"),
    ("Estudio 2", "email2@email.com", "+34-234567891"),
    ("Estudio 3", "email3@email.com", "+1-123456789"),
    ("Estudio 4", "email4@email.com", "+34-987654321"),
];

// (name, date, author, genre, nationality, studio)
const PIECES: [(&str, &str, &str, &str, &str, i32); 4] = [
    ("Piece 1", "2022-12-16", "band", "vocal", "spanish", 1),
    ("Piece 2", "2018-11-14", "composer", "instrumental", "spanish", 1),
    ("Piece 3", "1987-07-13", "band", "intrumental", "french", 2),
    ("Piece 4", "1967-05-22", "composer", "vocal", "english", 2),
];

// (piece, note, date, text)
const EVALUATIONS: [(i32, i32, &str, &str); 4] = [
    (1, 4, "2021-08-11", "The piece is good"),
    (1, 2, "2021-08-11", "The piece is bad"),
    (2, 5, "2022-01-14", "The piece is good"),
    (3, 1, "2017-11-02", "The piece is bad"),
];

fn date(raw: &str) -> Result<NaiveDate, DbErr> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| DbErr::Custom(format!("Invalid seed date {}: {}", raw, e)))
}

// A skipped conflicting row is reported as RecordNotInserted
fn ignore_existing<T>(res: Result<T, DbErr>) -> Result<(), DbErr> {
    match res {
        Ok(_) | Err(DbErr::RecordNotInserted) => Ok(()),
        Err(e) => Err(e),
    }
}

pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<(), DbErr> {
    // Rows are keyed by id so reseeding an existing database is a no-op
    for (i, (name, email, phone)) in STUDIOS.iter().enumerate() {
        let studio = studio::ActiveModel {
            id: Set(i as i32 + 1),
            name: Set(normalize(name)),
            email: Set(normalize(email)),
            phone: Set(normalize(phone)),
        };
        let res = studio::Entity::insert(studio)
            .on_conflict(
                OnConflict::column(studio::Column::Id)
                    .do_nothing()
                    .to_owned(),
            )
            .exec(db)
            .await;
        ignore_existing(res)?;
    }

    for (i, (name, day, author, genre, nationality, studio)) in PIECES.iter().enumerate() {
        let piece = piece::ActiveModel {
            id: Set(i as i32 + 1),
            name: Set(normalize(name)),
            date: Set(date(day)?),
            author: Set(normalize(author)),
            genre: Set(normalize(genre)),
            nationality: Set(normalize(nationality)),
            studio: Set(Some(*studio)),
            summary: Set(Some(normalize("This piece..."))),
        };
        let res = piece::Entity::insert(piece)
            .on_conflict(
                OnConflict::column(piece::Column::Id)
                    .do_nothing()
                    .to_owned(),
            )
            .exec(db)
            .await;
        ignore_existing(res)?;
    }

    for (i, (piece, note, day, text)) in EVALUATIONS.iter().enumerate() {
        let evaluation = evaluation::ActiveModel {
            id: Set(i as i32 + 1),
            piece: Set(*piece),
            note: Set(*note),
            date: Set(date(day)?),
            text: Set(normalize(text)),
        };
        let res = evaluation::Entity::insert(evaluation)
            .on_conflict(
                OnConflict::column(evaluation::Column::Id)
                    .do_nothing()
                    .to_owned(),
            )
            .exec(db)
            .await;
        ignore_existing(res)?;
    }

    tracing::info!(
        "Seeded {} studios, {} pieces, {} evaluations",
        STUDIOS.len(),
        PIECES.len(),
        EVALUATIONS.len()
    );
    Ok(())
}
