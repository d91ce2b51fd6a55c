use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::codec::{DecodedInput, Representation};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pieces")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub date: Date,
    pub author: String,
    pub genre: String,
    pub nationality: String,
    pub studio: Option<i32>,
    pub summary: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::studio::Entity",
        from = "Column::Studio",
        to = "super::studio::Column::Id"
    )]
    Studio,
    #[sea_orm(has_many = "super::evaluation::Entity")]
    Evaluations,
}

impl Related<super::studio::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Studio.def()
    }
}

impl Related<super::evaluation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Evaluations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// A cataloged musical work
#[derive(Debug, Clone, PartialEq)]
pub struct Piece {
    pub id: Option<i32>,
    pub name: String,
    pub date: Date,
    /// Free-form category such as "band" or "composer"
    pub author: String,
    pub genre: String,
    pub nationality: String,
    pub studio: Option<i32>,
    pub summary: Option<String>,
}

impl Piece {
    pub fn new(
        name: String,
        date: Date,
        author: String,
        genre: String,
        nationality: String,
        studio: Option<i32>,
        summary: Option<String>,
    ) -> Self {
        Self {
            id: None,
            name,
            date,
            author,
            genre,
            nationality,
            studio,
            summary,
        }
    }

    pub fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: self.id.map_or(NotSet, Set),
            name: Set(self.name),
            date: Set(self.date),
            author: Set(self.author),
            genre: Set(self.genre),
            nationality: Set(self.nationality),
            studio: Set(self.studio),
            summary: Set(self.summary),
        }
    }
}

impl From<Model> for Piece {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            name: model.name,
            date: model.date,
            author: model.author,
            genre: model.genre,
            nationality: model.nationality,
            studio: model.studio,
            summary: model.summary,
        }
    }
}

impl Representation for Piece {
    const ELEMENT: &'static str = "Piece";
    const COLLECTION: &'static str = "Pieces";
    const ROUTE: &'static str = "pieces";

    fn id(&self) -> Option<i32> {
        self.id
    }

    fn xml_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("piece_name", self.name.clone()),
            ("date", self.date.to_string()),
            ("author", self.author.clone()),
            ("genre", self.genre.clone()),
            ("nationality", self.nationality.clone()),
            ("studio", self.studio.map(|s| s.to_string()).unwrap_or_default()),
            ("summary", self.summary.clone().unwrap_or_default()),
        ]
    }

    fn to_json(&self) -> Value {
        json!({
            "url": self.url(),
            "id": self.id,
            "piece_name": self.name,
            "date": self.date.to_string(),
            "author": self.author,
            "genre": self.genre,
            "nationality": self.nationality,
            "studio": self.studio,
            "summary": self.summary,
        })
    }

    fn from_input(input: &DecodedInput) -> Option<Self> {
        Some(Self::new(
            input.text("piece_name").required()?,
            input.date("date").required()?,
            input.text("author").required()?,
            input.text("genre").required()?,
            input.text("nationality").required()?,
            input.integer("studio").optional()?,
            input.text("summary").optional()?,
        ))
    }

    fn merge(&mut self, input: &DecodedInput) {
        input.text("piece_name").assign(&mut self.name);
        input.date("date").assign(&mut self.date);
        input.text("author").assign(&mut self.author);
        input.text("genre").assign(&mut self.genre);
        input.text("nationality").assign(&mut self.nationality);
        input.integer("studio").assign_nullable(&mut self.studio);
        input.text("summary").assign_nullable(&mut self.summary);
    }

    fn label(&self) -> String {
        format!("Piece {}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::MediaType;

    fn decode(media: MediaType, body: &str) -> DecodedInput {
        DecodedInput::decode(media, Piece::ELEMENT, body.as_bytes()).unwrap()
    }

    #[test]
    fn json_input_is_normalized() {
        let input = decode(
            MediaType::Json,
            r#"[{"piece_name":"Piece 5 ","date":"2011-12-27","author":"Band","genre":"Vocal","nationality":"Spanish","studio":1,"summary":"This Piece..."}]"#,
        );
        let piece = Piece::from_input(&input).unwrap();
        assert_eq!(piece.id, None);
        assert_eq!(piece.name, "piece 5");
        assert_eq!(piece.author, "band");
        assert_eq!(piece.studio, Some(1));
        assert_eq!(piece.summary.as_deref(), Some("this piece..."));
    }

    #[test]
    fn missing_required_field_yields_no_record() {
        let input = decode(
            MediaType::Xml,
            "<Piece><piece_name>x</piece_name><date>2020-01-01</date></Piece>",
        );
        assert!(Piece::from_input(&input).is_none());
    }

    #[test]
    fn studio_and_summary_are_optional() {
        let input = decode(
            MediaType::Xml,
            "<Piece><piece_name>X</piece_name><date>2020-01-01</date><author>band</author>\
             <genre>vocal</genre><nationality>french</nationality></Piece>",
        );
        let piece = Piece::from_input(&input).unwrap();
        assert_eq!(piece.studio, None);
        assert_eq!(piece.summary, None);
    }

    #[test]
    fn merge_keeps_absent_and_malformed_fields() {
        let mut piece = Piece::new(
            "piece 1".into(),
            Date::from_ymd_opt(2022, 12, 16).unwrap(),
            "band".into(),
            "vocal".into(),
            "spanish".into(),
            Some(1),
            None,
        );
        let input = decode(
            MediaType::Json,
            r#"[{"genre":"Instrumental","date":"not a date","studio":"two"}]"#,
        );
        piece.merge(&input);
        assert_eq!(piece.genre, "instrumental");
        assert_eq!(piece.date, Date::from_ymd_opt(2022, 12, 16).unwrap());
        assert_eq!(piece.studio, Some(1));
        assert_eq!(piece.name, "piece 1");
    }

    #[test]
    fn url_tracks_current_id() {
        let mut piece = Piece::new(
            "x".into(),
            Date::from_ymd_opt(2020, 1, 1).unwrap(),
            "band".into(),
            "vocal".into(),
            "spanish".into(),
            None,
            None,
        );
        piece.id = Some(7);
        assert_eq!(piece.url(), "/api/pieces/7");
        let xml = piece.to_xml();
        assert!(xml.starts_with("<Piece><uri>/api/pieces/7</uri><id>7</id>"));
        assert!(xml.contains("<piece_name>x</piece_name>"));
        assert_eq!(piece.to_json()["url"], "/api/pieces/7");
    }
}
