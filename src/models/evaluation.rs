use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::codec::{DecodedInput, Representation};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "evaluations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub piece: i32,
    pub note: i32,
    pub date: Date,
    pub text: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::piece::Entity",
        from = "Column::Piece",
        to = "super::piece::Column::Id"
    )]
    Piece,
}

impl Related<super::piece::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Piece.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// A scored, dated review of one piece
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub id: Option<i32>,
    pub piece: i32,
    /// Intended 1-5, not range-checked
    pub note: i32,
    pub date: Date,
    pub text: String,
}

impl Evaluation {
    pub fn new(piece: i32, note: i32, date: Date, text: String) -> Self {
        Self {
            id: None,
            piece,
            note,
            date,
            text,
        }
    }

    pub fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: self.id.map_or(NotSet, Set),
            piece: Set(self.piece),
            note: Set(self.note),
            date: Set(self.date),
            text: Set(self.text),
        }
    }
}

impl From<Model> for Evaluation {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            piece: model.piece,
            note: model.note,
            date: model.date,
            text: model.text,
        }
    }
}

impl Representation for Evaluation {
    const ELEMENT: &'static str = "Evaluation";
    const COLLECTION: &'static str = "Evaluations";
    const ROUTE: &'static str = "evaluations";

    fn id(&self) -> Option<i32> {
        self.id
    }

    fn xml_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("piece_id", self.piece.to_string()),
            ("note", self.note.to_string()),
            ("date", self.date.to_string()),
            ("text", self.text.clone()),
        ]
    }

    fn to_json(&self) -> Value {
        json!({
            "url": self.url(),
            "id": self.id,
            "piece_id": self.piece,
            "note": self.note,
            "date": self.date.to_string(),
            "text": self.text,
        })
    }

    fn from_input(input: &DecodedInput) -> Option<Self> {
        Some(Self::new(
            input.integer("piece_id").required()?,
            input.integer("note").required()?,
            input.date("date").required()?,
            input.text("text").required()?,
        ))
    }

    fn merge(&mut self, input: &DecodedInput) {
        input.integer("piece_id").assign(&mut self.piece);
        input.integer("note").assign(&mut self.note);
        input.date("date").assign(&mut self.date);
        input.text("text").assign(&mut self.text);
    }

    fn label(&self) -> String {
        "Evaluation".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::MediaType;

    #[test]
    fn xml_numeric_fields_become_integers() {
        let body = "<Evaluation><piece_id>1</piece_id><note>4</note>\
                    <date>2021-08-11</date><text>The piece is GOOD</text></Evaluation>";
        let input =
            DecodedInput::decode(MediaType::Xml, Evaluation::ELEMENT, body.as_bytes()).unwrap();
        let evaluation = Evaluation::from_input(&input).unwrap();
        assert_eq!(evaluation.piece, 1);
        assert_eq!(evaluation.note, 4);
        assert_eq!(evaluation.text, "the piece is good");
    }

    #[test]
    fn note_out_of_range_is_accepted() {
        let body = r#"[{"piece_id":1,"note":9,"date":"2021-08-11","text":"x"}]"#;
        let input =
            DecodedInput::decode(MediaType::Json, Evaluation::ELEMENT, body.as_bytes()).unwrap();
        assert_eq!(Evaluation::from_input(&input).map(|e| e.note), Some(9));
    }
}
