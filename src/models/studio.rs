use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::codec::{DecodedInput, Representation};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "studios")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    #[sea_orm(unique)]
    pub phone: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::piece::Entity")]
    Pieces,
}

impl Related<super::piece::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pieces.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// The organization credited with producing pieces
#[derive(Debug, Clone, PartialEq)]
pub struct Studio {
    pub id: Option<i32>,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Studio {
    pub fn new(name: String, email: String, phone: String) -> Self {
        Self {
            id: None,
            name,
            email,
            phone,
        }
    }

    pub fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: self.id.map_or(NotSet, Set),
            name: Set(self.name),
            email: Set(self.email),
            phone: Set(self.phone),
        }
    }
}

impl From<Model> for Studio {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            name: model.name,
            email: model.email,
            phone: model.phone,
        }
    }
}

impl Representation for Studio {
    const ELEMENT: &'static str = "Studio";
    const COLLECTION: &'static str = "Studios";
    const ROUTE: &'static str = "studios";

    fn id(&self) -> Option<i32> {
        self.id
    }

    fn xml_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("studio_name", self.name.clone()),
            ("email", self.email.clone()),
            ("phone", self.phone.clone()),
        ]
    }

    fn to_json(&self) -> Value {
        json!({
            "url": self.url(),
            "id": self.id,
            "studio_name": self.name,
            "email": self.email,
            "phone": self.phone,
        })
    }

    fn from_input(input: &DecodedInput) -> Option<Self> {
        Some(Self::new(
            input.text("studio_name").required()?,
            input.text("email").required()?,
            input.text("phone").required()?,
        ))
    }

    fn merge(&mut self, input: &DecodedInput) {
        input.text("studio_name").assign(&mut self.name);
        input.text("email").assign(&mut self.email);
        input.text("phone").assign(&mut self.phone);
    }

    fn label(&self) -> String {
        format!("Studio {}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::MediaType;

    #[test]
    fn xml_round_trip_of_string_fields() {
        let body = "<Studio><studio_name>Studio 5</studio_name>\
                    <email>Email5@Email.com</email><phone>+99-123456789</phone></Studio>";
        let input = DecodedInput::decode(MediaType::Xml, Studio::ELEMENT, body.as_bytes()).unwrap();
        let mut studio = Studio::from_input(&input).unwrap();
        assert_eq!(studio.email, "email5@email.com");

        studio.id = Some(5);
        let rendered = studio.to_xml();
        let again = DecodedInput::decode(MediaType::Xml, Studio::ELEMENT, rendered.as_bytes())
            .unwrap();
        assert_eq!(Studio::from_input(&again).map(|s| s.name), Some("studio 5".to_string()));
    }

    #[test]
    fn json_shape_uses_wire_names() {
        let mut studio = Studio::new("a".into(), "b".into(), "c".into());
        studio.id = Some(2);
        let json = studio.to_json();
        assert_eq!(json["url"], "/api/studios/2");
        assert_eq!(json["studio_name"], "a");
        assert!(json.get("name").is_none());
    }
}
