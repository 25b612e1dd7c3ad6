use sea_orm::{entity::prelude::*, ActiveModelTrait, ConnectionTrait, NotSet, QueryFilter, Set, Statement};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors;
use crate::validation::{FieldError, FieldErrorKind, ObjectReader, ValidationError};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "companies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub location: String,
    pub employee_number: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Create-input representation: every field except the storage-assigned id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCompany {
    pub name: String,
    pub location: String,
    pub employee_number: i64,
}

/// Full representation returned by every read and write.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub employee_number: i64,
}

impl NewCompany {
    /// Validate a create payload. Unknown members are ignored.
    pub fn from_json(value: &Value) -> Result<Self, ValidationError> {
        let mut r = ObjectReader::new(value)?;
        let parsed = Self::read(&mut r);
        r.finish()?;
        // `finish` passed, so every field was read.
        parsed.ok_or_else(ValidationError::default)
    }

    /// Validate an update payload for the record at `path_id`.
    ///
    /// The body may carry the full representation; its `id`, when present,
    /// must match the path because ids never change.
    pub fn from_update_json(value: &Value, path_id: i32) -> Result<Self, ValidationError> {
        let mut r = ObjectReader::new(value)?;
        if let Some(body_id) = r.optional_integer("id") {
            if body_id != i64::from(path_id) {
                r.push(FieldError::new(
                    "id",
                    FieldErrorKind::Invalid,
                    format!("id is immutable; expected {path_id} or omitted"),
                ));
            }
        }
        let parsed = Self::read(&mut r);
        r.finish()?;
        // `finish` passed, so every field was read.
        parsed.ok_or_else(ValidationError::default)
    }

    fn read(r: &mut ObjectReader<'_>) -> Option<Self> {
        let name = r.string("name");
        let location = r.string("location");
        let employee_number = r.integer("employee_number");
        Some(Self { name: name?, location: location?, employee_number: employee_number? })
    }

    pub fn with_id(self, id: i32) -> Company {
        Company {
            id,
            name: self.name,
            location: self.location,
            employee_number: self.employee_number,
        }
    }

    pub fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            name: Set(self.name),
            location: Set(self.location),
            employee_number: Set(self.employee_number),
        }
    }

}

impl Company {
    pub fn into_input(self) -> NewCompany {
        NewCompany {
            name: self.name,
            location: self.location,
            employee_number: self.employee_number,
        }
    }
}

impl From<Model> for Company {
    fn from(m: Model) -> Self {
        Self { id: m.id, name: m.name, location: m.location, employee_number: m.employee_number }
    }
}

pub async fn create<C: ConnectionTrait>(db: &C, input: NewCompany) -> Result<Model, errors::ModelError> {
    input
        .into_active_model()
        .insert(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Overwrite every mutable column of row `id`; `None` when no such row exists.
///
/// The UPDATE is the first statement issued, so inside a transaction the
/// write lock is taken before anything is read.
pub async fn overwrite<C: ConnectionTrait>(
    db: &C,
    id: i32,
    input: NewCompany,
) -> Result<Option<Model>, errors::ModelError> {
    let res = Entity::update_many()
        .set(input.into_active_model())
        .filter(Column::Id.eq(id))
        .exec(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    if res.rows_affected == 0 {
        return Ok(None);
    }
    Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Delete row `id` and hand back its last state; `None` when no such row exists.
pub async fn remove<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<Model>, errors::ModelError> {
    let stmt = Statement::from_sql_and_values(
        db.get_database_backend(),
        "DELETE FROM companies WHERE id = ? RETURNING id, name, location, employee_number",
        [id.into()],
    );
    Entity::find()
        .from_raw_sql(stmt)
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_valid_payload() {
        let c = NewCompany::from_json(&json!({"name": "Acme", "location": "NYC", "employee_number": 10})).unwrap();
        assert_eq!(c, NewCompany { name: "Acme".into(), location: "NYC".into(), employee_number: 10 });
    }

    #[test]
    fn reports_all_missing_fields() {
        let err = NewCompany::from_json(&json!({"name": "Acme"})).unwrap_err();
        assert_eq!(err.field_names(), vec!["location", "employee_number"]);
        assert!(err.fields.iter().all(|f| f.kind == FieldErrorKind::Missing));
    }

    #[test]
    fn rejects_wrong_types() {
        let err = NewCompany::from_json(&json!({"name": 5, "location": "NYC", "employee_number": "10"})).unwrap_err();
        assert_eq!(err.field_names(), vec!["name", "employee_number"]);
        assert!(err.fields.iter().all(|f| f.kind == FieldErrorKind::TypeError));
    }

    #[test]
    fn create_payload_ignores_id() {
        let c = NewCompany::from_json(&json!({"id": 99, "name": "A", "location": "B", "employee_number": 1})).unwrap();
        assert_eq!(c.with_id(3).id, 3);
    }

    #[test]
    fn update_payload_accepts_matching_or_absent_id() {
        let body = json!({"id": 4, "name": "A", "location": "B", "employee_number": 1});
        assert!(NewCompany::from_update_json(&body, 4).is_ok());
        let body = json!({"name": "A", "location": "B", "employee_number": 1});
        assert!(NewCompany::from_update_json(&body, 4).is_ok());
    }

    #[test]
    fn update_payload_rejects_changed_id() {
        let body = json!({"id": 5, "name": "A", "location": "B", "employee_number": 1});
        let err = NewCompany::from_update_json(&body, 4).unwrap_err();
        assert_eq!(err.field_names(), vec!["id"]);
        assert_eq!(err.fields[0].kind, FieldErrorKind::Invalid);
    }

    #[test]
    fn full_representation_round_trips_through_input() {
        let full = Company { id: 7, name: "Acme".into(), location: "NYC".into(), employee_number: 12 };
        assert_eq!(full.clone().into_input().with_id(7), full);
    }

    #[test]
    fn serializes_full_representation() {
        let m = Model { id: 1, name: "Acme".into(), location: "NYC".into(), employee_number: 10 };
        let v = serde_json::to_value(Company::from(m)).unwrap();
        assert_eq!(v, json!({"id": 1, "name": "Acme", "location": "NYC", "employee_number": 10}));
    }
}
