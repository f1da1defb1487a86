//! Join table placing layout objects inside sections.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{layout_object, section};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "section_layout_object")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub section_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub layout_object_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Section,
    LayoutObject,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Section => Entity::belongs_to(section::Entity).from(Column::SectionId).to(section::Column::Id).into(),
            Relation::LayoutObject => Entity::belongs_to(layout_object::Entity).from(Column::LayoutObjectId).to(layout_object::Column::Id).into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}
