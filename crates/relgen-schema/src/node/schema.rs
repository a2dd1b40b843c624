use crate::node::{Entity, EnumDef};
use serde::Serialize;
use std::collections::BTreeMap;

///
/// Schema
///
/// The parsed data model: ordered entities and enums plus name-indexed
/// lookups. Built once by the external parser and read-only afterwards;
/// the analyzer only ever borrows it.
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct Schema {
    entities: Vec<Entity>,
    enums: Vec<EnumDef>,

    #[serde(skip)]
    entity_index: BTreeMap<String, usize>,

    #[serde(skip)]
    enum_index: BTreeMap<String, usize>,
}

impl Schema {
    #[must_use]
    pub fn new(entities: Vec<Entity>, enums: Vec<EnumDef>) -> Self {
        let entity_index = entities
            .iter()
            .enumerate()
            .map(|(i, e)| (e.name.clone(), i))
            .collect();
        let enum_index = enums
            .iter()
            .enumerate()
            .map(|(i, e)| (e.name.clone(), i))
            .collect();

        Self {
            entities,
            enums,
            entity_index,
            enum_index,
        }
    }

    /// Entities in declaration order.
    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Enums in declaration order.
    #[must_use]
    pub fn enums(&self) -> &[EnumDef] {
        &self.enums
    }

    #[must_use]
    pub fn get_entity(&self, name: &str) -> Option<&Entity> {
        self.entity_index.get(name).map(|&i| &self.entities[i])
    }

    #[must_use]
    pub fn get_enum(&self, name: &str) -> Option<&EnumDef> {
        self.enum_index.get(name).map(|&i| &self.enums[i])
    }

    #[must_use]
    pub fn has_enum(&self, name: &str) -> bool {
        self.enum_index.contains_key(name)
    }
}
