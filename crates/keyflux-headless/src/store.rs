//! In-memory style store with box-model semantics.
//!
//! Each entity carries an outer box (width/height) plus a flat style map.
//! Reads expand shorthands into concrete edge entries; `inner_width` /
//! `inner_height` subtract both paddings and border widths from the outer
//! box, i.e. they measure the content box.

use hashbrown::HashMap;

use keyflux_core::{coerce_px, property, EntityHandle, StyleAccessor, StyleMap};

#[derive(Clone, Debug, Default)]
struct Entity {
    styles: HashMap<String, String>,
    width: f32,
    height: f32,
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStyleAccessor {
    entities: HashMap<EntityHandle, Entity>,
}

impl MemoryStyleAccessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entity with its outer box dimensions.
    pub fn insert(&mut self, handle: impl Into<EntityHandle>, width: f32, height: f32) {
        self.entities.insert(
            handle.into(),
            Entity {
                styles: HashMap::new(),
                width,
                height,
            },
        );
    }

    /// Seed a style outside of playback (test/demo setup).
    pub fn set(&mut self, handle: &str, name: &str, value: &str) {
        if let Some(entity) = self.entities.get_mut(handle) {
            entity.styles.insert(name.to_string(), value.to_string());
        }
    }

    pub fn style(&self, handle: &str, name: &str) -> Option<&str> {
        self.entities
            .get(handle)
            .and_then(|e| e.styles.get(name))
            .map(String::as_str)
    }

    fn style_px(&self, entity: &Entity, name: &str) -> f32 {
        entity.styles.get(name).map_or(0.0, |v| coerce_px(v))
    }
}

impl StyleAccessor for MemoryStyleAccessor {
    fn get_style(&self, target: &EntityHandle, name: &str) -> StyleMap {
        let mut map = StyleMap::new();
        let Some(entity) = self.entities.get(target) else {
            return map;
        };
        let concrete: &[&str] = match property::expand(name) {
            Some(edges) => edges,
            None => std::slice::from_ref(&name),
        };
        for c in concrete {
            if let Some(v) = entity.styles.get(*c) {
                map.insert((*c).to_string(), v.clone());
            }
        }
        map
    }

    fn inner_width(&self, target: &EntityHandle) -> f32 {
        let Some(entity) = self.entities.get(target) else {
            log::warn!("inner_width on unknown entity '{target}'");
            return 0.0;
        };
        let outer = entity
            .styles
            .get("width")
            .map_or(entity.width, |v| coerce_px(v));
        outer
            - self.style_px(entity, "paddingLeft")
            - self.style_px(entity, "paddingRight")
            - self.style_px(entity, "borderLeftWidth")
            - self.style_px(entity, "borderRightWidth")
    }

    fn inner_height(&self, target: &EntityHandle) -> f32 {
        let Some(entity) = self.entities.get(target) else {
            log::warn!("inner_height on unknown entity '{target}'");
            return 0.0;
        };
        let outer = entity
            .styles
            .get("height")
            .map_or(entity.height, |v| coerce_px(v));
        outer
            - self.style_px(entity, "paddingTop")
            - self.style_px(entity, "paddingBottom")
            - self.style_px(entity, "borderTopWidth")
            - self.style_px(entity, "borderBottomWidth")
    }

    fn set_style(&mut self, target: &EntityHandle, name: &str, value: &str) {
        if let Some(entity) = self.entities.get_mut(target) {
            entity.styles.insert(name.to_string(), value.to_string());
        } else {
            log::warn!("set_style on unknown entity '{target}'");
        }
    }
}
