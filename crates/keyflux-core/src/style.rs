//! StyleAccessor: the engine's only window onto the target entity.
//!
//! Hosts implement this against their widget/DOM/scene representation. The
//! engine treats returned style strings as opaque until coerced (see `delta`).

use hashbrown::HashMap;

use crate::data::EntityHandle;

/// Concrete-name -> style-string map returned by `get_style`. Shorthand
/// queries come back expanded (one entry per edge).
pub type StyleMap = HashMap<String, String>;

pub trait StyleAccessor {
    /// Read the current value(s) for `name` on `target`, expanding shorthand
    /// edges. A missing style reads as an empty string (coerces to 0 /
    /// fail-soft white downstream).
    fn get_style(&self, target: &EntityHandle, name: &str) -> StyleMap;

    /// Content-box width: outer box minus both horizontal paddings and
    /// border widths.
    fn inner_width(&self, target: &EntityHandle) -> f32;

    /// Content-box height, same subtraction on the vertical axis.
    fn inner_height(&self, target: &EntityHandle) -> f32;

    /// Apply one computed channel value ("42px", "rgb(1,2,3)", ...).
    fn set_style(&mut self, target: &EntityHandle, name: &str, value: &str);
}
