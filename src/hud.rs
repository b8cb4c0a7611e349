//! Minimap HUD attachment.
//!
//! The overlay element is a transparent, non-interactive child of the minimap
//! container that copies the bounds of the container's first child each
//! frame, so it follows the minimap through resizes.

use crate::constants::*;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HudOverlay {
    pub name: String,
    /// Index of the sibling whose bounds are mirrored.
    pub base: usize,
    pub touchable: bool,
    pub bounds: Bounds,
}

impl HudOverlay {
    pub fn new(base: usize) -> Self {
        HudOverlay {
            name: OVERLAY_NAME.to_string(),
            base,
            touchable: false,
            bounds: Bounds::default(),
        }
    }

    /// Per-frame update: follow the base element.
    pub fn act(&mut self, base: Option<Bounds>) {
        if let Some(bounds) = base {
            self.bounds = bounds;
        }
    }
}

/// A HUD element that can hold children.
pub trait HudContainer {
    fn child_count(&self) -> usize;

    fn has_child(&self, name: &str) -> bool;

    /// Add `overlay` as the front-most child.
    fn attach(&mut self, overlay: HudOverlay);
}

/// The host's root HUD group.
pub trait HudRoot {
    /// The named element, if it exists and is a container.
    fn find_container(&mut self, name: &str) -> Option<&mut dyn HudContainer>;

    /// Remove any element with this name. Returns whether one was found.
    fn remove(&mut self, name: &str) -> bool;
}

/// Attach the overlay under the minimap if it is not already there.
/// Returns whether a new element was attached.
pub fn ensure_attached(root: &mut dyn HudRoot, minimap_enabled: bool) -> bool {
    if !minimap_enabled {
        return false;
    }

    let minimap = match root.find_container(MINIMAP_NAME) {
        Some(container) => container,
        None => return false,
    };

    if minimap.has_child(OVERLAY_NAME) || minimap.child_count() == 0 {
        return false;
    }

    minimap.attach(HudOverlay::new(0));
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Container {
        children: Vec<String>,
        overlays: Vec<HudOverlay>,
    }

    impl HudContainer for Container {
        fn child_count(&self) -> usize {
            self.children.len()
        }

        fn has_child(&self, name: &str) -> bool {
            self.children.iter().any(|c| c == name)
        }

        fn attach(&mut self, overlay: HudOverlay) {
            self.children.push(overlay.name.clone());
            self.overlays.push(overlay);
        }
    }

    #[derive(Default)]
    struct Root {
        minimap: Option<Container>,
    }

    impl HudRoot for Root {
        fn find_container(&mut self, name: &str) -> Option<&mut dyn HudContainer> {
            if name != MINIMAP_NAME {
                return None;
            }
            self.minimap.as_mut().map(|c| c as &mut dyn HudContainer)
        }

        fn remove(&mut self, name: &str) -> bool {
            match self.minimap.as_mut() {
                Some(c) => {
                    let before = c.children.len();
                    c.children.retain(|child| child != name);
                    before != c.children.len()
                }
                None => false,
            }
        }
    }

    fn root_with_map() -> Root {
        Root {
            minimap: Some(Container {
                children: vec!["map".to_string()],
                overlays: Vec::new(),
            }),
        }
    }

    #[test]
    fn attaches_once() {
        let mut root = root_with_map();
        assert!(ensure_attached(&mut root, true));
        assert!(!ensure_attached(&mut root, true));

        let minimap = root.minimap.as_ref().map(|c| c.overlays.len());
        assert_eq!(minimap, Some(1));
    }

    #[test]
    fn skips_when_minimap_hidden_missing_or_empty() {
        let mut root = root_with_map();
        assert!(!ensure_attached(&mut root, false));

        let mut root = Root::default();
        assert!(!ensure_attached(&mut root, true));

        let mut root = Root {
            minimap: Some(Container::default()),
        };
        assert!(!ensure_attached(&mut root, true));
    }

    #[test]
    fn overlay_is_inert_and_follows_base() {
        let mut overlay = HudOverlay::new(0);
        assert!(!overlay.touchable);
        assert_eq!(overlay.name, "bpo-overlay");

        let bounds = Bounds {
            x: 4.0,
            y: 8.0,
            width: 200.0,
            height: 180.0,
        };
        overlay.act(Some(bounds));
        overlay.act(None);
        assert_eq!(overlay.bounds, bounds);
    }
}
