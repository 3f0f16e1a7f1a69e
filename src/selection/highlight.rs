//! Opacity targets for the selected and deselected states.

use crate::options::SelectionOptions;
use crate::scene::{NodeId, SceneGraph};

/// Opacity every node should fade to.
///
/// With a selection, the selected node and permanent overlays stay fully
/// opaque and everything else dims. Without one, everything is restored.
#[must_use]
pub fn highlight_plan(
    nodes: Vec<NodeId>,
    selected: Option<&str>,
    options: &SelectionOptions,
) -> Vec<(NodeId, f32)> {
    nodes
        .into_iter()
        .map(|node| {
            let opacity = match selected {
                Some(sel) if node != sel && !options.is_permanent(&node) => {
                    options.dimmed_opacity
                }
                _ => 1.0,
            };
            (node, opacity)
        })
        .collect()
}

/// Fade the scene to the highlight state for `selected`.
pub fn apply_highlight<S: SceneGraph + ?Sized>(
    scene: &mut S,
    selected: Option<&str>,
    options: &SelectionOptions,
) {
    let fade = Some(options.fade());
    for (node, opacity) in highlight_plan(scene.node_ids(), selected, options)
    {
        scene.set_node_opacity(&node, opacity, fade);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nodes() -> Vec<NodeId> {
        ["Liver", "Heart", "Skeletal", "Spot", "Lungs"]
            .into_iter()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn test_selection_dims_everything_but_selected_and_permanent() {
        let plan =
            highlight_plan(nodes(), Some("Liver"), &SelectionOptions::default());
        let expected: [(&str, f32); 5] = [
            ("Liver", 1.0),
            ("Heart", 0.2),
            ("Skeletal", 1.0),
            ("Spot", 1.0),
            ("Lungs", 0.2),
        ];
        for ((node, opacity), (want_node, want)) in plan.iter().zip(expected) {
            assert_eq!(node, want_node);
            assert_eq!(*opacity, want, "{node}");
        }
    }

    #[test]
    fn test_no_selection_restores_everything() {
        let plan = highlight_plan(nodes(), None, &SelectionOptions::default());
        assert!(plan.iter().all(|(_, opacity)| *opacity == 1.0));
        assert_eq!(plan.len(), 5);
    }
}
