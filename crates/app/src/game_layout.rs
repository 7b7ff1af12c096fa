//! Layout model for the on-screen panels: a status bar, the maze area, and a
//! key-hint footer.

use taffy::prelude::*;
use taffy::{TaffyResult, TaffyTree};

pub struct LayoutNodes {
    root: NodeId,
    status: NodeId,
    maze: NodeId,
    footer: NodeId,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

pub struct FrameLayout {
    pub status: PanelRect,
    pub maze: PanelRect,
    pub footer: PanelRect,
}

pub fn setup_layout(taffy: &mut TaffyTree<()>) -> TaffyResult<LayoutNodes> {
    let status = taffy.new_leaf(Style {
        size: Size { width: percent(1.0), height: length(40.0) },
        margin: taffy::Rect { left: zero(), right: zero(), top: zero(), bottom: length(12.0) },
        ..Default::default()
    })?;
    let maze = taffy.new_leaf(Style { flex_grow: 1.0, ..Default::default() })?;
    let footer = taffy.new_leaf(Style {
        size: Size { width: percent(1.0), height: length(28.0) },
        margin: taffy::Rect { left: zero(), right: zero(), top: length(12.0), bottom: zero() },
        ..Default::default()
    })?;
    let root = taffy.new_with_children(
        Style {
            display: Display::Flex,
            flex_direction: FlexDirection::Column,
            size: Size { width: percent(1.0), height: percent(1.0) },
            padding: taffy::Rect {
                left: length(20.0),
                right: length(20.0),
                top: length(20.0),
                bottom: length(20.0),
            },
            ..Default::default()
        },
        &[status, maze, footer],
    )?;
    Ok(LayoutNodes { root, status, maze, footer })
}

pub fn compute_frame_layout(
    taffy: &mut TaffyTree<()>,
    nodes: &LayoutNodes,
    viewport_width: f32,
    viewport_height: f32,
) -> TaffyResult<FrameLayout> {
    let available_size = Size {
        width: AvailableSpace::Definite(viewport_width),
        height: AvailableSpace::Definite(viewport_height),
    };
    taffy.compute_layout(nodes.root, available_size)?;

    let l_root = taffy.layout(nodes.root)?;
    Ok(FrameLayout {
        status: panel_rect(taffy.layout(nodes.status)?, l_root),
        maze: panel_rect(taffy.layout(nodes.maze)?, l_root),
        footer: panel_rect(taffy.layout(nodes.footer)?, l_root),
    })
}

fn panel_rect(layout: &taffy::Layout, parent: &taffy::Layout) -> PanelRect {
    PanelRect {
        x: parent.location.x + layout.location.x,
        y: parent.location.y + layout.location.y,
        width: layout.size.width,
        height: layout.size.height,
    }
}
