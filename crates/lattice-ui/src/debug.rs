use std::fmt::{self, Write};

use lattice_engine::coords::Vec2;

use crate::widget::Element;

/// Renders the tree under `root` as one line per widget, indented by depth.
///
/// Each line shows the widget kind, its caption if any, and its absolute
/// rectangle. Hidden widgets are marked and their subtrees omitted.
///
/// ```text
/// Window [0, 0, 320x240]
///   Label "Audio" [15, 48, 80x16]
///   Panel [35, 70, 270x20] (hidden)
/// ```
pub fn dump_tree(root: &Element) -> String {
    let mut out = String::new();
    // Writing into a `String` cannot fail.
    if let Err(err) = dump(root, Vec2::zero(), 0, &mut out) {
        log::error!("tree dump failed: {err}");
    }
    out
}

fn dump(element: &Element, parent_origin: Vec2, depth: usize, out: &mut impl Write) -> fmt::Result {
    let rect = element.rect().translated(parent_origin);
    write!(out, "{:indent$}{}", "", element.kind(), indent = depth * 2)?;
    if let Some(caption) = element.caption() {
        write!(out, " {caption:?}")?;
    }
    write!(out, " [{}, {}, {}x{}]", rect.origin.x, rect.origin.y, rect.size.width, rect.size.height)?;
    if !element.visible() {
        return writeln!(out, " (hidden)");
    }
    writeln!(out)?;
    for child in element.children() {
        dump(child, rect.origin, depth + 1, out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::label::Label;
    use crate::widgets::panel::Panel;

    #[test]
    fn lines_are_indented_and_absolute() {
        let mut root: Element = Panel::new()
            .size(100.0, 50.0)
            .position(5.0, 5.0)
            .child(Panel::new().size(10.0, 10.0).child(Label::new("Hi")))
            .child(Panel::new().visible(false).child(Panel::new()))
            .into();
        if let Some(child) = root.child_mut(0) {
            child.set_position(Vec2::new(2.0, 3.0));
        }

        let dump = dump_tree(&root);
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Panel [5, 5, 100x50]",
                "  Panel [7, 8, 10x10]",
                "    Label \"Hi\" [7, 8, 0x0]",
                "  Panel [5, 5, 0x0] (hidden)",
            ]
        );
    }

    #[test]
    fn hidden_root_is_a_single_line() {
        let root: Element = Panel::new().visible(false).child(Label::new("Gone")).into();
        assert_eq!(dump_tree(&root), "Panel [0, 0, 0x0] (hidden)\n");
    }
}
