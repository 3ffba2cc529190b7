use anyhow::{Context, Result};
use lattice_engine::logging::{init_logging, LoggingConfig};
use lattice_ui::prelude::*;

const FONT_PATHS: [&str; 5] = [
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
];

const VIEWPORTS: [(f32, f32); 3] = [(320.0, 240.0), (640.0, 480.0), (1024.0, 768.0)];

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut scene = LayoutScene::new();
    let font = match find_font() {
        Some((path, bytes)) => {
            let id = scene.load_font(&bytes).with_context(|| format!("loading {path}"))?;
            log::info!("measuring text with {path}");
            id
        }
        None => {
            log::warn!("no system font found, labels fall back to estimated metrics");
            FontId::default()
        }
    };

    let mut root = settings_form(font);

    let natural = scene.fit(&mut root);
    log::info!("natural size {}x{}\n{}", natural.width, natural.height, dump_tree(&root));

    for (w, h) in VIEWPORTS {
        scene.layout(&mut root, Size::new(w, h));
        log::info!("viewport {w}x{h}\n{}", dump_tree(&root));
    }
    Ok(())
}

fn find_font() -> Option<(&'static str, Vec<u8>)> {
    FONT_PATHS.iter().find_map(|p| std::fs::read(p).ok().map(|bytes| (*p, bytes)))
}

// ── Sample form ───────────────────────────────────────────────────────────

fn settings_form(font: FontId) -> Element {
    let heading = |text: &str| Label::new(text).font(font).font_size(18.0);
    let caption = |text: &str| Label::new(text).font(font);

    Window::new("Settings")
        .layout(GroupLayout::default())
        .child(heading("Display"))
        .child(
            Panel::new()
                .layout(
                    GridLayout::new(Orientation::Horizontal, 2)
                        .spacing(6.0)
                        .alignment(Alignment::Minimum),
                )
                .child(caption("Resolution"))
                .child(Panel::new().fixed_size(120.0, 22.0))
                .child(caption("Refresh rate"))
                .child(Panel::new().fixed_size(80.0, 22.0))
                .child(caption("HDR"))
                .child(Panel::new().fixed_size(22.0, 22.0)),
        )
        .child(heading("Audio"))
        .child(
            Panel::new()
                .layout(BoxLayout::new(Orientation::Horizontal, Alignment::Center).spacing(8.0))
                .child(caption("Volume"))
                .child(Panel::new().fixed_size(160.0, 16.0))
                .child(caption("80%")),
        )
        .child(heading("Shortcuts"))
        .child(shortcut_table(caption))
        .child(Label::new(""))
        .child(
            Panel::new()
                .layout(BoxLayout::new(Orientation::Horizontal, Alignment::Fill).spacing(6.0))
                .children([Panel::new().fixed_size(80.0, 26.0), Panel::new().fixed_size(80.0, 26.0)]),
        )
        .into()
}

fn shortcut_table(caption: impl Fn(&str) -> Label) -> Panel {
    let mut grid = AdvancedGridLayout::new(vec![0.0, 10.0, 0.0], Vec::new(), 0.0);
    grid.set_col_stretch(2, 1.0);

    let mut table = Panel::new();
    for (row, (action, keys)) in [("Save", "Ctrl+S"), ("Open", "Ctrl+O"), ("Quit", "Ctrl+Q")].into_iter().enumerate() {
        grid.append_row(0.0, 0.0);
        grid.set_anchor(2 * row, Anchor::new(0, row).align(Alignment::Minimum, Alignment::Center));
        grid.set_anchor(2 * row + 1, Anchor::new(2, row).align(Alignment::Maximum, Alignment::Center));
        table = table.child(caption(action)).child(caption(keys));
    }
    table.layout(grid)
}
