//! PreviewHost over real files with open buffers on top.

use crate::helpers::theme_fixtures::*;
use gtkcolor::{FsLoader, PreviewHost};

#[test]
fn test_end_to_end_decorations() {
    let theme = ThemeDir::with_files(&[("gtk.css", ENTRY_USING_ACCENT), ("vars.css", ACCENT_VARS)]);
    let mut host = PreviewHost::new(FsLoader::new());

    let plan = host.decorations(theme.path("gtk.css")).unwrap();
    assert_eq!(plan.markers.len(), 1);
    assert_eq!(plan.markers[0].name, "accent");
    assert_eq!(plan.markers[0].color.to_hex(), "#336699");

    let group = plan.background("#336699FF").expect("background group");
    assert_eq!(group.foreground, "#ffffff");
    assert_eq!(group.ranges, vec![plan.markers[0].range]);
}

#[test]
fn test_unsaved_edit_overrides_disk() {
    let theme = ThemeDir::with_files(&[("gtk.css", ENTRY_USING_ACCENT), ("vars.css", ACCENT_VARS)]);
    let mut host = PreviewHost::default();
    let entry = theme.path("gtk.css");

    assert_eq!(host.decorations(&entry).unwrap().markers.len(), 1);

    host.set_file_content(theme.path("vars.css"), "@define-color accent #fafafa;");
    let plan = host.decorations(&entry).unwrap();
    assert_eq!(plan.markers[0].color.to_hex(), "#fafafa");
    assert_eq!(plan.backgrounds[0].foreground, "#000000");
}

#[test]
fn test_external_change_needs_invalidate() {
    let theme = ThemeDir::with_files(&[("gtk.css", ENTRY_USING_ACCENT), ("vars.css", ACCENT_VARS)]);
    let mut host = PreviewHost::default();
    let entry = theme.path("gtk.css");
    let _ = host.decorations(&entry).unwrap();

    theme.write("vars.css", "@define-color accent #000000;");
    assert_eq!(host.decorations(&entry).unwrap().markers[0].color.to_hex(), "#336699");

    host.invalidate();
    assert_eq!(host.decorations(&entry).unwrap().markers[0].color.to_hex(), "#000000");
}

#[test]
fn test_palette_aliases_are_not_followed() {
    let theme = ThemeDir::with_files(&[
        (
            "gtk.css",
            "@import 'palette';\n.btn { background: @accent_bg_color; color: @light_1; }",
        ),
        ("palette.css", PALETTE),
    ]);
    let mut host = PreviewHost::default();
    let plan = host.decorations(theme.path("gtk.css")).unwrap();

    // `accent_bg_color` is bound to `@blue_3`, which the codec cannot read
    let names: Vec<_> = plan.markers.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["light_1"]);
}

#[test]
fn test_hover_across_import() {
    let theme = ThemeDir::with_files(&[("gtk.css", ENTRY_USING_ACCENT), ("vars.css", ACCENT_VARS)]);
    let host = PreviewHost::default();

    // `@accent` starts at column 29
    let result = host.hover(theme.path("gtk.css"), 0, 31).unwrap().expect("hover");
    assert_eq!(result.value, "#336699");
    assert_eq!((result.start_col, result.end_col), (29, 36));
    assert!(result.contents.starts_with("**accent** = #336699"));
}
