//! Import resolution over real files.

use crate::helpers::table_assertions::*;
use crate::helpers::theme_fixtures::*;
use gtkcolor::{ColorResolver, FsLoader, ResolveError};

fn resolver() -> ColorResolver<FsLoader> {
    ColorResolver::new(FsLoader::new())
}

#[test]
fn test_single_file_last_definition_wins() {
    let theme = ThemeDir::with_files(&[(
        "gtk.css",
        "@define-color x red;\n@define-color y #fff;\n@define-color x blue;",
    )]);
    let table = resolver().resolve(theme.path("gtk.css")).unwrap();
    assert_table_eq(&table, &[("x", "blue"), ("y", "#fff")]);
}

#[test]
fn test_end_to_end_scenario() {
    let theme = ThemeDir::with_files(&[("gtk.css", ENTRY_USING_ACCENT), ("vars.css", ACCENT_VARS)]);
    let table = resolver().resolve(theme.path("gtk.css")).unwrap();
    assert_table_eq(&table, &[("accent", "#336699")]);
}

#[test]
fn test_cycle_produces_union() {
    let theme = ThemeDir::with_files(&[
        ("a.css", "@import 'b';\n@define-color from_a #aaa;"),
        ("b.css", "@import 'a';\n@define-color from_b #bbb;"),
    ]);
    let resolution = resolver().resolution(theme.path("a.css")).unwrap();
    assert_table_eq(&resolution.table, &[("from_a", "#aaa"), ("from_b", "#bbb")]);
    assert_eq!(resolution.visited.len(), 2);
}

#[test]
fn test_diamond_visits_shared_file_once() {
    let theme = ThemeDir::with_files(&[
        ("a.css", "@import 'b.css'; @import 'c.css';"),
        ("b.css", "@import 'shared/d.css';"),
        ("c.css", "@import './shared/d';"),
        ("shared/d.css", "@define-color d #ddd;"),
    ]);
    let resolution = resolver().resolution(theme.path("a.css")).unwrap();
    let d = theme.path("shared/d.css");
    assert_eq!(resolution.visited.iter().filter(|p| **p == d).count(), 1);
    assert_defined(&resolution.table, "d", "#ddd");
}

#[test]
fn test_missing_import_keeps_siblings() {
    let theme = ThemeDir::with_files(&[
        (
            "gtk.css",
            "@import \"./missing.css\";\n@import \"vars.css\";\n@import '../outside/nothing';",
        ),
        ("vars.css", ACCENT_VARS),
    ]);
    let table = resolver().resolve(theme.path("gtk.css")).unwrap();
    assert_table_eq(&table, &[("accent", "#336699")]);
}

#[test]
fn test_imported_palette_keeps_raw_values() {
    let theme = ThemeDir::with_files(&[
        ("gtk-4.0/gtk.css", "@import '../palette.css';\n@define-color window_bg_color @light_1;"),
        ("palette.css", PALETTE),
    ]);
    let table = resolver().resolve(theme.path("gtk-4.0/gtk.css")).unwrap();
    assert_eq!(table.len(), 7);
    assert_defined(&table, "accent_bg_color", "@blue_3");
    assert_defined(&table, "borders_color", "alpha(@dark_5, 0.15)");
    assert_defined(&table, "window_bg_color", "@light_1");
}

#[test]
fn test_entry_unreadable() {
    let theme = ThemeDir::new();
    let err = resolver().resolve(theme.root().join("gtk.css")).unwrap_err();
    assert!(matches!(err, ResolveError::EntryUnreadable { .. }));
}
