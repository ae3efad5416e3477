use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Output};

fn icon_generator(args: &[&OsStr]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_icon_generator"))
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn missing_argument_exits_with_one() {
    let output = icon_generator(&[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("SOURCE_ICON"));
}

#[test]
fn help_exits_successfully() {
    let output = icon_generator(&[OsStr::new("--help")]);

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Example: icon_generator"));
}

#[test]
fn nonexistent_source_exits_with_one() {
    let root = tempfile::tempdir().unwrap();
    let source = root.path().join("absent.png");

    let output = icon_generator(&[source.as_os_str()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("not found"));
}

#[test]
fn undecodable_source_exits_with_one() {
    let root = tempfile::tempdir().unwrap();
    let source = root.path().join("notes.png");
    std::fs::write(&source, b"plain text").unwrap();

    let output = icon_generator(&[source.as_os_str()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unable to load image"));
}

#[test]
fn writes_icon_set_next_to_the_executable() {
    let root = tempfile::tempdir().unwrap();
    let source = root.path().join("source.png");
    image::RgbaImage::from_pixel(64, 64, image::Rgba([240, 80, 20, 255]))
        .save(&source)
        .unwrap();

    let output = icon_generator(&[source.as_os_str()]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("  ✓ Generated icon-16.png (16x16)"));
    assert!(stdout.contains("  ✓ Generated icon-512@2x.png (512x512)"));
    assert!(stdout.contains("All icons generated successfully!"));

    let icon_set = Path::new(env!("CARGO_BIN_EXE_icon_generator"))
        .parent()
        .unwrap()
        .join("Assets.xcassets")
        .join("AppIcon.appiconset");
    let icon = image::open(icon_set.join("icon-1024.png")).unwrap();
    assert_eq!((icon.width(), icon.height()), (1024, 1024));
}
