/// One required output icon: a square edge length and the file it is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManifestEntry {
    pub edge: u32,
    pub filename: &'static str,
}

impl ManifestEntry {
    pub const fn new(edge: u32, filename: &'static str) -> Self {
        Self { edge, filename }
    }
}

/// An ordered list of icons to produce from a single source image.
#[derive(Debug, Clone, Copy)]
pub struct Manifest {
    entries: &'static [ManifestEntry],
}

impl Manifest {
    pub const fn new(entries: &'static [ManifestEntry]) -> Self {
        Self { entries }
    }

    /// The icon sizes expected by a macOS `AppIcon.appiconset`.
    pub const fn macos_app_icon() -> Self {
        Self::new(MACOS_APP_ICON)
    }

    pub fn entries(&self) -> &'static [ManifestEntry] {
        self.entries
    }
}

const MACOS_APP_ICON: &[ManifestEntry] = &[
    ManifestEntry::new(16, "icon-16.png"),
    ManifestEntry::new(32, "icon-32.png"),
    ManifestEntry::new(64, "icon-64.png"),
    ManifestEntry::new(128, "icon-128.png"),
    ManifestEntry::new(256, "icon-256.png"),
    ManifestEntry::new(512, "icon-512.png"),
    ManifestEntry::new(1024, "icon-1024.png"),
    // 16x16@2x
    ManifestEntry::new(32, "icon-32@2x.png"),
    // 128x128@2x
    ManifestEntry::new(256, "icon-256@2x.png"),
    // 256x256@2x
    ManifestEntry::new(512, "icon-512@2x.png"),
];
