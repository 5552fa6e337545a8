//! Bundled seed fixture loaded at startup

use crate::math::Vec2;
use super::{Item, ItemKind};

/// Items present on the desktop when the engine starts
///
/// Desktop positions sit on the 80x80 lattice with a 16px inset:
/// cells (1,1), (2,1), (3,1), (1,2) and (2,2). Folder content positions are
/// free pixel coordinates inside the folder window.
pub fn initial_items() -> Vec<Item> {
    vec![
        Item::folder(
            "1",
            "Oyun Projem",
            ItemKind::FreeFolder,
            "🎮",
            Vec2::new(96.0, 96.0),
            vec![
                Item::file("1-1", "karakter.png", "🖼️", Vec2::new(50.0, 50.0)),
                Item::file("1-2", "silah.png", "🖼️", Vec2::new(200.0, 80.0)),
                Item::file("1-3", "harita.png", "🗺️", Vec2::new(350.0, 120.0)),
                Item {
                    id: "1-4".into(),
                    name: "ses_efektleri".to_string(),
                    kind: ItemKind::Folder,
                    icon: "🔊".to_string(),
                    position: Vec2::new(100.0, 200.0),
                    children: None,
                },
                Item::file("1-5", "kodlar.js", "📄", Vec2::new(300.0, 250.0)),
            ],
        ),
        Item::folder("2", "Belgelerim", ItemKind::Folder, "📁", Vec2::new(176.0, 96.0), vec![]),
        Item::folder(
            "3",
            "Fotoğraflar",
            ItemKind::FreeFolder,
            "📸",
            Vec2::new(256.0, 96.0),
            vec![
                Item::file("3-1", "tatil1.jpg", "🖼️", Vec2::new(80.0, 60.0)),
                Item::file("3-2", "tatil2.jpg", "🖼️", Vec2::new(220.0, 90.0)),
                Item::file("3-3", "aile.jpg", "🖼️", Vec2::new(150.0, 180.0)),
            ],
        ),
        Item::file("4", "müzik.mp3", "🎵", Vec2::new(96.0, 176.0)),
        Item::file("5", "video.mp4", "🎬", Vec2::new(176.0, 176.0)),
    ]
}
