use super::*;
use crate::sequence::natord::NaturalOrder;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_scan").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn touch(dir: &Path, names: &[&str]) {
    for n in names {
        std::fs::write(dir.join(n), b"").unwrap();
    }
}

#[test]
fn image_extension_is_case_insensitive_and_filtered() {
    assert_eq!(image_extension("a.PNG").as_deref(), Some("png"));
    assert_eq!(image_extension("shot.JpEg").as_deref(), Some("jpeg"));
    assert_eq!(image_extension("x.tar.webp").as_deref(), Some("webp"));
    assert_eq!(image_extension("notes.txt"), None);
    assert_eq!(image_extension("README"), None);
    assert_eq!(image_extension("png"), None);
}

#[test]
fn scan_sorts_naturally_and_assigns_ordinals() {
    let dir = scratch_dir("natural");
    touch(&dir, &["image_10.webp", "image_2.webp", "image_1.webp"]);

    let images = scan_dir(&dir, &NaturalOrder).unwrap();
    let names: Vec<&str> = images.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["image_1.webp", "image_2.webp", "image_10.webp"]);
    for (i, img) in images.iter().enumerate() {
        assert_eq!(img.ordinal, i);
        assert_eq!(img.extension, "webp");
    }
}

#[test]
fn scan_keeps_only_image_files() {
    let dir = scratch_dir("mixed");
    touch(&dir, &["b.PNG", "a.webp", "notes.txt", "README.md"]);
    std::fs::create_dir_all(dir.join("nested.png")).unwrap();

    let images = scan_dir(&dir, &NaturalOrder).unwrap();
    assert_eq!(
        images,
        vec![
            SourceImage {
                name: "a.webp".to_string(),
                extension: "webp".to_string(),
                ordinal: 0,
            },
            SourceImage {
                name: "b.PNG".to_string(),
                extension: "png".to_string(),
                ordinal: 1,
            },
        ]
    );
}

#[test]
fn scan_without_images_is_empty_sequence() {
    let dir = scratch_dir("no_images");
    touch(&dir, &["notes.txt", "README.md"]);

    let err = scan_dir(&dir, &NaturalOrder).unwrap_err();
    assert!(matches!(err, SeqError::EmptySequence { .. }));
}

#[test]
fn scan_missing_dir_is_directory_not_found() {
    let dir = PathBuf::from("target").join("unit_scan").join("does_not_exist");
    let _ = std::fs::remove_dir_all(&dir);

    let err = scan_dir(&dir, &NaturalOrder).unwrap_err();
    assert!(matches!(err, SeqError::DirectoryNotFound { .. }));
}
