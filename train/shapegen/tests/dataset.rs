use std::{
    fs,
    path::{Path, PathBuf},
};

use shapegen::{GenCfg, GenError, ShapeKind, generate, load_dataset};
use tempfile::TempDir;

fn cfg(out_dir: &Path, count: u32, seed: u64) -> GenCfg {
    GenCfg {
        out_dir: out_dir.to_path_buf(),
        count,
        seed: Some(seed),
        ..GenCfg::default()
    }
}

fn data_root() -> (TempDir, PathBuf) {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("Data");
    (tmp, root)
}

fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    names.sort();
    names
}

#[test]
fn five_per_category() {
    let (tmp, root) = data_root();
    let summary = generate(&cfg(&root, 5, 1)).unwrap();
    assert_eq!(summary.count, 5);

    let expected: Vec<String> = (0..5).map(|i| format!("{i}.png")).collect();
    for kind in ShapeKind::ALL {
        assert_eq!(file_names(&root.join(kind.dir_name())), expected, "{kind}");
        assert_eq!(summary.per_kind[&kind], 5);
    }

    let mut top = file_names(&root);
    top.retain(|n| n != "labels.jsonl");
    assert_eq!(top, ["Circle", "Rectangle", "Square", "Triangle"]);
    // staging directory was published, not left behind
    assert_eq!(file_names(tmp.path()), ["Data"]);
}

#[test]
fn rerun_clears_previous_files() {
    let (_tmp, root) = data_root();
    generate(&cfg(&root, 20, 2)).unwrap();
    assert!(root.join("Circle").join("19.png").exists());

    generate(&cfg(&root, 5, 3)).unwrap();
    let expected: Vec<String> = (0..5).map(|i| format!("{i}.png")).collect();
    for kind in ShapeKind::ALL {
        assert_eq!(file_names(&root.join(kind.dir_name())), expected);
    }
    assert!(!root.join("Circle").join("05.png").exists());
}

#[test]
fn padding_and_contiguous_indices() {
    let (_tmp, root) = data_root();
    generate(&cfg(&root, 12, 4)).unwrap();
    let expected: Vec<String> = (0..12).map(|i| format!("{i:02}.png")).collect();
    for kind in ShapeKind::ALL {
        assert_eq!(file_names(&root.join(kind.dir_name())), expected);
    }
}

#[test]
fn loader_sees_balanced_white_rasters() {
    let (_tmp, root) = data_root();
    generate(&cfg(&root, 6, 5)).unwrap();

    let items = load_dataset(&root).unwrap();
    assert_eq!(items.len(), 24);
    for kind in ShapeKind::ALL {
        assert_eq!(items.iter().filter(|i| i.label == kind).count(), 6);
    }
    for item in &items {
        assert_eq!(item.image.dimensions(), (32, 32));
        // outline only: both background and ink are present
        assert!(item.image.pixels().any(|p| p.0 == [255, 255, 255]));
        assert!(item.image.pixels().any(|p| p.0 != [255, 255, 255]));
    }
}

#[test]
fn same_seed_same_bytes() {
    let (_ta, a) = data_root();
    let (_tb, b) = data_root();
    generate(&cfg(&a, 4, 77)).unwrap();
    generate(&cfg(&b, 4, 77)).unwrap();
    for kind in ShapeKind::ALL {
        for name in file_names(&a.join(kind.dir_name())) {
            let fa = fs::read(a.join(kind.dir_name()).join(&name)).unwrap();
            let fb = fs::read(b.join(kind.dir_name()).join(&name)).unwrap();
            assert_eq!(fa, fb, "{kind}/{name}");
        }
    }
}

#[test]
fn output_does_not_depend_on_thread_count() {
    let (_ta, many) = data_root();
    let (_tb, one) = data_root();
    generate(&cfg(&many, 30, 31)).unwrap();
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(1)
        .build()
        .unwrap();
    pool.install(|| generate(&cfg(&one, 30, 31))).unwrap();

    for kind in ShapeKind::ALL {
        let names = file_names(&many.join(kind.dir_name()));
        assert_eq!(names, file_names(&one.join(kind.dir_name())));
        for name in names {
            let a = fs::read(many.join(kind.dir_name()).join(&name)).unwrap();
            let b = fs::read(one.join(kind.dir_name()).join(&name)).unwrap();
            assert_eq!(a, b, "{kind}/{name}");
        }
    }
    assert_eq!(
        fs::read(many.join("labels.jsonl")).unwrap(),
        fs::read(one.join("labels.jsonl")).unwrap()
    );
}

#[test]
fn manifest_lists_every_sample() {
    let (_tmp, root) = data_root();
    generate(&cfg(&root, 3, 8)).unwrap();

    let text = fs::read_to_string(root.join("labels.jsonl")).unwrap();
    let lines: Vec<serde_json::Value> = text
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 12);
    assert_eq!(lines[0]["image"], "Circle/0.png");
    assert_eq!(lines[0]["label"], "Circle");
    assert_eq!(lines[0]["params"]["shape"], "circle");
    assert_eq!(lines[11]["image"], "Rectangle/2.png");

    for rec in lines.iter().filter(|r| r["label"] == "Rectangle") {
        let w = rec["params"]["width"].as_i64().unwrap();
        let h = rec["params"]["height"].as_i64().unwrap();
        assert!((w - h).abs() > 4);
    }
}

#[test]
fn manifest_can_be_disabled() {
    let (_tmp, root) = data_root();
    let cfg = GenCfg {
        manifest: false,
        ..cfg(&root, 2, 9)
    };
    generate(&cfg).unwrap();
    assert!(!root.join("labels.jsonl").exists());
    assert!(load_dataset(&root).is_ok());
}

#[test]
fn zero_count_leaves_directory_untouched() {
    let (_tmp, root) = data_root();
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("keep.txt"), "old").unwrap();

    let err = generate(&cfg(&root, 0, 1)).unwrap_err();
    assert!(matches!(err, GenError::InvalidCount(0)));
    assert!(root.join("keep.txt").exists());
}

fn exhausting_cfg(root: &Path) -> GenCfg {
    GenCfg {
        min_vertex_separation: 43.0,
        max_attempts: 20,
        manifest: false,
        ..cfg(root, 3, 1)
    }
}

#[test]
fn exhausted_triangle_sampling_is_an_error() {
    let (_tmp, root) = data_root();
    match generate(&exhausting_cfg(&root)) {
        Err(GenError::SamplingExhausted { kind, attempts }) => {
            assert_eq!(kind, ShapeKind::Triangle);
            assert_eq!(attempts, 20);
        }
        other => panic!("expected exhaustion, got {other:?}"),
    }
    assert!(!root.exists());
}

#[test]
fn failed_run_is_not_a_loadable_dataset() {
    let (tmp, root) = data_root();
    generate(&cfg(&root, 3, 1)).unwrap();
    assert!(generate(&exhausting_cfg(&root)).is_err());

    // the earlier dataset was cleared and the partial one never published
    assert!(load_dataset(&root).is_err());
    assert!(load_dataset(&tmp.path().join("Data.partial")).is_err());
}

#[test]
fn loader_rejects_missing_sample() {
    let (_tmp, root) = data_root();
    generate(&cfg(&root, 4, 6)).unwrap();
    fs::remove_file(root.join("Square").join("2.png")).unwrap();
    assert!(matches!(load_dataset(&root), Err(GenError::Dataset(_))));
}

#[test]
fn loader_rejects_uneven_categories() {
    let (_tmp, root) = data_root();
    generate(&cfg(&root, 4, 6)).unwrap();
    fs::remove_file(root.join("Triangle").join("3.png")).unwrap();
    assert!(matches!(load_dataset(&root), Err(GenError::Dataset(_))));
}

#[test]
fn loader_rejects_unknown_category() {
    let (_tmp, root) = data_root();
    generate(&cfg(&root, 1, 1)).unwrap();
    fs::create_dir(root.join("Hexagon")).unwrap();
    assert!(matches!(load_dataset(&root), Err(GenError::Dataset(_))));
}
