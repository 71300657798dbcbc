use crate::mirror::test_support::{AdditionalInfo, Gallery, User, clark, gallery, superman};
use crate::mirror::{Format, MirrorError, Store, default_file_name, load_tree};

#[test]
fn default_names_derive_from_type() {
	assert_eq!(default_file_name::<User>(Format::Json), "user.json");
	assert_eq!(default_file_name::<AdditionalInfo>(Format::Archive), "additional_info.archive");
	assert_eq!(super::default_stem("HTTPServer2Config"), "http_server2_config");
}

#[test]
fn formats_resolve_from_extensions() {
	assert_eq!(Format::from_path(std::path::Path::new("a/b.json")), Some(Format::Json));
	assert_eq!(Format::from_extension("archive"), Some(Format::Archive));
	assert_eq!(Format::from_extension("plist"), Some(Format::Plist));
	assert_eq!(Format::from_extension("xml"), None);
}

#[test]
fn json_save_and_load_round_trip() {
	let dir = tempfile::tempdir().expect("tempdir");
	let store = Store::new(dir.path().join("nested"));

	let path = store.save(&superman(), Format::Json).expect("saves");
	assert_eq!(path, dir.path().join("nested").join("user.json"));
	assert!(store.exists("user", Format::Json));

	let back: User = store.load(Format::Json).expect("loads");
	assert_eq!(back, superman());
}

#[test]
fn archive_save_and_load_round_trip() {
	let dir = tempfile::tempdir().expect("tempdir");
	let store = Store::new(dir.path());

	store.save(&gallery(), Format::Archive).expect("saves");
	let back: Gallery = store.load(Format::Archive).expect("loads");
	assert_eq!(back, gallery());

	let (format, tree) = load_tree(&store.path_for("gallery", Format::Archive).expect("path")).expect("tree loads");
	assert_eq!(format, Format::Archive);
	assert_eq!(tree.get("tags").and_then(|item| item.at(0)), Some(&crate::mirror::StructuralValue::from(crate::mirror::Scalar::from("b"))));
}

#[test]
fn explicit_names_list_remove() {
	let dir = tempfile::tempdir().expect("tempdir");
	let store = Store::new(dir.path());

	store.save_as(&clark(), "clark", Format::Json).expect("saves json");
	store.save_as(&superman(), "superman", Format::Archive).expect("saves archive");
	std::fs::write(dir.path().join("notes.txt"), "ignored").expect("writes stray file");

	let listed = store.list().expect("lists");
	let names: Vec<_> = listed.iter().map(|item| (item.file_name.as_str(), item.format)).collect();
	assert_eq!(names, [("clark.json", Format::Json), ("superman.archive", Format::Archive)]);
	assert!(listed.iter().all(|item| item.len > 0));

	store.remove("clark", Format::Json).expect("removes");
	assert!(!store.exists("clark", Format::Json));
	let err = store.remove("clark", Format::Json).expect_err("already gone");
	assert!(matches!(err, MirrorError::NotFound { .. }));
}

#[test]
fn missing_root_lists_empty_and_loads_fail() {
	let dir = tempfile::tempdir().expect("tempdir");
	let store = Store::new(dir.path().join("absent"));
	assert!(store.list().expect("lists").is_empty());

	let err = store.load::<User>(Format::Json).expect_err("nothing stored");
	assert!(matches!(err, MirrorError::NotFound { .. }));
}

#[test]
fn invalid_names_are_rejected() {
	let store = Store::new("unused");
	for name in ["", ".", "..", "a/b", "a\\b"] {
		let err = store.path_for(name, Format::Json).expect_err("invalid name");
		assert!(matches!(err, MirrorError::InvalidFileName { .. }), "{name:?}");
		assert!(!store.exists(name, Format::Json));
	}
}

#[test]
fn json_tree_loads_without_types() {
	let dir = tempfile::tempdir().expect("tempdir");
	let store = Store::new(dir.path());
	let path = store.save(&clark(), Format::Json).expect("saves");

	let (format, tree) = load_tree(&path).expect("tree loads");
	assert_eq!(format, Format::Json);
	assert_eq!(tree.to_json(), serde_json::json!({"firstName": "Clark", "gender": 0}));

	let err = load_tree(&dir.path().join("x.bin")).expect_err("unknown extension");
	assert!(matches!(err, MirrorError::UnknownFormat { .. }));
}

#[test]
fn plist_save_and_load_round_trip() {
	let dir = tempfile::tempdir().expect("tempdir");
	let store = Store::new(dir.path());

	let path = store.save(&clark(), Format::Plist).expect("saves");
	assert_eq!(path, dir.path().join("additional_info.plist"));
	let back: AdditionalInfo = store.load(Format::Plist).expect("loads");
	assert_eq!(back.first_name, "Clark");
	assert_eq!(back.gender, clark().gender);

	let (format, tree) = load_tree(&path).expect("tree loads");
	assert_eq!(format, Format::Plist);
	assert_eq!(tree.to_json(), serde_json::json!({"firstName": "Clark", "gender": 0}));
	assert_eq!(store.list().expect("lists")[0].format, Format::Plist);
}
