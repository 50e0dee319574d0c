use super::*;

#[test]
fn handle_zero_is_unset() {
    assert!(!ResourceHandle::NONE.is_set());
    assert!(!ResourceHandle::default().is_set());
    assert!(ResourceHandle(7).is_set());
}

#[test]
fn in_memory_roundtrip_and_unknown() {
    let mut res = InMemoryResources::new();
    assert!(res.is_empty());
    res.insert(ResourceHandle(3), b"<svg/>".to_vec()).unwrap();
    assert_eq!(res.len(), 1);
    assert_eq!(res.open(ResourceHandle(3)).unwrap().as_slice(), b"<svg/>");

    let err = res.open(ResourceHandle(4)).unwrap_err();
    assert!(err.to_string().contains("resource error:"));
}

#[test]
fn in_memory_rejects_unset_handle() {
    let mut res = InMemoryResources::new();
    assert!(res.insert(ResourceHandle::NONE, Vec::new()).is_err());
}

#[test]
fn no_resources_always_fails() {
    assert!(NoResources.open(ResourceHandle(1)).is_err());
}

#[test]
fn rooted_path_rules() {
    assert_eq!(rooted_path("a/./b.svg").unwrap(), PathBuf::from("a").join("b.svg"));
    assert_eq!(rooted_path("./b.svg").unwrap(), PathBuf::from("b.svg"));
    assert!(rooted_path("/abs.svg").is_err());
    assert!(rooted_path("../up.svg").is_err());
    assert!(rooted_path("a/../../up.svg").is_err());
    assert!(rooted_path("").is_err());
    assert!(rooted_path("./").is_err());
}

#[test]
fn file_resources_reject_escaping_paths() {
    let mut files = FileResources::new("target");
    assert!(files.register(ResourceHandle(1), "../secret.svg").is_err());
    assert!(files.register(ResourceHandle(1), "/etc/passwd").is_err());
    assert!(files.register(ResourceHandle(1), "masks/star.svg").is_ok());
}

#[test]
fn file_resources_read_registered_files() {
    let dir = std::path::PathBuf::from("target").join("unit_file_resources");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("shape.svg"), b"<svg/>").unwrap();

    let mut res = FileResources::new(&dir);
    res.register(ResourceHandle(1), "shape.svg").unwrap();
    res.register(ResourceHandle(2), "missing.svg").unwrap();

    assert_eq!(res.root(), dir.as_path());
    assert_eq!(res.open(ResourceHandle(1)).unwrap().as_slice(), b"<svg/>");
    assert!(res.open(ResourceHandle(2)).is_err());
    assert!(res.open(ResourceHandle(3)).is_err());
}
