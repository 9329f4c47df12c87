use super::*;
use pretty_assertions::assert_eq;

fn translate(build: &DeclaredBuild, path: &str) -> Option<Path> {
    build.identity_path_for_project(&Path::new(path)).ok()
}

#[test]
fn test_root_build_keeps_local_paths() {
    let build = DeclaredBuild::root();
    assert_eq!(translate(&build, ":"), Some(Path::root()));
    assert_eq!(translate(&build, ":sub"), Some(Path::new(":sub")));
    assert!(build.build_identifier().is_root());
    assert!(!build.is_implicit_build());
}

#[test]
fn test_included_build_prefixes_local_paths() {
    let build = DeclaredBuild::included("composite");
    assert_eq!(build.identity_root(), &Path::new(":composite"));
    assert_eq!(translate(&build, ":"), Some(Path::new(":composite")));
    assert_eq!(translate(&build, ":lib"), Some(Path::new(":composite:lib")));
}

#[test]
fn test_declared_projects_in_order() {
    let build = DeclaredBuild::root()
        .implicit(true)
        .project(":", "root")
        .project(":sub", "sub");
    assert!(build.is_implicit_build());
    let projects = build.projects().ok();
    assert_eq!(
        projects,
        Some(vec![
            ProjectDescriptor::new(Path::root(), "root"),
            ProjectDescriptor::new(Path::new(":sub"), "sub"),
        ])
    );
}

#[test]
fn test_source_debug_names_build() {
    let build: Arc<dyn BuildSource> = Arc::new(DeclaredBuild::included("plugins"));
    assert_eq!(format!("{build:?}"), "BuildSource(build 'plugins')");
}

#[test]
fn test_path_is_its_own_handle() {
    let path = Path::new(":a:b");
    assert_eq!(ProjectHandle::identity_path(&path), path);
    assert_eq!(Arc::new(path.clone()).identity_path(), path);
}

#[test]
fn test_included_name_with_separator_nests() {
    let build = DeclaredBuild::included("nested:inner");
    assert_eq!(build.identity_root(), &Path::new(":nested:inner"));
    assert_eq!(build.identity_root().segment_count(), 2);
}
