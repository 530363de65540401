use route_table::HttpMethod::{After, Before, Get, Post};
use route_table::{HttpMethod, RouteEntry, ALL_PATHS};

fn entry(method: HttpMethod, pattern: &str) -> RouteEntry<()> {
    RouteEntry::new(method, pattern, ()).unwrap()
}

fn is_match(pattern: &str, uri: &str) -> bool {
    entry(Get, pattern).matches(Get, uri).is_some()
}

fn check(cases: &[(&str, &str, bool)]) {
    for &(pattern, uri, expected) in cases {
        assert_eq!(
            is_match(pattern, uri),
            expected,
            "pattern = {:?}, uri = {:?}",
            pattern,
            uri
        );
    }
}

#[test]
fn filter_all_paths() {
    let before = entry(Before, ALL_PATHS);
    assert!(before.matches(Before, ALL_PATHS).is_some());
    assert!(before.matches(Before, "/any/path/at/all").is_some());
    assert!(before.matches(Before, "").is_some());
    assert!(before.matches(After, "/any").is_none());
    assert!(before.matches(Get, "/any").is_none());

    let after = RouteEntry::filter_all(After, ()).unwrap();
    assert!(after.matches(After, "/x/y/").is_some());
}

#[test]
fn method_must_match() {
    let e = entry(Post, "/test");
    assert!(e.matches(Get, "/path").is_none());
    assert!(e.matches(Get, "/test").is_none());
    assert!(e.matches(Post, "/test").is_some());
}

#[test]
fn literal() {
    check(&[
        ("/test/", "/test/", true),
        ("/test/me", "/test/other", false),
        ("/test", "/test/", false),
        ("/test/", "/test", false),
        ("/Hello", "/hello", false),
        ("/api/v1/管理者/", "/api/v1/管理者/", true),
    ]);
}

#[test]
fn literal_matches_itself() {
    let patterns = ["/", "/a", "/a/b", "/a/b/", "file1", "dir1/", "/a/?/b", "/files/*", "/dir3/?", "dir4/?", "/?"];
    for &p in patterns.iter() {
        assert!(is_match(p, p), "{}", p);
    }
}

#[test]
fn trailing_slash() {
    check(&[
        ("/", "/", true),
        ("/", "/user/", false),
        ("file1", "/file1", true),
        ("file1", "/file1/", false),
        ("/file2", "/file2", true),
        ("/file2", "/file2/", false),
        ("dir1/", "/dir1/", true),
        ("dir1/", "/dir1", false),
        ("/dir2/", "/dir2/", true),
        ("/dir2/", "/dir2", false),
        ("dir3/?", "/dir3", true),
        ("dir3/?", "/dir3/", true),
        ("dir3/?", "/dir3/dir", false),
        ("dir4/?", "/dir4/", true),
        ("dir4/?", "/dir4/dir/", false),
        ("/dir5/?", "/dir5", true),
        ("/dir5/?", "/dir", false),
        ("/dir6/?", "/dir6/", true),
        ("/dir6/?", "/dir/", false),
    ]);
}

#[test]
fn root_aliases() {
    check(&[
        ("", "/", true),
        ("", "", true),
        ("", "/_", false),
        ("/?", "/", true),
        ("/?", "", true),
        ("/?", "/@", false),
    ]);
}

#[test]
fn named_params() {
    let e = entry(Get, "/test/:name");
    let params = e.matches(Get, "/test/other").unwrap();
    assert_eq!(params.get("name"), Some("other"));
    assert_eq!(params.get(":name"), Some("other"));
    assert!(params.splat().is_empty());

    assert!(e.matches(Get, "/test").is_none());
    assert!(e.matches(Get, "/test/a/b").is_none());

    let e = entry(Get, "/u/:uid/p/:pid");
    let params = e.matches(Get, "/u/asd/p/42").unwrap();
    let bound: Vec<(&str, &str)> = params.iter().collect();
    assert_eq!(bound, vec![("uid", "asd"), ("pid", "42")]);
    assert_eq!(params.parse::<u32>("pid").unwrap().unwrap(), 42);
    assert!(params.parse::<u32>("uid").unwrap().is_err());
    assert!(params.parse::<u32>("missing").is_none());
}

#[test]
fn param_names_ignore_ascii_case() {
    let e = entry(Get, "/user/:ID");
    let params = e.matches(Get, "/user/7").unwrap();
    assert_eq!(params.get("id"), Some("7"));
    assert_eq!(params.get(":Id"), Some("7"));
}

#[test]
fn decoded_non_ascii_param() {
    let e = entry(Get, "/api/v1/:x");
    let params = e.matches(Get, "/api/v1/管理者").unwrap();
    assert_eq!(params.get("x"), Some("管理者"));
}

#[test]
fn optional_trailing_param() {
    check(&[
        ("/test/:name?", "/test", true),
        ("/test/:name?", "/test/foo", true),
        ("/test/:name?", "/test/a/b", false),
        ("/test/:name?", "/other", false),
        ("/a/:b?/:c?", "/a", true),
        ("/a/:b?/:c?", "/a/1/2", true),
        ("/a/:b/:c?", "/a", false),
    ]);

    let e = entry(Get, "/test/:name?");
    let params = e.matches(Get, "/test").unwrap();
    assert!(params.is_empty());
    assert_eq!(params.get("name"), None);

    let params = e.matches(Get, "/test/foo").unwrap();
    assert_eq!(params.get("name"), Some("foo"));
}

#[test]
fn optional_tail_requires_static_prefix() {
    // the part of the pattern covered by a shorter uri is compared verbatim
    check(&[
        ("/users/:id/:tab?", "/users/5", false),
        ("/a/:b?/:c?", "/a/1", false),
    ]);
}

#[test]
fn wildcard() {
    check(&[
        ("/test/*", "/test/me", true),
        ("/test/*", "/test", false),
        ("/test/*", "/test/", true),
        ("/test/*", "/test/a/b/c", true),
        ("/test/*", "/other/me", false),
        ("/test/this/resource/*", "/test/this/resource/child/id", true),
        ("/a/*/c", "/a/b/c", true),
        ("/a/*/c", "/a/b/d", false),
        ("/a/*/c", "/a/b/c/d", false),
        ("/:p/*", "/x/y/z", true),
    ]);
}

#[test]
fn wildcard_binds_no_name() {
    let e = entry(Get, "/test/*");
    let params = e.matches(Get, "/test/me").unwrap();
    assert!(params.is_empty());
    assert_eq!(params.splat(), &["me"]);

    let e = entry(Get, "/files/*");
    assert_eq!(e.matches(Get, "/files/a/b/").unwrap().splat(), &["a/b"]);
    assert_eq!(e.matches(Get, "/files/").unwrap().splat(), &[""]);

    let e = entry(Get, "/a/*/c/*");
    assert_eq!(e.matches(Get, "/a/b/c/d/e").unwrap().splat(), &["b", "d/e"]);

    let e = entry(Get, "/:p/*");
    let params = e.matches(Get, "/x/y/z").unwrap();
    assert_eq!(params.get("p"), Some("x"));
    assert_eq!(params.splat(), &["y/z"]);
}

#[test]
fn regex() {
    check(&[
        ("~/private", "/panel/private-room/my.page", true),
        ("~/private", "/there/is/no/privacy/here.page", false),
        ("~/^\\/(user|login)", "/users.list", true),
        ("~/^\\/(user|login)", "/admin.jsp", false),
        ("~/\\.html?$/", "/beer/hold-into-my-glass.htm", true),
        ("~/\\.html?$/", "/beer/hold-into-my-glass.pdf", false),
        ("~/^\\/hello$", "/HELLO", true),
    ]);
}

#[test]
fn regex_named_groups() {
    let e = entry(
        Get,
        "~/^\\/(?<topic>[^-]+)-(?<code>[^-]+)-(?<text>[^.]+)\\.(?<ext>.*)$/",
    );
    assert!(e.matches(Get, "/login-1233.html").is_none());

    let params = e.matches(Get, "/login-1233-shake hands.html").unwrap();
    assert_eq!(params.get("topic"), Some("login"));
    assert_eq!(params.get("code"), Some("1233"));
    assert_eq!(params.get("text"), Some("shake hands"));
    assert_eq!(params.get("ext"), Some("html"));
    assert_eq!(params.at(1), Some("login"));
    assert_eq!(params.at(4), Some("html"));
    assert_eq!(params.at(5), None);
}

#[test]
fn regex_positional_groups() {
    let e = entry(Get, "~/\\/(\\d+)-([^.]+)\\.book");
    let params = e.matches(Get, "/9999-the-spark.book").unwrap();
    assert_eq!(params.at(1), Some("9999"));
    assert_eq!(params.at(2), Some("the-spark"));
    assert_eq!(params.parse::<u32>("1").unwrap().unwrap(), 9999);

    let e = entry(Get, "~/(?<name>books)\\/(?<book>\\d+)");
    let params = e.matches(Get, "/books/9999").unwrap();
    assert_eq!(params.get("book"), Some("9999"));
    assert_eq!(params.at(2), Some("9999"));
}

#[test]
fn regex_unmatched_group_binds_nothing() {
    let e = entry(Get, "~/^\\/a(\\/(?<b>x))?$");
    let params = e.matches(Get, "/a").unwrap();
    assert!(params.is_empty());
    assert_eq!(params.get("b"), None);

    let params = e.matches(Get, "/a/x").unwrap();
    assert_eq!(params.get("b"), Some("x"));
}

#[test]
fn reserved_regex_prefix() {
    let e = entry(Get, "~/home");
    assert!(e.matches(Get, "/users/home/x").is_some());
}
