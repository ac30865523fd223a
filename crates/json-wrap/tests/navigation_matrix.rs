use json_wrap::{wrap, Kind, Wrapper};
use serde_json::json;

fn fixture() -> Wrapper {
    wrap(json!({
        "name": "svc",
        "ports": [80, 443],
        "limits": {"cpu": 1.5, "mem": 512, "burst": -1},
        "tags": {"env": "prod"},
        "none": null
    }))
}

#[test]
fn dotted_paths_matrix() {
    let doc = fixture();
    let cases = [
        ("name", "<root>.name"),
        ("ports.1", "<root>.ports[1]"),
        ("limits.cpu", "<root>.limits.cpu"),
        ("tags.env", "<root>.tags.env"),
        ("none.deeper.still", "<root>.none"),
        ("ports.9.x", "<root>.ports[9]"),
        ("name.0", "<root>.name[0]"),
        ("limits..cpu", "<root>.limits"),
    ];
    for (dotted, rendered) in cases {
        assert_eq!(doc.at_path(dotted).path().to_string(), rendered, "path {:?}", dotted);
    }
}

#[test]
fn error_messages_matrix() {
    let doc = fixture();
    let cases: Vec<(Wrapper, &str)> = vec![
        (
            doc.at_path("ports.2"),
            "<root>.ports: index out of bounds 2 >= 2",
        ),
        (
            doc.at_key("name").at_index(0),
            "<root>.name: type error: wanted array, got string",
        ),
        (
            doc.at_key("ports").at_key("first"),
            "<root>.ports: type error: wanted dict, got array",
        ),
    ];
    for (w, msg) in cases {
        assert_eq!(w.error().expect("error expected").to_string(), msg);
    }
}

#[test]
fn coercions_through_paths() {
    let doc = fixture();
    assert_eq!(doc.at_path("limits.cpu").get_i64().unwrap(), 1);
    assert_eq!(doc.at_path("limits.cpu").get_u64().unwrap(), 1);
    assert_eq!(doc.at_path("limits.mem").get_f64().unwrap(), 512.0);
    assert_eq!(doc.at_path("ports.0").get_uint().unwrap(), 80);
    assert_eq!(
        doc.at_path("limits.burst").get_u64().unwrap_err().to_string(),
        "<root>.limits.burst: Unsigned uint64 underflow error"
    );
}

#[test]
fn error_carrier_keeps_first_error_across_getters() {
    let broken = fixture().at_path("ports.5");
    let deeper = broken.at_key("a").at_index(0);
    assert_eq!(deeper.path().to_string(), "<root>.ports[5].a[0]");
    assert_eq!(deeper.error(), broken.error());
    assert_eq!(deeper.get_string().unwrap_err(), broken.get_i64().unwrap_err());
}

#[test]
fn build_tree_then_encode() {
    let root = Wrapper::new_map();
    let list = Wrapper::new_seq(2);
    list.set_index(0, &Wrapper::new_int(1)).unwrap();
    list.set_index(1, &Wrapper::new_string("two")).unwrap();
    list.push(&Wrapper::new_float(3.5)).unwrap();

    root.set_key("list", &list).unwrap();
    root.set_key("ok", &Wrapper::new_bool(true)).unwrap();
    root.set_key("nothing", &Wrapper::new_null()).unwrap();
    root.set_key("big", &Wrapper::new_uint(u64::MAX)).unwrap();

    assert_eq!(
        root.to_json(),
        json!({"list": [1, "two", 3.5], "ok": true, "nothing": null, "big": u64::MAX})
    );
    assert_eq!(root.keys().unwrap().len(), 4);
    // The list was stored by handle, so later writes show through the root.
    list.set_index(0, &Wrapper::new_int(100)).unwrap();
    assert_eq!(root.at_path("list.0").get_i64().unwrap(), 100);
}

#[test]
fn detached_copy_does_not_alias() {
    let doc = fixture();
    let copy = Wrapper::new(doc.value().deep_clone());
    copy.at_key("tags")
        .set_key("env", &Wrapper::new_string("dev"))
        .unwrap();
    assert_eq!(doc.at_path("tags.env").get_string().unwrap(), "prod");
    assert_eq!(copy.at_path("tags.env").get_string().unwrap(), "dev");
    assert_eq!(copy.into_value().kind(), Kind::Dict);
}
