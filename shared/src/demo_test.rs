use super::*;

#[test]
fn file_name_is_last_segment() {
    assert_eq!(file_name_from_path("/static/samples/forged.jpg"), "forged.jpg");
    assert_eq!(file_name_from_path("plain.png"), "plain.png");
    assert_eq!(file_name_from_path("/static/samples/real.webp?v=2"), "real.webp");
    assert_eq!(file_name_from_path("/static/samples/"), "samples");
    assert_eq!(file_name_from_path(""), "sample");
}

#[test]
fn served_content_type_wins() {
    assert_eq!(sample_mime_type("/a.jpg", Some("image/png")), "image/png");
    assert_eq!(sample_mime_type("/a.jpg", Some("image/jpeg; charset=binary")), "image/jpeg");
}

#[test]
fn extension_used_when_server_sends_no_type() {
    assert_eq!(sample_mime_type("/static/samples/a.JPG", None), "image/jpeg");
    assert_eq!(sample_mime_type("/static/samples/a.webp", Some("")), "image/webp");
}

#[test]
fn unknown_extension_gives_empty_type() {
    assert_eq!(sample_mime_type("/static/samples/a.gif", None), "");
    assert_eq!(sample_mime_type("/static/samples/noext", None), "");
}
